//! Command tree and dispatch.
//!
//! One module per command group, mirroring the backend surface: directory
//! lookups, call history and live watching, campaign administration, and
//! the campaign creation and watch flows.

pub mod calls;
pub mod campaign;
pub mod campaigns;
pub mod directory;
pub mod doctor;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use calldeck_domain::{CampaignStatus, NumberType};

use crate::context::AppContext;

pub use campaign::{CreateArgs, WatchArgs};

/// Operator console for the outbound call-campaign backend
#[derive(Debug, Parser)]
#[command(name = "calldeck", version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the probed locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check backend reachability and print the effective configuration
    Doctor,

    /// Calling agents configured on the backend
    Agents {
        #[command(subcommand)]
        command: AgentsCommand,
    },

    /// Saved phone numbers
    Numbers {
        #[command(subcommand)]
        command: NumbersCommand,
    },

    /// Call history, point-in-time status and live watching
    Calls {
        #[command(subcommand)]
        command: CallsCommand,
    },

    /// Campaign administration
    Campaigns {
        #[command(subcommand)]
        command: CampaignsCommand,
    },

    /// Campaign flows: create from a contact file, follow a run
    Campaign {
        #[command(subcommand)]
        command: CampaignCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum AgentsCommand {
    /// List agents with their default caller ids
    List,
}

#[derive(Debug, Subcommand)]
pub enum NumbersCommand {
    /// List saved numbers, optionally narrowed to one kind
    List {
        /// Only numbers of this kind
        #[arg(long = "type", value_enum, value_name = "KIND")]
        kind: Option<NumberKindArg>,
    },
}

#[derive(Debug, Subcommand)]
pub enum CallsCommand {
    /// Most recent calls, newest first
    Recent {
        /// Page size
        #[arg(long, default_value_t = 20)]
        limit: u32,
        /// Rows to skip before the page
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Point-in-time status of one call
    Status {
        /// Call UUID as reported by the backend
        call_uuid: String,
    },
    /// Poll one call until the backend reports it completed
    Watch {
        /// Call UUID as reported by the backend
        call_uuid: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CampaignsCommand {
    /// List all campaigns
    List,
    /// Full details of one campaign
    Show { id: i64 },
    /// Aggregated statistics of one campaign
    Stats { id: i64 },
    /// Contacts of one campaign with their call status
    Contacts { id: i64 },
    /// Move a campaign to a new lifecycle status
    SetStatus {
        id: i64,
        /// Target status
        #[arg(value_enum)]
        status: StatusArg,
    },
    /// Delete a campaign and all of its contacts
    Delete {
        id: i64,
        /// Skip the confirmation guard
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum CampaignCommand {
    /// Create a campaign from a contact file
    Create(CreateArgs),
    /// Follow a running campaign until it completes
    Watch(WatchArgs),
}

/// CLI-side mirror of [`NumberType`] for clap to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NumberKindArg {
    /// Numbers campaigns dial out to
    Recipient,
    /// Caller ids campaigns dial from
    From,
}

impl From<NumberKindArg> for NumberType {
    fn from(kind: NumberKindArg) -> Self {
        match kind {
            NumberKindArg::Recipient => NumberType::Recipient,
            NumberKindArg::From => NumberType::From,
        }
    }
}

/// CLI-side mirror of [`CampaignStatus`] for clap to parse.
///
/// `scheduled` is deliberately absent: campaigns become scheduled by
/// carrying a schedule date at creation, not through a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Created,
    Running,
    Paused,
    Completed,
}

impl From<StatusArg> for CampaignStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Created => CampaignStatus::Created,
            StatusArg::Running => CampaignStatus::Running,
            StatusArg::Paused => CampaignStatus::Paused,
            StatusArg::Completed => CampaignStatus::Completed,
        }
    }
}

/// Resolve the context and dispatch to the command handlers.
///
/// # Errors
///
/// Propagates configuration, validation and backend errors; `main` renders
/// them through the anyhow chain.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let context = AppContext::load(cli.config)?;

    match cli.command {
        Command::Doctor => doctor::run(&context).await,
        Command::Agents { command } => match command {
            AgentsCommand::List => directory::list_agents(&context).await,
        },
        Command::Numbers { command } => match command {
            NumbersCommand::List { kind } => {
                directory::list_numbers(&context, kind.map(NumberType::from)).await
            }
        },
        Command::Calls { command } => match command {
            CallsCommand::Recent { limit, offset } => calls::recent(&context, limit, offset).await,
            CallsCommand::Status { call_uuid } => calls::status(&context, &call_uuid).await,
            CallsCommand::Watch { call_uuid } => calls::watch(&context, &call_uuid).await,
        },
        Command::Campaigns { command } => match command {
            CampaignsCommand::List => campaigns::list(&context).await,
            CampaignsCommand::Show { id } => campaigns::show(&context, id).await,
            CampaignsCommand::Stats { id } => campaigns::stats(&context, id).await,
            CampaignsCommand::Contacts { id } => campaigns::contacts(&context, id).await,
            CampaignsCommand::SetStatus { id, status } => {
                campaigns::set_status(&context, id, status.into()).await
            }
            CampaignsCommand::Delete { id, yes } => campaigns::delete(&context, id, yes).await,
        },
        Command::Campaign { command } => match command {
            CampaignCommand::Create(args) => campaign::create(&context, args).await,
            CampaignCommand::Watch(args) => campaign::watch(&context, args).await,
        },
    }
}
