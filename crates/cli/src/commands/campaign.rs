//! Campaign flows: flag-driven creation wizard and live watching.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::Args;

use calldeck_core::{WizardState, WizardStep};
use calldeck_domain::{
    AnalysisAvailability, CampaignContact, CampaignStatus, ContactStatus,
};
use calldeck_infra::{
    load_contact_table, CampaignMonitor, CampaignMonitorConfig, SchedulerError,
};

use crate::context::AppContext;
use crate::render;

/// Flags driving the campaign-creation wizard end to end
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Campaign name
    #[arg(long)]
    pub name: String,

    /// Agent who makes the calls
    #[arg(long = "agent", value_name = "AGENT_ID")]
    pub agent_id: String,

    /// Caller id the campaign dials from
    #[arg(long = "from", value_name = "NUMBER")]
    pub from_number: String,

    /// Contact file (.csv, .xlsx or .xls)
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Zero-based phone column, overriding detection
    #[arg(long, value_name = "INDEX")]
    pub phone_column: Option<usize>,

    /// Zero-based name column, overriding detection
    #[arg(long, value_name = "INDEX")]
    pub name_column: Option<usize>,

    /// Schedule date (YYYY-MM-DD); omit both schedule flags to start right away
    #[arg(long, requires = "schedule_time", value_name = "DATE")]
    pub schedule_date: Option<String>,

    /// Schedule time (HH:MM)
    #[arg(long, requires = "schedule_date", value_name = "TIME")]
    pub schedule_time: Option<String>,

    /// Walk the wizard and print the review without submitting
    #[arg(long)]
    pub dry_run: bool,
}

/// Flags for following one campaign
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Campaign to follow
    pub id: i64,

    /// Override the poll interval in seconds
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,
}

/// Drive the wizard from flags and submit the result.
///
/// The step gates run exactly as they do interactively: basic info first,
/// then contact mapping and selection, then schedule, then the review
/// snapshot that goes to the backend. A dry run stays off the network.
pub async fn create(context: &AppContext, args: CreateArgs) -> anyhow::Result<()> {
    let table = load_contact_table(&args.file)
        .with_context(|| format!("cannot read contact file {}", args.file.display()))?;
    let file_name = args.file.file_name().map(|name| name.to_string_lossy().into_owned());

    let mut wizard = WizardState::new().with_policy(context.config.dialing.clone());
    wizard.campaign_name = args.name;
    wizard.agent_id = args.agent_id;
    wizard.from_number = args.from_number;

    if !args.dry_run {
        // Resolve the agent up front so an unknown id fails before any
        // contacts are classified or submitted.
        let agents = context.directory.agents().await?;
        let agent = agents
            .iter()
            .find(|agent| agent.agent_id == wizard.agent_id)
            .with_context(|| {
                format!("agent '{}' is not configured on the backend", wizard.agent_id)
            })?;
        wizard.agent_name = Some(agent.name.clone());
    }

    wizard.load_table(table, file_name);
    if args.phone_column.is_some() {
        wizard.set_phone_column(args.phone_column);
    }
    if args.name_column.is_some() {
        wizard.set_name_column(args.name_column);
    }

    if let (Some(date), Some(time)) = (args.schedule_date, args.schedule_time) {
        wizard.schedule_later = true;
        wizard.schedule_date = date;
        wizard.schedule_time = time;
    }

    render::classification(wizard.valid_contacts(), wizard.invalid_contacts());

    while wizard.step() != WizardStep::Review {
        let step = wizard.step();
        wizard.next_step().with_context(|| format!("cannot leave the {step} step"))?;
    }

    let submission = wizard.submission().context("review rejected the submission")?;
    render::review(&submission);

    if args.dry_run {
        render::dry_run_notice();
        return Ok(());
    }

    let outcome = context.submission_service().submit(&submission).await?;
    render::submitted(&outcome);
    Ok(())
}

/// Follow a campaign until the backend reports it completed, then run one
/// analysis availability sweep over the finished calls.
///
/// Ctrl-c leaves early at any point; the monitors stop cleanly either way.
pub async fn watch(context: &AppContext, args: WatchArgs) -> anyhow::Result<()> {
    let mut config = CampaignMonitorConfig::from(&context.config.monitor);
    if let Some(secs) = args.interval {
        config.poll_interval = Duration::from_secs(secs.max(1));
    }
    let interval = config.poll_interval;

    let mut monitor = CampaignMonitor::with_config(context.monitoring_gateway(), args.id, config);
    monitor.start().await?;
    render::watch_header(&format!("campaign {}", args.id), interval);

    let mut last_frame = String::new();
    let completed = loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break false,
            _ = tokio::time::sleep(interval) => {}
        }

        let snapshot = monitor.snapshot();
        render::frame_if_changed(&mut last_frame, render::campaign_frame(&snapshot));

        let done = snapshot
            .campaign
            .as_ref()
            .is_some_and(|campaign| campaign.status == CampaignStatus::Completed);
        if done {
            break true;
        }
    };

    stop_monitor(&mut monitor).await?;
    if !completed {
        return Ok(());
    }

    let snapshot = monitor.snapshot();
    render::campaign_finished(&snapshot);
    check_analysis(context, snapshot.contacts).await
}

/// One bounded availability sweep over the finished campaign's contacts
async fn check_analysis(
    context: &AppContext,
    contacts: Vec<CampaignContact>,
) -> anyhow::Result<()> {
    let mut scheduler = context.analysis_scheduler();
    scheduler.start(contacts.clone()).await?;

    let mut last_frame = String::new();
    while scheduler.is_running() {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                match scheduler.stop().await {
                    Ok(()) | Err(SchedulerError::NotRunning) => {}
                    Err(err) => return Err(err.into()),
                }
                break;
            }
            _ = tokio::time::sleep(Duration::from_secs(1)) => {
                let frame = render::analysis_frame(scheduler.progress());
                render::frame_if_changed(&mut last_frame, frame);
            }
        }
    }

    let rows: Vec<(&CampaignContact, Option<AnalysisAvailability>)> = contacts
        .iter()
        .filter(|contact| {
            contact.status == ContactStatus::Completed && contact.call_uuid.is_some()
        })
        .map(|contact| {
            let availability =
                contact.call_uuid.as_deref().and_then(|uuid| scheduler.availability(uuid));
            (contact, availability)
        })
        .collect();
    render::analysis_summary(&rows);
    Ok(())
}

/// Stop a monitor that may have already wound itself down
async fn stop_monitor(monitor: &mut CampaignMonitor) -> anyhow::Result<()> {
    match monitor.stop().await {
        Ok(()) | Err(SchedulerError::NotRunning) => Ok(()),
        Err(err) => Err(err.into()),
    }
}
