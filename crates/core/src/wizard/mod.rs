//! Campaign creation wizard
//!
//! A four-step state machine (basic info, contact mapping, schedule,
//! review) with per-step validation gates, plus the submission service
//! that turns a completed wizard run into backend requests.

pub mod ports;
pub mod service;
pub mod state;

pub use ports::CampaignGateway;
pub use service::{SubmissionOutcome, SubmissionService};
pub use state::{CampaignSubmission, WizardState, WizardStep};
