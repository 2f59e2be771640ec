//! # CallDeck Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Contact intake: phone normalization, column detection, classification
//! - The campaign creation wizard state machine and submission service
//! - Monitoring primitives: refresh planning, stale-poll guards, analysis
//!   availability checking
//!
//! ## Architecture Principles
//! - Only depends on `calldeck-common` and `calldeck-domain`
//! - No HTTP, filesystem, or terminal code
//! - All external collaborators via traits
//! - Pure, testable business logic

pub mod intake;
pub mod monitoring;
pub mod wizard;

// Re-export specific items to avoid ambiguity
pub use intake::classifier::{ClassifiedContacts, ContactClassifier};
pub use intake::columns::ColumnMapping;
pub use intake::normalizer::{NormalizedPhone, PhoneNormalizer, PhoneRejection};
pub use monitoring::analysis::AnalysisChecker;
pub use monitoring::ports::{AnalysisGateway, MonitoringGateway};
pub use monitoring::refresh::{PollGate, RefreshPlan};
pub use wizard::ports::CampaignGateway;
pub use wizard::service::{SubmissionOutcome, SubmissionService};
pub use wizard::state::{CampaignSubmission, WizardState, WizardStep};
