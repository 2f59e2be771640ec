//! Domain types and models
//!
//! Server-owned projections mirror the backend wire format field-for-field;
//! client-only types (intake contacts, table data) never cross the wire
//! unchanged.

pub mod analysis;
pub mod campaign;
pub mod calls;
pub mod contact;
pub mod directory;
pub mod table;

pub use analysis::{AnalysisAvailability, AnalysisGap, AnalysisProgress, CallMapping};
pub use campaign::{Campaign, CampaignStats, CampaignStatus, NewCampaign};
pub use calls::{
    CallDispatch, CallRecord, CallRequest, CallStatusSnapshot, CompletedCallDetails,
    LiveCallDetails, LiveCallState, PageMeta, RecentCallsPage,
};
pub use contact::{CampaignContact, Contact, ContactStatus, InvalidContact, NewContact};
pub use directory::{Agent, NumberType, SavedPhoneNumber};
pub use table::TableData;
