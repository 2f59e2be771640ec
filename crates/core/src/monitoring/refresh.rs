//! Refresh planning and stale-response guarding
//!
//! Polling runs on a fixed interval while responses arrive whenever the
//! network lets them. [`PollGate`] hands every tick a generation number so
//! a slow in-flight response can be recognized as stale and dropped instead
//! of overwriting fresher state. [`RefreshPlan`] decides how much of the
//! campaign a tick actually needs to re-fetch.

use std::sync::atomic::{AtomicU64, Ordering};

use calldeck_domain::{CampaignContact, ContactStatus};

/// Monotonic generation counter for poll ticks.
///
/// `begin()` opens a new generation and implicitly invalidates all earlier
/// ones; a response is applied only while its generation is still current.
#[derive(Debug, Default)]
pub struct PollGate {
    generation: AtomicU64,
}

impl PollGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new generation for a poll tick
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a response from `generation` may still be applied
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Invalidate every outstanding generation without opening a new one,
    /// so responses racing a stop are dropped
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// What one monitor tick should re-fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshPlan {
    /// Re-fetch stats and the whole contact list
    Full,
    /// Only look up live call details for the contacts currently mid-call,
    /// keyed `(contact_id, call_uuid)`
    Partial(Vec<(i64, String)>),
}

impl RefreshPlan {
    /// Plan the next refresh from the contact list the monitor holds.
    ///
    /// While any contact is mid-call with a known call UUID, polling narrows
    /// to just those calls; the moment none are, the next tick goes back to
    /// a full refresh so terminal statuses come from the backend.
    pub fn for_contacts(contacts: &[CampaignContact]) -> Self {
        let calling: Vec<(i64, String)> = contacts
            .iter()
            .filter(|contact| contact.status == ContactStatus::Calling)
            .filter_map(|contact| {
                contact.call_uuid.as_ref().map(|uuid| (contact.id, uuid.clone()))
            })
            .collect();

        if calling.is_empty() {
            Self::Full
        } else {
            Self::Partial(calling)
        }
    }

    /// Whether this plan re-fetches everything
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }
}
