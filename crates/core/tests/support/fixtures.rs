//! Canned wizard inputs shared across integration scenarios.

use calldeck_core::WizardState;
use calldeck_domain::TableData;

/// A small uploaded-contact table covering the interesting intake cases:
/// a bare national number that needs fixing, an already-normalized one,
/// and a row that cannot be dialed at all.
pub fn contact_table() -> TableData {
    TableData::new(
        vec!["Name".into(), "Phone".into()],
        vec![
            vec!["Alice".into(), "9876543210".into()],
            vec!["Bob".into(), "+919812345678".into()],
            vec!["Mallory".into(), "notaphone".into()],
        ],
    )
}

/// A wizard with basic info filled in and [`contact_table`] loaded,
/// ready to walk forward from the first step.
pub fn filled_wizard() -> WizardState {
    let mut wizard = WizardState::new();
    wizard.campaign_name = "Q3 Outreach".into();
    wizard.agent_id = "agent-7".into();
    wizard.from_number = "+918879415567".into();
    wizard.load_table(contact_table(), Some("contacts.csv".into()));
    wizard
}
