//! Contact intake domain
//!
//! Turns a parsed contact table into validated campaign contacts: detect
//! which columns hold phone and name, normalize every phone number under
//! the configured dialing policy, and split rows into valid and invalid
//! sets.

pub mod classifier;
pub mod columns;
pub mod normalizer;

pub use classifier::{ClassifiedContacts, ContactClassifier};
pub use columns::ColumnMapping;
pub use normalizer::{NormalizedPhone, PhoneNormalizer, PhoneRejection};
