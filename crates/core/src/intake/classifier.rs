//! Contact classification
//!
//! Splits a parsed table into contacts the backend will accept and rows the
//! operator has to fix. Every row lands in exactly one of the two sets;
//! nothing is silently dropped.

use calldeck_domain::constants::DEFAULT_CONTACT_NAME_PREFIX;
use calldeck_domain::{Contact, DialingConfig, InvalidContact, TableData};

use super::columns::ColumnMapping;
use super::normalizer::PhoneNormalizer;

/// Outcome of classifying a table under a column mapping
#[derive(Debug, Clone, Default)]
pub struct ClassifiedContacts {
    pub valid: Vec<Contact>,
    pub invalid: Vec<InvalidContact>,
}

impl ClassifiedContacts {
    /// Total rows classified
    pub fn len(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }
}

/// Classifies table rows into valid and invalid contacts.
///
/// Classification is stateless: each call produces a complete fresh result,
/// so re-running after a mapping change fully replaces the previous sets.
#[derive(Debug, Clone, Default)]
pub struct ContactClassifier {
    normalizer: PhoneNormalizer,
}

impl ContactClassifier {
    /// Classifier with the default dialing policy
    pub fn new() -> Self {
        Self { normalizer: PhoneNormalizer::new() }
    }

    /// Classifier with an explicit dialing policy
    pub fn with_policy(policy: DialingConfig) -> Self {
        Self { normalizer: PhoneNormalizer::with_policy(policy) }
    }

    /// Classify every row of `table` under `mapping`.
    ///
    /// Rows whose phone cell normalizes land in `valid` with `selected`
    /// defaulted on; the rest land in `invalid` with an operator-facing
    /// reason. An unmapped phone column classifies every row as invalid
    /// (missing phone) rather than guessing. Names fall back to
    /// `Contact N` when the name column is unmapped or the cell is empty.
    pub fn classify(&self, table: &TableData, mapping: &ColumnMapping) -> ClassifiedContacts {
        let mut result = ClassifiedContacts::default();

        for row in 0..table.len() {
            let name = self.contact_name(table, mapping, row);
            let raw_phone = mapping.phone.map(|col| table.cell(row, col)).unwrap_or("");
            let data = table.row_object(row);

            match self.normalizer.normalize(raw_phone) {
                Ok(normalized) => result.valid.push(Contact {
                    id: row,
                    name,
                    phone: normalized.phone,
                    selected: true,
                    data,
                    was_fixed: normalized.was_fixed,
                }),
                Err(rejection) => result.invalid.push(InvalidContact {
                    id: row,
                    name,
                    phone: raw_phone.to_string(),
                    data,
                    reason: rejection.reason().to_string(),
                }),
            }
        }

        result
    }

    fn contact_name(&self, table: &TableData, mapping: &ColumnMapping, row: usize) -> String {
        mapping
            .name
            .map(|col| table.cell(row, col).trim())
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .unwrap_or_else(|| format!("{} {}", DEFAULT_CONTACT_NAME_PREFIX, row + 1))
    }
}
