//! Transaction Value Objects

use std::fmt;

/// Free-text transaction field (recipient or purpose).
///
/// Trimmed; never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionText(String);

impl TransactionText {
    /// `None` when the input is blank
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
