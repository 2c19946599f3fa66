//! Monetary Amount
//!
//! Donations and disbursements share one rule: the amount is a finite
//! number strictly greater than zero. Clients send it either as a JSON
//! number or as a numeric string (multipart forms only carry strings).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why a raw amount was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Amount is required")]
    Missing,

    #[error("Amount must be a number")]
    NotANumber,

    #[error("Amount must be a positive number")]
    NotPositive,
}

/// Validated positive amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotANumber);
        }
        if value <= 0.0 {
            return Err(AmountError::NotPositive);
        }
        Ok(Self(value))
    }

    /// Parse a form/text value. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, AmountError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AmountError::Missing);
        }
        let value: f64 = trimmed.parse().map_err(|_| AmountError::NotANumber)?;
        Self::new(value)
    }

    /// Accept a JSON number or a numeric string.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, AmountError> {
        match value {
            serde_json::Value::Null => Err(AmountError::Missing),
            serde_json::Value::Number(n) => n
                .as_f64()
                .ok_or(AmountError::NotANumber)
                .and_then(Self::new),
            serde_json::Value::String(s) => Self::parse(s),
            _ => Err(AmountError::NotANumber),
        }
    }

    /// Rebuild from a stored value (already validated on the way in)
    pub fn from_db(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
