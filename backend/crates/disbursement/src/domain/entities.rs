//! Transaction Entity

use chrono::{DateTime, Utc};
use kernel::amount::Amount;
use kernel::id::TransactionId;

use crate::domain::value_objects::TransactionText;

/// A recorded disbursement. Immutable once stored.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub amount: Amount,
    pub recipient: TransactionText,
    pub purpose: TransactionText,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(amount: Amount, recipient: TransactionText, purpose: TransactionText) -> Self {
        Self {
            transaction_id: TransactionId::new(),
            amount,
            recipient,
            purpose,
            created_at: Utc::now(),
        }
    }
}
