//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Transaction;

/// POST body. Fields stay loose so that presence is checked by the use
/// case and the amount may arrive as a number or a string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(default)]
    pub amount: Option<serde_json::Value>,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: String,
    pub amount: f64,
    pub recipient: String,
    pub purpose: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Transaction> for TransactionResponse {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id: transaction.transaction_id.to_string(),
            amount: transaction.amount.value(),
            recipient: transaction.recipient.to_string(),
            purpose: transaction.purpose.to_string(),
            created_at: transaction.created_at,
        }
    }
}

/// `201 { "transaction": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct CreatedTransactionResponse {
    pub transaction: TransactionResponse,
}

/// `200 { "transactions": [...] }`
#[derive(Debug, Clone, Serialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionResponse>,
}
