//! Create Transaction Use Case (admin)

use std::sync::Arc;

use kernel::amount::Amount;
use kernel::id::UserId;

use crate::domain::entities::Transaction;
use crate::domain::repository::TransactionRepository;
use crate::domain::value_objects::TransactionText;
use crate::error::{TransactionError, TransactionResult};

#[derive(Debug, Clone, Default)]
pub struct CreateTransactionInput {
    /// JSON number or numeric string
    pub amount: Option<serde_json::Value>,
    pub recipient: Option<String>,
    pub purpose: Option<String>,
    pub recorded_by: Option<UserId>,
}

pub struct CreateTransactionUseCase<R>
where
    R: TransactionRepository,
{
    transaction_repo: Arc<R>,
}

impl<R> CreateTransactionUseCase<R>
where
    R: TransactionRepository,
{
    pub fn new(transaction_repo: Arc<R>) -> Self {
        Self { transaction_repo }
    }

    pub async fn execute(&self, input: CreateTransactionInput) -> TransactionResult<Transaction> {
        // All three fields are checked for presence before the amount is parsed
        let recipient = input.recipient.as_deref().and_then(TransactionText::new);
        let purpose = input.purpose.as_deref().and_then(TransactionText::new);
        let raw_amount = input.amount.unwrap_or(serde_json::Value::Null);

        let (Some(recipient), Some(purpose)) = (recipient, purpose) else {
            return Err(TransactionError::MissingFields);
        };
        let amount = Amount::from_json(&raw_amount)?;

        let transaction = Transaction::new(amount, recipient, purpose);
        self.transaction_repo.create(&transaction).await?;

        tracing::info!(
            transaction_id = %transaction.transaction_id,
            amount = %transaction.amount,
            recorded_by = ?input.recorded_by.map(|id| id.to_string()),
            "Transaction recorded"
        );

        Ok(transaction)
    }
}
