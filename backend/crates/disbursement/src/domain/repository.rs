//! Repository Traits

use crate::domain::entities::Transaction;
use crate::error::TransactionResult;

/// Transaction repository trait
#[trait_variant::make(TransactionRepository: Send)]
pub trait LocalTransactionRepository {
    /// Persist a new transaction
    async fn create(&self, transaction: &Transaction) -> TransactionResult<()>;

    /// All transactions, newest first
    async fn list(&self) -> TransactionResult<Vec<Transaction>>;
}
