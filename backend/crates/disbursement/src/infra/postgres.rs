//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::amount::Amount;
use kernel::id::TransactionId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Transaction;
use crate::domain::repository::TransactionRepository;
use crate::domain::value_objects::TransactionText;
use crate::error::TransactionResult;

/// PostgreSQL-backed transaction repository
#[derive(Clone)]
pub struct PgTransactionRepository {
    pool: PgPool,
}

impl PgTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TransactionRepository for PgTransactionRepository {
    async fn create(&self, transaction: &Transaction) -> TransactionResult<()> {
        sqlx::query(
            r#"
            INSERT INTO transactions (
                transaction_id,
                amount,
                recipient,
                purpose,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(transaction.transaction_id.as_uuid())
        .bind(transaction.amount.value())
        .bind(transaction.recipient.as_str())
        .bind(transaction.purpose.as_str())
        .bind(transaction.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> TransactionResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT transaction_id, amount, recipient, purpose, created_at
            FROM transactions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TransactionRow::into_transaction).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct TransactionRow {
    transaction_id: Uuid,
    amount: f64,
    recipient: String,
    purpose: String,
    created_at: DateTime<Utc>,
}

impl TransactionRow {
    fn into_transaction(self) -> Transaction {
        Transaction {
            transaction_id: TransactionId::from_uuid(self.transaction_id),
            amount: Amount::from_db(self.amount),
            recipient: TransactionText::from_db(self.recipient),
            purpose: TransactionText::from_db(self.purpose),
            created_at: self.created_at,
        }
    }
}
