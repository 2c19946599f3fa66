//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::amount::Amount;
use kernel::id::DonationId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Donation;
use crate::domain::repository::DonationRepository;
use crate::domain::value_objects::{DonationStatus, DonorName};
use crate::error::{DonationError, DonationResult};

/// PostgreSQL-backed donation repository
#[derive(Clone)]
pub struct PgDonationRepository {
    pool: PgPool,
}

impl PgDonationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DonationRepository for PgDonationRepository {
    async fn create(&self, donation: &Donation) -> DonationResult<()> {
        sqlx::query(
            r#"
            INSERT INTO donations (
                donation_id,
                name,
                amount,
                status,
                image_url,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(donation.donation_id.as_uuid())
        .bind(donation.name.as_str())
        .bind(donation.amount.value())
        .bind(donation.status.id())
        .bind(&donation.image_url)
        .bind(donation.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> DonationResult<Vec<Donation>> {
        let rows = sqlx::query_as::<_, DonationRow>(
            r#"
            SELECT donation_id, name, amount, status, image_url, created_at
            FROM donations
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DonationRow::into_donation).collect()
    }

    async fn update_status(
        &self,
        donation_id: &DonationId,
        status: DonationStatus,
    ) -> DonationResult<Option<Donation>> {
        let row = sqlx::query_as::<_, DonationRow>(
            r#"
            UPDATE donations
            SET status = $2
            WHERE donation_id = $1
            RETURNING donation_id, name, amount, status, image_url, created_at
            "#,
        )
        .bind(donation_id.as_uuid())
        .bind(status.id())
        .fetch_optional(&self.pool)
        .await?;

        row.map(DonationRow::into_donation).transpose()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct DonationRow {
    donation_id: Uuid,
    name: String,
    amount: f64,
    status: i16,
    image_url: String,
    created_at: DateTime<Utc>,
}

impl DonationRow {
    fn into_donation(self) -> DonationResult<Donation> {
        let status = DonationStatus::from_id(self.status)
            .ok_or_else(|| DonationError::Internal(format!("Invalid status: {}", self.status)))?;

        Ok(Donation {
            donation_id: DonationId::from_uuid(self.donation_id),
            name: DonorName::from_db(self.name),
            amount: Amount::from_db(self.amount),
            status,
            image_url: self.image_url,
            created_at: self.created_at,
        })
    }
}
