//! Update Donation Status Use Case (admin)

use std::sync::Arc;

use kernel::id::DonationId;

use crate::domain::entities::Donation;
use crate::domain::repository::DonationRepository;
use crate::domain::value_objects::DonationStatus;
use crate::error::{DonationError, DonationResult};

pub struct UpdateStatusInput {
    /// Raw path segment
    pub donation_id: String,
    pub status: Option<String>,
}

pub struct UpdateStatusUseCase<D>
where
    D: DonationRepository,
{
    donation_repo: Arc<D>,
}

impl<D> UpdateStatusUseCase<D>
where
    D: DonationRepository,
{
    pub fn new(donation_repo: Arc<D>) -> Self {
        Self { donation_repo }
    }

    /// Status is checked before the id, so a bad status on an unknown
    /// donation is a 400, not a 404.
    pub async fn execute(&self, input: UpdateStatusInput) -> DonationResult<Donation> {
        let status = input
            .status
            .as_deref()
            .and_then(DonationStatus::from_code)
            .ok_or(DonationError::InvalidStatus)?;

        // Not a UUID: cannot name an existing donation
        let donation_id =
            DonationId::parse_str(&input.donation_id).ok_or(DonationError::NotFound)?;

        let donation = self
            .donation_repo
            .update_status(&donation_id, status)
            .await?
            .ok_or(DonationError::NotFound)?;

        tracing::info!(
            donation_id = %donation.donation_id,
            status = %donation.status,
            "Donation status updated"
        );

        Ok(donation)
    }
}
