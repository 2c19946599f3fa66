//! Repository and Port Traits
//!
//! Interfaces for persistence and for the external image host.
//! Implementations are in the infrastructure layer.

use kernel::id::DonationId;

use crate::domain::entities::Donation;
use crate::domain::value_objects::{DonationStatus, ProofImage};
use crate::error::DonationResult;

/// Donation repository trait
#[trait_variant::make(DonationRepository: Send)]
pub trait LocalDonationRepository {
    /// Persist a new donation
    async fn create(&self, donation: &Donation) -> DonationResult<()>;

    /// All donations, newest first
    async fn list(&self) -> DonationResult<Vec<Donation>>;

    /// Set the status in one atomic statement.
    ///
    /// Returns `None` when no donation has this id.
    async fn update_status(
        &self,
        donation_id: &DonationId,
        status: DonationStatus,
    ) -> DonationResult<Option<Donation>>;
}

/// Image host failure, carrying the upstream message
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct UploadError(pub String);

/// External image host
#[trait_variant::make(ImageHost: Send)]
pub trait LocalImageHost {
    /// Store the image under `folder` and return its durable URL
    async fn upload(&self, image: ProofImage, folder: &str) -> Result<String, UploadError>;
}
