//! Submit Donation Use Case
//!
//! Validate, upload the proof image, then persist. Validation touches
//! nothing outside the request; the donation row is only written once
//! the image host has returned a URL.

use std::sync::Arc;

use kernel::amount::{Amount, AmountError};
use kernel::id::UserId;

use crate::application::config::DonationConfig;
use crate::domain::entities::Donation;
use crate::domain::repository::{DonationRepository, ImageHost};
use crate::domain::value_objects::{DonorName, ImageType, ProofImage};
use crate::error::{DonationError, DonationResult};

/// A file part as received, before validation
#[derive(Debug, Clone, Default)]
pub struct ImageUpload {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
    /// Reading stopped because the part exceeded the size limit;
    /// `bytes` is then incomplete
    pub oversized: bool,
}

/// Submit donation input
#[derive(Debug, Clone, Default)]
pub struct SubmitDonationInput {
    pub name: Option<String>,
    pub amount: Option<String>,
    pub images: Vec<ImageUpload>,
    /// Submitting user, for logs
    pub submitted_by: Option<UserId>,
}

/// Submit donation use case
pub struct SubmitDonationUseCase<D, H>
where
    D: DonationRepository,
    H: ImageHost,
{
    donation_repo: Arc<D>,
    image_host: Arc<H>,
    config: Arc<DonationConfig>,
}

impl<D, H> SubmitDonationUseCase<D, H>
where
    D: DonationRepository,
    H: ImageHost,
{
    pub fn new(donation_repo: Arc<D>, image_host: Arc<H>, config: Arc<DonationConfig>) -> Self {
        Self {
            donation_repo,
            image_host,
            config,
        }
    }

    pub async fn execute(&self, input: SubmitDonationInput) -> DonationResult<Donation> {
        let name = input
            .name
            .as_deref()
            .and_then(DonorName::new)
            .ok_or(DonationError::InvalidName)?;

        let amount = match input.amount.as_deref() {
            Some(raw) => Amount::parse(raw)?,
            None => return Err(AmountError::Missing.into()),
        };

        let image = validate_image(input.images, self.config.max_image_bytes)?;
        let image_type = image.image_type();
        let image_len = image.len();

        let image_url = self
            .image_host
            .upload(image, &self.config.upload_folder)
            .await?;

        tracing::debug!(
            image_url = %image_url,
            mime = image_type.mime(),
            bytes = image_len,
            "Proof image uploaded"
        );

        let donation = Donation::new(name, amount, image_url);
        self.donation_repo
            .create(&donation)
            .await
            .map_err(|e| match e {
                DonationError::Database(e) => DonationError::Persist(e),
                other => other,
            })?;

        tracing::info!(
            donation_id = %donation.donation_id,
            user_id = ?input.submitted_by.map(|id| id.to_string()),
            amount = %donation.amount,
            "Donation submitted"
        );

        Ok(donation)
    }
}

/// Exactly one file, allowed type, within size, non-empty
pub fn validate_image(mut images: Vec<ImageUpload>, max_bytes: usize) -> DonationResult<ProofImage> {
    let upload = match images.len() {
        0 => return Err(DonationError::MissingImage),
        1 => images.remove(0),
        _ => return Err(DonationError::TooManyImages),
    };

    let image_type = upload
        .content_type
        .as_deref()
        .and_then(ImageType::from_mime)
        .ok_or_else(|| DonationError::UnsupportedImageType(upload.content_type.clone()))?;

    if upload.oversized || upload.bytes.len() > max_bytes {
        return Err(DonationError::ImageTooLarge);
    }

    if upload.bytes.is_empty() {
        return Err(DonationError::EmptyImage);
    }

    Ok(ProofImage::new(image_type, upload.bytes))
}
