//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::amount::Amount;
use kernel::id::DonationId;

use super::value_objects::{DonationStatus, DonorName};

/// A donation with its proof-of-transfer image
///
/// Only constructed once the image host has returned a URL, so a
/// donation never exists without one.
#[derive(Debug, Clone)]
pub struct Donation {
    pub donation_id: DonationId,
    pub name: DonorName,
    pub amount: Amount,
    pub status: DonationStatus,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl Donation {
    pub fn new(name: DonorName, amount: Amount, image_url: String) -> Self {
        Self {
            donation_id: DonationId::new(),
            name,
            amount,
            status: DonationStatus::default(),
            image_url,
            created_at: Utc::now(),
        }
    }
}
