//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Donation;
use crate::domain::value_objects::DonationStatus;

/// Donation as returned to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationResponse {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub status: DonationStatus,
    /// Durable URL of the proof image
    pub image_string: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Donation> for DonationResponse {
    fn from(donation: &Donation) -> Self {
        Self {
            id: donation.donation_id.to_string(),
            name: donation.name.to_string(),
            amount: donation.amount.value(),
            status: donation.status,
            image_string: donation.image_url.clone(),
            created_at: donation.created_at,
        }
    }
}

/// `201 { "donation": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct CreatedDonationResponse {
    pub donation: DonationResponse,
}

/// PATCH body. Kept loose so that a non-string status is reported as an
/// invalid status, not a body error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: Option<serde_json::Value>,
}
