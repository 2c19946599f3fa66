//! Application Configuration
//!
//! Configuration for the donation application layer.

use crate::domain::value_objects::{MAX_IMAGE_BYTES, PROOF_FOLDER};

/// Donation application configuration
#[derive(Debug, Clone)]
pub struct DonationConfig {
    /// Largest accepted proof image in bytes
    pub max_image_bytes: usize,
    /// HTTP body limit for the submission route. Kept above
    /// `max_image_bytes` so an oversized image is reported as such
    /// instead of as a transport error.
    pub body_limit_bytes: usize,
    /// Folder on the image host
    pub upload_folder: String,
}

impl Default for DonationConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: MAX_IMAGE_BYTES,
            body_limit_bytes: 6 * 1024 * 1024, // 6 MiB
            upload_folder: PROOF_FOLDER.to_string(),
        }
    }
}

impl DonationConfig {
    /// Create config for development
    pub fn development() -> Self {
        Self::default()
    }
}
