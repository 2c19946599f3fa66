//! Domain Value Objects
//!
//! Immutable value types for the donation domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Destination folder on the image host for proof-of-transfer images
pub const PROOF_FOLDER: &str = "donation-proofs";

/// Largest accepted proof image (5 MiB)
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

// ============================================================================
// Donor name
// ============================================================================

/// Trimmed, non-empty donor name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorName(String);

impl DonorName {
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn from_db(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DonorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Review status. `Disturbed` is the established wire value for
/// "funds disbursed"; clients depend on the spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum DonationStatus {
    #[default]
    Pending = 0,
    Disturbed = 1,
}

impl DonationStatus {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            DonationStatus::Pending => "Pending",
            DonationStatus::Disturbed => "Disturbed",
        }
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(DonationStatus::Pending),
            1 => Some(DonationStatus::Disturbed),
            _ => None,
        }
    }

    /// Exact, case-sensitive match
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Pending" => Some(DonationStatus::Pending),
            "Disturbed" => Some(DonationStatus::Disturbed),
            _ => None,
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Proof image
// ============================================================================

/// Accepted proof image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Jpeg,
    Png,
}

impl ImageType {
    /// `image/jpeg`, `image/jpg` and `image/png` (case-insensitive,
    /// parameters ignored)
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageType::Jpeg),
            "image/png" => Some(ImageType::Png),
            _ => None,
        }
    }

    pub const fn mime(&self) -> &'static str {
        match self {
            ImageType::Jpeg => "image/jpeg",
            ImageType::Png => "image/png",
        }
    }

    pub const fn extension(&self) -> &'static str {
        match self {
            ImageType::Jpeg => "jpg",
            ImageType::Png => "png",
        }
    }
}

/// A validated image, ready for upload
#[derive(Clone, PartialEq, Eq)]
pub struct ProofImage {
    image_type: ImageType,
    bytes: Vec<u8>,
}

impl ProofImage {
    /// Caller has already checked type, emptiness and size
    pub(crate) fn new(image_type: ImageType, bytes: Vec<u8>) -> Self {
        Self { image_type, bytes }
    }

    pub fn image_type(&self) -> ImageType {
        self.image_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl fmt::Debug for ProofImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProofImage")
            .field("image_type", &self.image_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
