//! Donation Error Types
//!
//! This module provides donation-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::amount::AmountError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::repository::UploadError;

/// Donation-specific result type alias
pub type DonationResult<T> = Result<T, DonationError>;

/// Donation-specific error variants
#[derive(Debug, Error)]
pub enum DonationError {
    #[error("Please provide a valid name")]
    InvalidName,

    #[error("Amount must be a positive number")]
    InvalidAmount(#[from] AmountError),

    #[error("Image is required")]
    MissingImage,

    #[error("Only one image may be uploaded")]
    TooManyImages,

    #[error("Only JPEG, PNG, or JPG images are allowed")]
    UnsupportedImageType(Option<String>),

    #[error("Uploaded file is empty or invalid")]
    EmptyImage,

    #[error("File too large")]
    ImageTooLarge,

    #[error("Invalid status")]
    InvalidStatus,

    /// Body could not be read as JSON / multipart
    #[error("Invalid request body")]
    InvalidBody(String),

    #[error("Donation not found")]
    NotFound,

    /// Image host rejected or failed the upload
    #[error("Failed to upload image to Cloudinary")]
    Upload(#[from] UploadError),

    /// Saving a new donation failed
    #[error("Failed to save donation to database")]
    Persist(sqlx::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DonationError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DonationError::InvalidName
            | DonationError::InvalidAmount(_)
            | DonationError::MissingImage
            | DonationError::TooManyImages
            | DonationError::UnsupportedImageType(_)
            | DonationError::EmptyImage
            | DonationError::ImageTooLarge
            | DonationError::InvalidStatus
            | DonationError::InvalidBody(_) => ErrorKind::BadRequest,
            DonationError::NotFound => ErrorKind::NotFound,
            DonationError::Upload(_)
            | DonationError::Persist(_)
            | DonationError::Database(_)
            | DonationError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DonationError::Upload(e) => {
                tracing::error!(error = %e, "Proof image upload failed");
            }
            DonationError::Persist(e) => {
                tracing::error!(error = %e, "Failed to save donation");
            }
            DonationError::Database(e) => {
                tracing::error!(error = %e, "Donation database error");
            }
            DonationError::Internal(msg) => {
                tracing::error!(message = %msg, "Donation internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Donation error");
            }
        }
    }
}

impl From<DonationError> for AppError {
    fn from(err: DonationError) -> Self {
        let kind = err.kind();
        match err {
            DonationError::Upload(e) => AppError::new(kind, "Failed to upload image to Cloudinary")
                .with_detail(e.0.clone())
                .with_source(e),
            DonationError::Persist(e) => AppError::new(kind, "Failed to save donation to database")
                .with_detail(e.to_string())
                .with_source(e),
            DonationError::Database(e) => AppError::new(kind, "Server Error")
                .with_detail(e.to_string())
                .with_source(e),
            DonationError::Internal(msg) => AppError::new(kind, "Server Error").with_detail(msg),
            DonationError::UnsupportedImageType(Some(mime)) => {
                AppError::new(kind, "Only JPEG, PNG, or JPG images are allowed")
                    .with_detail(format!("received {mime}"))
            }
            DonationError::InvalidStatus => AppError::new(kind, "Invalid status")
                .with_detail("status must be Pending or Disturbed"),
            DonationError::InvalidBody(reason) => {
                AppError::new(kind, "Invalid request body").with_detail(reason)
            }
            other => AppError::new(kind, other.to_string()),
        }
    }
}

impl IntoResponse for DonationError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
