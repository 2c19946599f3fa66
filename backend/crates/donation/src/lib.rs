//! Donation Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Donation entity, value objects, repository and image host traits
//! - `application/` - Submission and status update use cases
//! - `infra/` - PostgreSQL repository, Cloudinary adapter
//! - `presentation/` - HTTP handlers, multipart reading, routers
//!
//! ## Submission pipeline
//! - Caller must hold a valid bearer token (any role)
//! - name, amount and the single proof image are validated before any I/O
//! - The image is uploaded first; the donation row is written only after
//!   the image host returns a URL
//! - Status changes are admin-only single-statement updates

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::DonationConfig;
pub use error::{DonationError, DonationResult};
pub use infra::{CloudinaryClient, CloudinaryConfig, PgDonationRepository};
pub use presentation::router::{admin_donation_router, donation_router};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
