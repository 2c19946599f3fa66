//! Application Layer
//!
//! Use cases and application configuration.

pub mod config;
pub mod submit_donation;
pub mod update_status;

// Re-exports
pub use config::DonationConfig;
pub use submit_donation::{ImageUpload, SubmitDonationInput, SubmitDonationUseCase};
pub use update_status::{UpdateStatusInput, UpdateStatusUseCase};
