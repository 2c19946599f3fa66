//! Infrastructure Layer
//!
//! Database implementation and the Cloudinary image host adapter.

pub mod cloudinary;
pub mod postgres;

pub use cloudinary::{CloudinaryClient, CloudinaryConfig};
pub use postgres::PgDonationRepository;
