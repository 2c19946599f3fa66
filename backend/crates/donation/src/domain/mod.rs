//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Donation)
//! - Domain value objects (DonorName, DonationStatus, ProofImage)
//! - Repository and image host traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
