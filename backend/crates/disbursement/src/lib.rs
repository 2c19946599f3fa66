//! Disbursement Backend Module
//!
//! Records how collected funds were spent.
//!
//! - `domain/` - Transaction entity and repository trait
//! - `application/` - Create transaction use case
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers and router
//!
//! Anyone may list transactions; only administrators record them.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use error::{TransactionError, TransactionResult};
pub use infra::PgTransactionRepository;
pub use presentation::router::transaction_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
