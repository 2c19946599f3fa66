//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::{transaction_router, transaction_router_generic};
