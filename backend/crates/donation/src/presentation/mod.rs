//! Presentation Layer
//!
//! HTTP handlers, DTOs, multipart reading and routers.

pub mod dto;
pub mod handlers;
pub mod multipart;
pub mod router;

pub use handlers::{DonationAdminState, DonationAppState};
pub use router::{
    admin_donation_router, admin_donation_router_generic, donation_router,
    donation_router_generic,
};
