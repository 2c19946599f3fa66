//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::{AuthAppState, UserAdminState};
pub use middleware::{AuthGate, require_admin, require_auth};
pub use router::{admin_users_router, admin_users_router_generic, auth_router, auth_router_generic};
