//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and the token service
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration and login with email + password
//! - Stateless identity tokens (HS256, 1 hour) carrying user id and role
//! - `require_auth` / `require_admin` middleware for other crates' routes
//! - Admin user listing
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, off the async executor
//! - Roles are trusted from the token until it expires
//! - Password hashes and tokens are never logged or returned

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use domain::entity::auth_context::AuthContext;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthGate, require_admin, require_auth};
pub use presentation::router::{admin_users_router, auth_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
