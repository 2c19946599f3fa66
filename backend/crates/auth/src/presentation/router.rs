//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState, UserAdminState};
use crate::presentation::middleware::{AuthGate, require_admin};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig, gate: AuthGate) -> Router {
    auth_router_generic(repo, config, gate)
}

/// Create a generic Auth router for any repository implementation
///
/// Tokens are issued with the gate's signer so that the same service
/// verifies them later.
pub fn auth_router_generic<R>(repo: R, config: AuthConfig, gate: AuthGate) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        tokens: gate.tokens().clone(),
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}

/// Admin-only user routes (mounted under `/api/admin`)
pub fn admin_users_router(repo: PgUserRepository, gate: AuthGate) -> Router {
    admin_users_router_generic(repo, gate)
}

pub fn admin_users_router_generic<R>(repo: R, gate: AuthGate) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = UserAdminState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/users", get(handlers::list_users::<R>))
        .route_layer(middleware::from_fn_with_state(gate, require_admin))
        .with_state(state)
}
