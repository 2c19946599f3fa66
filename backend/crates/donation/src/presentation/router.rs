//! Donation Router

use auth::{AuthGate, require_admin, require_auth};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, patch, post},
};
use std::sync::Arc;

use crate::application::config::DonationConfig;
use crate::domain::repository::{DonationRepository, ImageHost};
use crate::infra::{CloudinaryClient, PgDonationRepository};
use crate::presentation::handlers::{self, DonationAdminState, DonationAppState};

/// Create the submission router (mounted under `/api/donation`)
pub fn donation_router(
    repo: PgDonationRepository,
    host: CloudinaryClient,
    config: DonationConfig,
    gate: AuthGate,
) -> Router {
    donation_router_generic(repo, host, config, gate)
}

/// Create a generic submission router for any repository / image host
pub fn donation_router_generic<D, H>(repo: D, host: H, config: DonationConfig, gate: AuthGate) -> Router
where
    D: DonationRepository + Send + Sync + 'static,
    H: ImageHost + Send + Sync + 'static,
{
    let body_limit = config.body_limit_bytes;
    let state = DonationAppState {
        repo: Arc::new(repo),
        host: Arc::new(host),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", post(handlers::submit::<D, H>))
        .route_layer(middleware::from_fn_with_state(gate, require_auth))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Admin-only donation routes (mounted under `/api/admin`)
pub fn admin_donation_router(repo: PgDonationRepository, gate: AuthGate) -> Router {
    admin_donation_router_generic(repo, gate)
}

pub fn admin_donation_router_generic<D>(repo: D, gate: AuthGate) -> Router
where
    D: DonationRepository + Send + Sync + 'static,
{
    let state = DonationAdminState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/donations", get(handlers::list::<D>))
        .route("/donations/{id}", patch(handlers::update_status::<D>))
        .route_layer(middleware::from_fn_with_state(gate, require_admin))
        .with_state(state)
}
