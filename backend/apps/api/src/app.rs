//! Router assembly

use auth::{AuthConfig, AuthGate, PgUserRepository, admin_users_router, auth_router};
use axum::{Router, routing::get};
use disbursement::{PgTransactionRepository, transaction_router};
use donation::{
    CloudinaryClient, DonationConfig, PgDonationRepository, admin_donation_router,
    donation_router,
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::config::CorsConfig;

pub const HEALTH_TEXT: &str = "Family Welfare Website Running.";

pub struct AppParts {
    pub pool: PgPool,
    pub auth: AuthConfig,
    pub donation: DonationConfig,
    pub image_host: CloudinaryClient,
    pub cors: CorsConfig,
}

/// Build the full HTTP surface.
///
/// One `AuthGate` signs tokens at login and verifies them on every
/// protected route.
pub fn build_app(parts: AppParts) -> Router {
    let gate = AuthGate::from_config(&parts.auth);

    let users = PgUserRepository::new(parts.pool.clone());
    let donations = PgDonationRepository::new(parts.pool.clone());
    let transactions = PgTransactionRepository::new(parts.pool);

    let admin = admin_donation_router(donations.clone(), gate.clone())
        .merge(admin_users_router(users.clone(), gate.clone()));

    Router::new()
        .route("/", get(health))
        .nest("/api/auth", auth_router(users, parts.auth, gate.clone()))
        .nest(
            "/api/donation",
            donation_router(donations, parts.image_host, parts.donation, gate.clone()),
        )
        .nest("/api/admin", admin)
        .nest("/api/transaction", transaction_router(transactions, gate))
        .layer(TraceLayer::new_for_http())
        .layer(parts.cors.layer())
}

async fn health() -> &'static str {
    HEALTH_TEXT
}
