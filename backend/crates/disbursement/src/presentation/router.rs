//! Transaction Router

use auth::{AuthGate, require_admin};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::TransactionRepository;
use crate::infra::postgres::PgTransactionRepository;
use crate::presentation::handlers::{self, TransactionAppState};

/// Create the transaction router (mounted under `/api/transaction`)
pub fn transaction_router(repo: PgTransactionRepository, gate: AuthGate) -> Router {
    transaction_router_generic(repo, gate)
}

/// Listing is public; recording requires an admin token.
pub fn transaction_router_generic<R>(repo: R, gate: AuthGate) -> Router
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let state = TransactionAppState {
        repo: Arc::new(repo),
    };

    // route_layer only wraps the POST method router
    let create = post(handlers::create::<R>)
        .route_layer(middleware::from_fn_with_state(gate, require_admin));

    Router::new()
        .route("/", get(handlers::list::<R>).merge(create))
        .with_state(state)
}
