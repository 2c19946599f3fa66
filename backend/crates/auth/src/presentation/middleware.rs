//! Auth Middleware
//!
//! Bearer-token authentication and admin gating for protected routes.
//! Other crates mount these with `axum::middleware::from_fn_with_state`.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::client::{BearerError, extract_bearer_token};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::auth_context::AuthContext;
use crate::error::{AuthError, AuthResult};

/// Middleware state
#[derive(Clone)]
pub struct AuthGate {
    tokens: Arc<TokenService>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(Arc::new(TokenService::new(config)))
    }

    pub fn tokens(&self) -> &Arc<TokenService> {
        &self.tokens
    }

    /// Read and verify the bearer token
    pub fn authenticate(&self, headers: &HeaderMap) -> AuthResult<AuthContext> {
        let token = extract_bearer_token(headers)?;
        Ok(self.tokens.verify(token)?)
    }
}

/// Middleware that requires a valid bearer token (any role)
pub async fn require_auth(
    State(gate): State<AuthGate>,
    mut req: Request,
    next: Next,
) -> AuthResult<Response> {
    let ctx = gate.authenticate(req.headers())?;
    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

/// Middleware that requires a valid bearer token with the admin role
pub async fn require_admin(
    State(gate): State<AuthGate>,
    mut req: Request,
    next: Next,
) -> AuthResult<Response> {
    let ctx = gate.authenticate(req.headers())?;
    if !ctx.is_admin() {
        return Err(AuthError::Forbidden);
    }
    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

/// Handlers behind `require_auth`/`require_admin` can take the caller
/// as an argument.
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .copied()
            .ok_or(AuthError::MissingCredential(BearerError::MissingHeader))
    }
}
