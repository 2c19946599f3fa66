//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, TokenService};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};

/// Shared state for register/login handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

/// Shared state for admin user handlers
#[derive(Clone)]
pub struct UserAdminState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<TokenResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body.map_err(|e| AuthError::InvalidBody(e.body_text()))?;

    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let input = RegisterInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token: output.token,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body.map_err(|e| AuthError::InvalidBody(e.body_text()))?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(TokenResponse {
        token: output.token,
    }))
}

// ============================================================================
// Admin
// ============================================================================

/// GET /api/admin/users
pub async fn list_users<R>(
    State(state): State<UserAdminState<R>>,
) -> AuthResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let users = state.repo.list().await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}
