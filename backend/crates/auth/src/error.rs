//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::client::BearerError;
use platform::password::{PasswordHashError, PasswordPolicyError};
use platform::token::TokenError;
use thiserror::Error;

use crate::domain::value_object::email::EmailError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Required request fields are absent or blank
    #[error("{0}")]
    MissingFields(&'static str),

    /// Email failed format validation
    #[error("Invalid email format")]
    InvalidEmail(#[from] EmailError),

    /// Password rejected by the registration policy
    #[error("{0}")]
    PasswordPolicy(#[from] PasswordPolicyError),

    /// Email already registered
    #[error("User already exists")]
    DuplicateEmail,

    /// No account with this email
    #[error("User not found")]
    UserNotFound,

    /// Password does not match
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No usable bearer credential on the request
    #[error("No token, authorization denied")]
    MissingCredential(#[from] BearerError),

    /// Token failed verification
    #[error("Token is not valid")]
    InvalidToken(TokenError),

    /// Authenticated but the role is insufficient
    #[error("Access denied")]
    Forbidden,

    /// Request body could not be read
    #[error("Invalid request body")]
    InvalidBody(String),

    /// Password hashing failure
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    ///
    /// Duplicate emails and wrong passwords answer 400, which is what
    /// existing clients expect.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields(_)
            | AuthError::InvalidEmail(_)
            | AuthError::PasswordPolicy(_)
            | AuthError::DuplicateEmail
            | AuthError::InvalidCredentials
            | AuthError::InvalidBody(_) => ErrorKind::BadRequest,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::MissingCredential(_) | AuthError::InvalidToken(_) => ErrorKind::Unauthorized,
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::PasswordHash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::PasswordHash(e) => {
                AppError::new(self.kind(), "Server Error").with_detail(e.to_string())
            }
            AuthError::Database(e) => {
                AppError::new(self.kind(), "Server Error").with_detail(e.to_string())
            }
            AuthError::Internal(msg) => {
                AppError::new(self.kind(), "Server Error").with_detail(msg.clone())
            }
            AuthError::InvalidToken(TokenError::Expired) => {
                AppError::new(self.kind(), self.to_string()).with_detail("Token has expired")
            }
            AuthError::InvalidBody(reason) => {
                AppError::new(self.kind(), self.to_string()).with_detail(reason.clone())
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken(reason) => {
                tracing::warn!(reason = %reason, "Rejected bearer token");
            }
            AuthError::Forbidden => {
                tracing::warn!("Non-admin request to admin route");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(msg) => AuthError::Internal(msg),
            other => AuthError::InvalidToken(other),
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
