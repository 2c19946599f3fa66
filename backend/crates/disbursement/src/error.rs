//! Disbursement Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::amount::AmountError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type TransactionResult<T> = Result<T, TransactionError>;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Please provide all the fields")]
    MissingFields,

    #[error("Amount must be a positive number")]
    InvalidAmount(AmountError),

    #[error("Invalid request body")]
    InvalidBody(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TransactionError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TransactionError::MissingFields
            | TransactionError::InvalidAmount(_)
            | TransactionError::InvalidBody(_) => ErrorKind::BadRequest,
            TransactionError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            TransactionError::Database(e) => {
                tracing::error!(error = %e, "Transaction database error");
            }
            _ => {
                tracing::debug!(error = %self, "Transaction error");
            }
        }
    }
}

/// A missing amount is reported with the other missing fields
impl From<AmountError> for TransactionError {
    fn from(err: AmountError) -> Self {
        match err {
            AmountError::Missing => TransactionError::MissingFields,
            other => TransactionError::InvalidAmount(other),
        }
    }
}

impl From<TransactionError> for AppError {
    fn from(err: TransactionError) -> Self {
        let kind = err.kind();
        match err {
            TransactionError::InvalidAmount(e) => {
                AppError::new(kind, "Amount must be a positive number").with_detail(e.to_string())
            }
            TransactionError::InvalidBody(reason) => {
                AppError::new(kind, "Invalid request body").with_detail(reason)
            }
            TransactionError::Database(e) => AppError::new(kind, "Server Error")
                .with_detail(e.to_string())
                .with_source(e),
            other => AppError::new(kind, other.to_string()),
        }
    }
}

impl IntoResponse for TransactionError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
