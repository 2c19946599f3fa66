//! Error conversions
//!
//! Database error classification and the HTTP response mapping for
//! [`AppError`].

#[cfg(any(feature = "sqlx", feature = "axum"))]
use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx classification (feature-gated)
// ============================================================================

/// Classify a database failure.
///
/// Unique violations classify as `Conflict`; callers that own a
/// unique index (e.g. user emails) detect them first and report a
/// domain-level conflict.
#[cfg(feature = "sqlx")]
pub fn sqlx_error_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // Class 23: Integrity Constraint Violation
            Some("23505") => ErrorKind::Conflict,
            Some("23502") | Some("23514") => ErrorKind::BadRequest,
            // Class 53: Insufficient Resources, Class 57: Operator Intervention
            Some(code) if code.starts_with("53") || code.starts_with("57") => {
                ErrorKind::ServiceUnavailable
            }
            _ => ErrorKind::InternalServerError,
        },
        _ => ErrorKind::InternalServerError,
    }
}

/// Fallback for store errors that no domain error claims. The message
/// stays generic; the driver error is echoed as the detail.
#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let message = match sqlx_error_kind(&err) {
            ErrorKind::NotFound => "Not found",
            ErrorKind::ServiceUnavailable => "Database unavailable",
            _ => "Server Error",
        };
        AppError::new(sqlx_error_kind(&err), message)
            .with_detail(err.to_string())
            .with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut body = serde_json::json!({
            "status": self.status_code(),
            "title": self.kind().as_str(),
            "message": self.message(),
        });
        if let Some(detail) = self.detail() {
            body["error"] = serde_json::Value::String(detail.to_owned());
        }

        (status, Json(body)).into_response()
    }
}
