//! Client credential extraction
//!
//! Helpers for reading caller-supplied credentials from HTTP headers.

use axum::http::{HeaderMap, header};

/// Why no bearer token could be read
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Authorization header is not valid ASCII")]
    InvalidHeader,

    #[error("Authorization scheme must be Bearer")]
    WrongScheme,

    #[error("Bearer token is empty")]
    EmptyToken,
}

/// Extract the token from `Authorization: Bearer <token>`
///
/// The scheme is matched case-insensitively; the token is returned trimmed.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::MissingHeader)?
        .to_str()
        .map_err(|_| BearerError::InvalidHeader)?
        .trim();

    let (scheme, token) = value.split_once(' ').unwrap_or((value, ""));
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::WrongScheme);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(BearerError::EmptyToken);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_scheme_case_insensitive() {
        let headers = headers_with("bearer   abc.def.ghi ");
        assert_eq!(extract_bearer_token(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            extract_bearer_token(&HeaderMap::new()),
            Err(BearerError::MissingHeader)
        );
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer_token(&headers), Err(BearerError::WrongScheme));

        let headers = headers_with("abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), Err(BearerError::WrongScheme));
    }

    #[test]
    fn test_empty_token() {
        let headers = headers_with("Bearer ");
        assert_eq!(extract_bearer_token(&headers), Err(BearerError::EmptyToken));

        let headers = headers_with("Bearer");
        assert_eq!(extract_bearer_token(&headers), Err(BearerError::EmptyToken));
    }
}
