//! Signed bearer tokens (HS256)
//!
//! Thin wrapper around `jsonwebtoken`. Expiry is checked here against an
//! explicit clock instead of inside the library, so callers (and tests)
//! control "now".

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Serialize, de::DeserializeOwned};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Claims carrying a validity window in Unix seconds
pub trait TimedClaims {
    fn issued_at(&self) -> i64;
    fn expires_at(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token has expired")]
    Expired,

    #[error("Token is malformed")]
    Malformed,

    #[error("Token could not be signed: {0}")]
    Signing(String),
}

/// HS256 signer / verifier bound to one secret
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    pub fn hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn sign<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify signature and structure, then require `iat <= now < exp`.
    pub fn verify_at<C>(&self, token: &str, now: i64) -> Result<C, TokenError>
    where
        C: DeserializeOwned + TimedClaims,
    {
        let data = decode::<C>(token, &self.decoding_key, &self.validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            }
        })?;

        let claims = data.claims;
        if now >= claims.expires_at() {
            return Err(TokenError::Expired);
        }
        if now < claims.issued_at() {
            return Err(TokenError::Malformed);
        }
        Ok(claims)
    }
}

/// Current Unix time in seconds
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestClaims {
        sub: String,
        iat: i64,
        exp: i64,
    }

    impl TimedClaims for TestClaims {
        fn issued_at(&self) -> i64 {
            self.iat
        }
        fn expires_at(&self) -> i64 {
            self.exp
        }
    }

    fn claims(iat: i64, exp: i64) -> TestClaims {
        TestClaims {
            sub: "someone".into(),
            iat,
            exp,
        }
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = TokenSigner::hs256(b"test-secret");
        let token = signer.sign(&claims(1_000, 2_000)).unwrap();

        let decoded: TestClaims = signer.verify_at(&token, 1_000).unwrap();
        assert_eq!(decoded, claims(1_000, 2_000));
        let decoded: TestClaims = signer.verify_at(&token, 1_999).unwrap();
        assert_eq!(decoded.sub, "someone");
    }

    #[test]
    fn test_expired_at_boundary() {
        let signer = TokenSigner::hs256(b"test-secret");
        let token = signer.sign(&claims(1_000, 2_000)).unwrap();

        assert_eq!(
            signer.verify_at::<TestClaims>(&token, 2_000),
            Err(TokenError::Expired)
        );
        assert_eq!(
            signer.verify_at::<TestClaims>(&token, 5_000),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_wrong_secret() {
        let token = TokenSigner::hs256(b"secret-a")
            .sign(&claims(1_000, 2_000))
            .unwrap();
        let result = TokenSigner::hs256(b"secret-b").verify_at::<TestClaims>(&token, 1_500);
        assert_eq!(result, Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_tampered_payload() {
        let signer = TokenSigner::hs256(b"test-secret");
        let token = signer.sign(&claims(1_000, 2_000)).unwrap();
        let other = signer.sign(&claims(1_000, 9_000)).unwrap();

        // header.payload_from_other.signature_from_first
        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        assert_eq!(
            signer.verify_at::<TestClaims>(&forged, 1_500),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_malformed() {
        let signer = TokenSigner::hs256(b"test-secret");
        assert_eq!(
            signer.verify_at::<TestClaims>("not-a-token", 0),
            Err(TokenError::Malformed)
        );
        assert_eq!(
            signer.verify_at::<TestClaims>("", 0),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_not_yet_issued() {
        let signer = TokenSigner::hs256(b"test-secret");
        let token = signer.sign(&claims(1_000, 2_000)).unwrap();
        assert_eq!(
            signer.verify_at::<TestClaims>(&token, 999),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_unix_now_is_recent() {
        // 2020-01-01
        assert!(unix_now() > 1_577_836_800);
    }
}
