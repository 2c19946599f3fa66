//! Token Service
//!
//! Issues and verifies identity tokens: `{id, role, iat, exp}` signed
//! with HS256. Nothing is stored; a token is valid while its signature
//! matches and `iat <= now < exp`.

use kernel::id::UserId;
use platform::token::{TimedClaims, TokenError, TokenSigner, unix_now};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::auth_context::AuthContext;
use crate::domain::value_object::user_role::UserRole;
use crate::error::AuthResult;

/// Wire claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl TimedClaims for Claims {
    fn issued_at(&self) -> i64 {
        self.iat
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }
}

pub struct TokenService {
    signer: TokenSigner,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            signer: TokenSigner::hs256(&config.token_secret),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a token valid from now for the configured lifetime
    pub fn issue(&self, user_id: &UserId, role: UserRole) -> AuthResult<String> {
        self.issue_at(user_id, role, unix_now())
    }

    pub fn issue_at(&self, user_id: &UserId, role: UserRole, now: i64) -> AuthResult<String> {
        let claims = Claims {
            id: user_id.to_string(),
            role: role.code().to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        Ok(self.signer.sign(&claims)?)
    }

    pub fn verify(&self, token: &str) -> Result<AuthContext, TokenError> {
        self.verify_at(token, unix_now())
    }

    /// Verify against an explicit clock
    pub fn verify_at(&self, token: &str, now: i64) -> Result<AuthContext, TokenError> {
        let claims: Claims = self.signer.verify_at(token, now)?;

        let user_id = UserId::parse_str(&claims.id).ok_or(TokenError::Malformed)?;
        let role = UserRole::from_code(&claims.role).ok_or(TokenError::Malformed)?;

        Ok(AuthContext { user_id, role })
    }
}
