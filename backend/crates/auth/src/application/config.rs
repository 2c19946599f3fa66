//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

pub use platform::password::PasswordHashConfig;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret for signing identity tokens
    pub token_secret: Vec<u8>,
    /// Identity token lifetime (1 hour)
    pub token_ttl: Duration,
    /// Argon2id cost for new password hashes
    pub password_hash: PasswordHashConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: Vec::new(),
            token_ttl: Duration::from_secs(3600), // 1 hour
            password_hash: PasswordHashConfig::default(),
        }
    }
}

impl AuthConfig {
    /// Create config with the given token secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random token secret (for development)
    ///
    /// Tokens stop verifying across restarts.
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::with_secret(secret.to_vec())
    }

    /// Create config for development (random secret, cheap hashing)
    pub fn development() -> Self {
        Self {
            password_hash: PasswordHashConfig::minimal(),
            ..Self::with_random_secret()
        }
    }

    /// Token lifetime in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_hash", &self.password_hash)
            .finish()
    }
}
