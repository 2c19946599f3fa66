//! Password Hashing and Verification
//!
//! - Argon2id hashing with a per-password random salt
//! - Cost parameters are configuration ([`PasswordHashConfig`])
//! - Zeroization of clear text on drop
//! - Constant-time verification (inside `argon2`)
//! - Async wrappers that move the CPU-heavy work onto the blocking pool

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize, actual: usize },

    #[error("Password cannot be empty")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,

    #[error("Password hashing task failed: {0}")]
    TaskFailed(String),
}

// ============================================================================
// Cost configuration
// ============================================================================

/// Argon2id cost parameters
///
/// These only affect newly created hashes; verification reads the
/// parameters embedded in each stored PHC string, so existing hashes keep
/// working after the cost is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHashConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for PasswordHashConfig {
    /// OWASP recommended Argon2id parameters: m=19456 (19 MiB), t=2, p=1
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl PasswordHashConfig {
    /// Cheapest valid parameters. Tests only.
    pub fn minimal() -> Self {
        Self {
            memory_kib: Params::MIN_M_COST.max(1024),
            iterations: 1,
            parallelism: 1,
        }
    }

    fn argon2(&self) -> Result<Argon2<'static>, PasswordHashError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordHashError::InvalidParams(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// - Does not implement `Clone`
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new password for registration, enforcing the policy:
    /// - not empty / whitespace only
    /// - at least [`MIN_PASSWORD_LENGTH`] characters (code points)
    /// - no control characters other than space/tab/newline
    ///
    /// Unicode is normalized using NFKC before validation.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized = Self::normalize(raw);

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    /// Wrap a login attempt. No policy is applied: a password that could
    /// never have been registered simply fails verification.
    pub fn for_verification(raw: String) -> Self {
        Self(Self::normalize(raw))
    }

    fn normalize(raw: String) -> String {
        let normalized: String = raw.nfkc().collect();
        let mut raw = raw;
        raw.zeroize();
        normalized
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id and a fresh random salt
    pub fn hash(&self, config: &PasswordHashConfig) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = config
            .argon2()?
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }

    /// [`Self::hash`] on the blocking thread pool
    pub async fn hash_async(
        self,
        config: PasswordHashConfig,
    ) -> Result<HashedPassword, PasswordHashError> {
        tokio::task::spawn_blocking(move || self.hash(&config))
            .await
            .map_err(|e| PasswordHashError::TaskFailed(e.to_string()))?
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
/// (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash.
    ///
    /// Uses the parameters stored in the hash; comparison is constant time.
    /// An unparsable stored hash never verifies.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// [`Self::verify`] on the blocking thread pool
    pub async fn verify_async(
        &self,
        password: ClearTextPassword,
    ) -> Result<bool, PasswordHashError> {
        let hashed = self.clone();
        tokio::task::spawn_blocking(move || hashed.verify(&password))
            .await
            .map_err(|e| PasswordHashError::TaskFailed(e.to_string()))
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("abc12".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::TooShort { min: 6, actual: 5 })
        ));
    }

    #[test]
    fn test_password_minimum_length_accepted() {
        assert!(ClearTextPassword::new("abc123".to_string()).is_ok());
    }

    #[test]
    fn test_long_password_accepted() {
        let long_password = "a".repeat(500);
        assert!(ClearTextPassword::new(long_password).is_ok());
    }

    #[test]
    fn test_password_empty_or_whitespace() {
        assert!(matches!(
            ClearTextPassword::new("".to_string()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
        assert!(matches!(
            ClearTextPassword::new("        ".to_string()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("secret\u{0007}pass".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_unicode_password_counts_code_points() {
        // 6 code points, 18 bytes
        assert!(ClearTextPassword::new("パスワード安".to_string()).is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let config = PasswordHashConfig::minimal();
        let password = ClearTextPassword::new("hunter22".to_string()).unwrap();
        let hashed = password.hash(&config).unwrap();

        assert!(hashed.as_phc_string().starts_with("$argon2id$"));
        assert!(hashed.verify(&ClearTextPassword::for_verification("hunter22".to_string())));
        assert!(!hashed.verify(&ClearTextPassword::for_verification("hunter23".to_string())));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let config = PasswordHashConfig::minimal();
        let a = ClearTextPassword::new("hunter22".to_string()).unwrap().hash(&config).unwrap();
        let b = ClearTextPassword::new("hunter22".to_string()).unwrap().hash(&config).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_reads_params_from_hash() {
        let strong = PasswordHashConfig {
            memory_kib: 2048,
            iterations: 2,
            parallelism: 1,
        };
        let hashed = ClearTextPassword::new("hunter22".to_string())
            .unwrap()
            .hash(&strong)
            .unwrap();
        assert!(hashed.as_phc_string().contains("m=2048,t=2,p=1"));
        assert!(hashed.verify(&ClearTextPassword::for_verification("hunter22".to_string())));
    }

    #[test]
    fn test_invalid_params() {
        let config = PasswordHashConfig {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        };
        let password = ClearTextPassword::new("hunter22".to_string()).unwrap();
        assert!(matches!(
            password.hash(&config),
            Err(PasswordHashError::InvalidParams(_))
        ));
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let hashed = ClearTextPassword::new("hunter22".to_string())
            .unwrap()
            .hash_async(PasswordHashConfig::minimal())
            .await
            .unwrap();

        let ok = hashed
            .verify_async(ClearTextPassword::for_verification("hunter22".to_string()))
            .await
            .unwrap();
        assert!(ok);

        let wrong = hashed
            .verify_async(ClearTextPassword::for_verification("nope".to_string()))
            .await
            .unwrap();
        assert!(!wrong);
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let hashed = ClearTextPassword::new("hunter22".to_string())
            .unwrap()
            .hash(&PasswordHashConfig::minimal())
            .unwrap();

        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&ClearTextPassword::for_verification("hunter22".to_string())));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPassword::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::for_verification("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
