//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations used by the domain crates:
//! - Cryptographic helpers (SHA-1 request signing)
//! - Password hashing (Argon2id with tunable cost)
//! - Signed, time-limited tokens (HS256)
//! - Bearer credential extraction from HTTP headers

pub mod client;
pub mod crypto;
pub mod password;
pub mod token;
