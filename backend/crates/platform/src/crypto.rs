//! Cryptographic Utilities

use sha1::{Digest, Sha1};

/// Compute SHA-1 and return it as lowercase hex.
///
/// Only used for third-party request signatures that mandate SHA-1;
/// never for anything security-critical on our side.
pub fn sha1_hex(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
