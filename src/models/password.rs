//! This file defines the password hash used by the simulated identity flow.
//! Passwords are compared by a deterministic one-way hash: SHA-256 over the
//! UTF-8 bytes of the password, hex-encoded.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A hex-encoded SHA-256 digest of a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a raw password.
    pub fn new(raw_password: &str) -> Self {
        let digest = Sha256::digest(raw_password.as_bytes());
        let hex = digest.iter().map(|byte| format!("{byte:02x}")).collect();

        Self(hex)
    }

    /// Wrap an existing hex digest without hashing.
    ///
    /// The caller should ensure that `raw_hash` is a hex-encoded SHA-256
    /// digest, otherwise [PasswordHash::verify] will never succeed.
    pub fn new_unchecked(raw_hash: &str) -> Self {
        Self(raw_hash.to_string())
    }

    /// Check that `raw_password` hashes to the stored digest.
    pub fn verify(&self, raw_password: &str) -> bool {
        self == &Self::new(raw_password)
    }
}

impl Display for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
