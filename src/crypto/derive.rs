//! Key derivation using the raw Argon2id primitive.
//!
//! Deliberately avoids `argon2::Argon2::hash_password`, the high-level
//! PHC-string API: that path encodes the output as a self-describing string
//! and truncating it to a fixed key length discards the algorithm's own
//! parameter binding. Every key here comes from `hash_password_into` against
//! an explicit, fixed parameter set.

use argon2::{Argon2, Params, Version};
use rand::Rng;

use crate::config::{ARGON_KEY_LEN, ARGON_MEMORY, ARGON_PARALLELISM, ARGON_TIME, SALT_LEN};
use crate::error::{ShumzuError, ShumzuResult};

/// Derives a 32-byte AES-256 key from `password` and a block's `salt`.
pub fn derive_key(password: &[u8], salt: &[u8; SALT_LEN]) -> ShumzuResult<[u8; ARGON_KEY_LEN]> {
    let params = Params::new(ARGON_MEMORY, ARGON_TIME, ARGON_PARALLELISM, Some(ARGON_KEY_LEN))
        .map_err(|e| ShumzuError::KeyDerivation(e.to_string()))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; ARGON_KEY_LEN];
    argon2
        .hash_password_into(password, salt, &mut key)
        .map_err(|e| ShumzuError::KeyDerivation(e.to_string()))?;

    Ok(key)
}

/// Draws a fresh, cryptographically secure salt for one block.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill(&mut salt);
    salt
}
