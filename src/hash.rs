//! Whole-file and content-addressed digests.
//!
//! SHA3-256 is the single hash primitive in the codec: it populates
//! `Metadata.hash` at encode time and re-verifies the reassembled file at
//! decode time.

use sha3::{Digest, Sha3_256};

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// Computes the SHA3-256 digest of `data`.
#[inline]
pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes the SHA3-256 digest of `data` and renders it as lowercase hex,
/// the representation stored in [`crate::types::Metadata::hash`].
#[inline]
pub fn digest_hex(data: &[u8]) -> String {
    hex::encode(digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(digest(b"hello"), digest(b"hello"));
    }

    #[test]
    fn digest_hex_is_lowercase_and_right_length() {
        let h = digest_hex(b"hello");
        assert_eq!(h.len(), DIGEST_LEN * 2);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn different_inputs_differ() {
        assert_ne!(digest(b"hello"), digest(b"world"));
    }
}
