//! AES-256-GCM block sealing.
//!
//! Each call derives its own key from its own salt: `seal` draws a fresh
//! salt and nonce, derives the key, and packs `salt ‖ nonce ‖ tag ‖
//! ciphertext` into one opaque blob. `open` parses that exact layout. No
//! AAD is used, so the caller's block index is not authenticated by this
//! layer — see the envelope's own index field for that (unauthenticated by
//! design; see module docs on `crate::envelope`).

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::config::{ARGON_KEY_LEN, MIN_CIPHER_BLOB_LEN, NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::crypto::derive::{derive_key, generate_salt};
use crate::error::{ShumzuError, ShumzuResult};

/// Seals `plaintext` under `password`, returning `salt ‖ nonce ‖ tag ‖ ciphertext`.
pub fn seal(password: &[u8], plaintext: &[u8]) -> ShumzuResult<Vec<u8>> {
    let salt = generate_salt();
    let key = derive_key(password, &salt)?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::Rng::fill(&mut rand::rng(), &mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let aead = Aes256Gcm::new_from_slice(&key).map_err(|e| ShumzuError::Encryption(e.to_string()))?;
    let sealed = aead.encrypt(nonce, plaintext).map_err(|e| ShumzuError::Encryption(e.to_string()))?;

    // aes-gcm appends the 16-byte tag to the ciphertext; split it back out so
    // the on-wire layout keeps the tag immediately after the nonce.
    let tag_offset = sealed.len() - TAG_LEN;
    let (ciphertext, tag) = sealed.split_at(tag_offset);

    let mut blob = Vec::with_capacity(SALT_LEN + NONCE_LEN + TAG_LEN + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(tag);
    blob.extend_from_slice(ciphertext);
    Ok(blob)
}

/// Opens a blob produced by [`seal`] under `password`.
pub fn open(password: &[u8], blob: &[u8]) -> ShumzuResult<Vec<u8>> {
    if blob.len() < MIN_CIPHER_BLOB_LEN {
        return Err(ShumzuError::Decryption(format!(
            "cipher blob too short: need at least {MIN_CIPHER_BLOB_LEN} bytes, got {}",
            blob.len()
        )));
    }

    let (salt, rest) = blob.split_at(SALT_LEN);
    let (nonce_bytes, rest) = rest.split_at(NONCE_LEN);
    let (tag, ciphertext) = rest.split_at(TAG_LEN);

    let salt: [u8; SALT_LEN] = salt.try_into().expect("split_at guarantees length");
    let key = derive_key(password, &salt)?;
    let aead = Aes256Gcm::new_from_slice(&key).map_err(|e| ShumzuError::Decryption(e.to_string()))?;

    // Reassemble ciphertext‖tag, the layout aes-gcm's `Aead::decrypt` expects.
    let mut sealed = Vec::with_capacity(ciphertext.len() + TAG_LEN);
    sealed.extend_from_slice(ciphertext);
    sealed.extend_from_slice(tag);

    let nonce = Nonce::from_slice(nonce_bytes);
    aead.decrypt(nonce, sealed.as_slice())
        .map_err(|_| ShumzuError::Decryption("authentication tag mismatch".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let blob = seal(b"hunter2", b"payload bytes").unwrap();
        let opened = open(b"hunter2", &blob).unwrap();
        assert_eq!(opened, b"payload bytes");
    }

    #[test]
    fn wrong_password_fails_authentication() {
        let blob = seal(b"hunter2", b"payload bytes").unwrap();
        assert!(open(b"wrong", &blob).is_err());
    }

    #[test]
    fn tampered_blob_fails_authentication() {
        let mut blob = seal(b"hunter2", b"payload bytes").unwrap();
        let last = blob.len() - 1;
        blob[last] ^= 0xFF;
        assert!(open(b"hunter2", &blob).is_err());
    }

    #[test]
    fn truncated_blob_is_rejected() {
        assert!(open(b"hunter2", &[0u8; 10]).is_err());
    }

    #[test]
    fn each_seal_uses_a_fresh_salt_and_nonce() {
        let a = seal(b"hunter2", b"same plaintext").unwrap();
        let b = seal(b"hunter2", b"same plaintext").unwrap();
        assert_ne!(a, b);
    }
}
