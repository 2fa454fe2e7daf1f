//! `READ_PNG → SCAN_ALL → [parallel: BASE64 → (DECRYPT?) → DECOMPRESS → ENVELOPE_PARSE] → REASSEMBLE → VERIFY → WRITE_FILE`
//!
//! Reassembly, verification, and file writing live in `crate::reassemble`;
//! this module only owns the per-block decode fan-out.

use rayon::prelude::*;
use tracing::warn;

use crate::compression;
use crate::config::MIN_ENCRYPTED_BLOB_LEN;
use crate::crypto;
use crate::envelope;
use crate::types::{DecodedBlock, EncryptionMode};
use crate::ui::progress::ProgressBar;

/// True when `data` is at least long enough to be a `salt‖nonce‖tag‖ct` blob
/// with a non-empty ciphertext. Used by the caller to decide whether an
/// interactive password prompt is warranted before calling [`run`].
pub fn looks_encrypted(data: &[u8]) -> bool {
    data.len() >= MIN_ENCRYPTED_BLOB_LEN
}

/// Decodes every envelope string into a [`DecodedBlock`]. Per-block
/// failures (malformed envelope, decryption, or decompression) are logged
/// and skipped rather than propagated — `crate::reassemble::reassemble`
/// is what turns an incomplete set into a fatal `MissingBlocks` error.
pub fn run(raw_envelopes: &[String], encryption: &EncryptionMode) -> Vec<DecodedBlock> {
    let progress = ProgressBar::new(raw_envelopes.len() as u64, "Decoding blocks");

    let decoded = raw_envelopes
        .par_iter()
        .filter_map(|raw| {
            let result = decode_one(raw, encryption, &progress);
            progress.inc();
            result
        })
        .collect();

    progress.finish();
    decoded
}

fn decode_one(raw: &str, encryption: &EncryptionMode, progress: &ProgressBar) -> Option<DecodedBlock> {
    let (index, data) = match envelope::decode(raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            progress.suspend(|| warn!("skipping envelope: {e}"));
            return None;
        }
    };

    let compressed = match encryption {
        EncryptionMode::Plain => data,
        EncryptionMode::Encrypted(password) => {
            use secrecy::ExposeSecret;
            match crypto::open(password.expose_secret().as_bytes(), &data) {
                Ok(plain) => plain,
                Err(e) => {
                    progress.suspend(|| warn!("block {index}: {e}"));
                    return None;
                }
            }
        }
    };

    match compression::decompress(&compressed) {
        Ok(bytes) => Some(DecodedBlock { index, bytes }),
        Err(e) => {
            progress.suspend(|| warn!("block {index}: {e}"));
            None
        }
    }
}
