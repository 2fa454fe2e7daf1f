//! The per-block JSON envelope carried inside every QR symbol.
//!
//! `{"index": <non-negative integer>, "data": "<base64>"}`. `data` holds
//! either `base64(compressed)` (no password) or `base64(salt ‖ nonce ‖ tag ‖
//! ciphertext)` (password set). There is no version field; whether a given
//! envelope is encrypted is a property of the scan, not the wire format —
//! see `crate::matrix`'s triage step. The block index is not authenticated:
//! a reordering attack is only caught by the final whole-file hash check.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::error::{ShumzuError, ShumzuResult};

/// The on-wire envelope. Unknown keys are rejected rather than ignored, per
/// the redesign note that this should be a tagged structure, not a
/// free-form map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireEnvelope {
    index: u32,
    data: String,
}

/// Builds the canonical JSON envelope string for `index`/`bytes`.
pub fn encode(index: u32, bytes: &[u8]) -> String {
    let data = BASE64.encode(bytes);
    // `WireEnvelope` only ever carries ASCII base64 and a u32, so this
    // serialization cannot fail.
    serde_json::to_string(&WireEnvelope { index, data }).expect("envelope serialization is infallible")
}

/// Parses a JSON envelope string back into `(index, raw bytes)`, base64-decoded.
pub fn decode(raw: &str) -> ShumzuResult<(u32, Vec<u8>)> {
    let envelope: WireEnvelope = serde_json::from_str(raw).map_err(|e| ShumzuError::Envelope(e.to_string()))?;
    let bytes = BASE64.decode(&envelope.data).map_err(|e| ShumzuError::Envelope(e.to_string()))?;
    Ok((envelope.index, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let raw = encode(3, b"hello world");
        let (index, bytes) = decode(&raw).unwrap();
        assert_eq!(index, 3);
        assert_eq!(bytes, b"hello world");
    }

    #[test]
    fn has_exactly_two_keys() {
        let raw = encode(0, b"x");
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("index"));
        assert!(obj.contains_key("data"));
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(decode(r#"{"index": 1}"#).is_err());
        assert!(decode(r#"{"data": "aGVsbG8="}"#).is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(decode(r#"{"index": 1, "data": "aGVsbG8=", "hash": "deadbeef"}"#).is_err());
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(decode(r#"{"index": "1", "data": "aGVsbG8="}"#).is_err());
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(decode(r#"{"index": 1, "data": "not base64!!"}"#).is_err());
    }
}
