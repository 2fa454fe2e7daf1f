//! The error taxonomy shared by every stage of the encode/decode pipelines.

use thiserror::Error;

/// Convenience alias used throughout the crate's core modules.
pub type ShumzuResult<T> = Result<T, ShumzuError>;

/// Every way a SHUMZU encode or decode can fail.
///
/// Encode-path errors are always fatal. Decode-path `EnvelopeError`,
/// `DecryptionError`, and `CompressionError` are caught per block and logged
/// rather than propagated; everything else is fatal on decode too.
#[derive(Debug, Error)]
pub enum ShumzuError {
    /// The source file passed to encode contained zero bytes.
    #[error("source file is empty")]
    EmptyFile,

    /// Brotli or Zstandard rejected the input during (de)compression.
    #[error("compression failed: {0}")]
    Compression(String),

    /// Argon2 rejected its own parameter set (never raised by this crate's
    /// fixed parameters; kept for defensive completeness).
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// AES-GCM sealing failed.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// AES-GCM opening failed: tag mismatch or malformed cipher blob.
    #[error("decryption failed: {0}")]
    Decryption(String),

    /// A QR payload did not parse as a well-formed envelope.
    #[error("malformed envelope: {0}")]
    Envelope(String),

    /// An envelope's encoded form does not fit in any QR version at the
    /// configured error-correction level.
    #[error("block {index} does not fit in a QR code ({len} bytes encoded)")]
    QrCapacity { index: u32, len: usize },

    /// The composite image contained no decodable QR symbol at all.
    #[error("no QR codes found in image")]
    QrDecode,

    /// The scanned set of decoded blocks is not a complete `{0, 1, .., N}` cover.
    #[error("missing block index(es): {0:?}")]
    MissingBlocks(Vec<u32>),

    /// The metadata block (index 0) failed to parse as `Metadata` JSON.
    #[error("malformed metadata block: {0}")]
    Metadata(String),

    /// The reconstructed file's hash did not match `Metadata.hash`.
    #[error("integrity check failed: expected {expected}, got {actual}")]
    Integrity { expected: String, actual: String },

    /// Decode encountered what looks like an encrypted blob but no password
    /// was supplied and the session is non-interactive.
    #[error("a password is required to decode this image")]
    PasswordRequired,

    /// Filesystem or image I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG/image codec failure, surfaced as an I/O-class error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// JSON (de)serialization failure outside the envelope-parsing path
    /// (e.g. the metadata record itself).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// QR encoder construction failure (distinct from capacity: malformed
    /// input rather than oversized input).
    #[error("QR encoding error: {0}")]
    QrEncode(#[from] qrcode::types::QrError),
}
