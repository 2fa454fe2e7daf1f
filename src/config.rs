//! Application configuration and format constants.
//!
//! This module defines the constants that make up the SHUMZU wire format:
//! block sizing, cryptographic parameters, and QR/matrix geometry. They are
//! the single source of truth for the on-disk and on-image layout.

/// The application name used in user-facing output and prompts.
pub const APP_NAME: &str = "SHUMZU";

/// Default payload block size in bytes, before compression/encryption/framing.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Block index reserved for the metadata record.
pub const METADATA_BLOCK_INDEX: u32 = 0;

/// Argon2id time cost (number of passes).
pub const ARGON_TIME: u32 = 2;

/// Argon2id memory cost in KiB (100 MiB).
pub const ARGON_MEMORY: u32 = 102_400;

/// Argon2id parallelism factor (lanes).
pub const ARGON_PARALLELISM: u32 = 8;

/// Length of the derived AES-256 key in bytes.
pub const ARGON_KEY_LEN: usize = 32;

/// Length of the per-block Argon2 salt in bytes.
pub const SALT_LEN: usize = 16;

/// Length of the AES-GCM nonce in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// Length of the AES-GCM authentication tag in bytes (128 bits).
pub const TAG_LEN: usize = 16;

/// Minimum length of a valid `salt ‖ nonce ‖ tag ‖ ciphertext` blob: an empty
/// ciphertext still carries a salt, nonce, and tag.
pub const MIN_CIPHER_BLOB_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

/// Side length, in pixels, of every individual QR cell in the composite image.
///
/// The codec must not depend on this exact value beyond "QR cells are square
/// and uniform"; it is an implementation constant, not part of the wire format.
pub const QR_CELL_SIZE: u32 = 200;

/// QR error-correction level used for every cell (the design uses level L).
pub const QR_ECC_LEVEL: qrcode::EcLevel = qrcode::EcLevel::L;

/// Default basename for the composite image written by the encode pipeline.
pub const DEFAULT_MATRIX_NAME: &str = "keymaster.png";

/// Zstandard compression level applied to the Brotli-compressed intermediate.
pub const ZSTD_LEVEL: i32 = 19;

/// Brotli compression quality (0-11); 9 balances ratio and throughput for
/// small, per-block payloads.
pub const BROTLI_QUALITY: u32 = 9;

/// Brotli sliding window size (log2 of bytes), the library default.
pub const BROTLI_LGWIN: u32 = 22;

/// Minimum length, in bytes, that an envelope's decoded `data` must reach
/// before it is plausibly an encrypted blob rather than raw compressed bytes.
/// `salt(16) + nonce(12) + tag(16) + 1` per the scan heuristic.
pub const MIN_ENCRYPTED_BLOB_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN + 1;

/// Minimum required password length, enforced only at interactive prompts.
pub const PASSWORD_MIN_LENGTH: usize = 8;
