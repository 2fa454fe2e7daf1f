//! Shared types threaded through the encode/decode pipelines.

use std::fmt::{Display, Formatter, Result as FmtResult};

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Distinguishes the two directions the [`crate::pipeline`] can run.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// File bytes in, composite PNG out.
    Encode,
    /// Composite PNG in, file bytes out.
    Decode,
}

impl Mode {
    /// A human-readable label for progress bars and summaries.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Self::Encode => "Encoding",
            Self::Decode => "Decoding",
        }
    }
}

impl Display for Mode {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Whether a pipeline invocation seals blocks under a password.
///
/// Threaded through the pipeline as an immutable value rather than read from
/// global state, so a single process can never mix passwords across a run.
#[derive(Clone)]
pub enum EncryptionMode {
    /// Blocks are compressed only.
    Plain,
    /// Blocks are compressed then sealed under AES-256-GCM.
    Encrypted(SecretString),
}

impl EncryptionMode {
    /// Builds an [`EncryptionMode`] from an optional password string.
    ///
    /// An empty password is treated the same as no password, matching the
    /// CLI's "empty = no encryption" rule.
    pub fn from_password(password: Option<String>) -> Self {
        match password {
            Some(p) if !p.is_empty() => Self::Encrypted(SecretString::from(p)),
            _ => Self::Plain,
        }
    }

    /// True when this mode seals blocks under a password.
    #[inline]
    pub fn is_encrypted(&self) -> bool {
        matches!(self, Self::Encrypted(_))
    }
}

/// The metadata record carried in block index 0.
///
/// Traverses the same compress → (encrypt) → envelope path as payload
/// blocks; it is not a special wire format of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Metadata {
    /// Basename of the original source file.
    pub file_name: String,
    /// Lowercase-hex SHA3-256 digest of the original file bytes.
    pub hash: String,
}

/// A single block of the framed file: either the metadata record (index 0)
/// or a contiguous payload slice (index 1..N).
#[derive(Debug, Clone)]
pub struct Block {
    /// Position in `{0, 1, .., N}`.
    pub index: u32,
    /// Raw, unprocessed bytes of this block.
    pub bytes: Vec<u8>,
}

/// A block recovered from a scanned composite image, already decrypted and
/// decompressed back to its original bytes.
#[derive(Debug, Clone)]
pub struct DecodedBlock {
    /// Index carried by the envelope this block came from.
    pub index: u32,
    /// Original bytes (the metadata JSON for index 0, payload otherwise).
    pub bytes: Vec<u8>,
}
