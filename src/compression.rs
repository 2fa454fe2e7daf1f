//! Two-stage block compression: Brotli, then Zstandard.
//!
//! The stage order is part of the on-wire format, not an implementation
//! detail: encode runs Brotli first and feeds its output to Zstandard;
//! decode reverses that exact order. Swapping the order silently produces
//! garbage rather than a decode error, so the two functions below are the
//! only sanctioned entry points — do not call the underlying crates
//! directly elsewhere in the codec.

use std::io::{Cursor, Read, Write};

use crate::config::{BROTLI_LGWIN, BROTLI_QUALITY, ZSTD_LEVEL};
use crate::error::{ShumzuError, ShumzuResult};

/// Compresses `data` with Brotli then Zstandard.
pub fn compress(data: &[u8]) -> ShumzuResult<Vec<u8>> {
    if data.is_empty() {
        return Err(ShumzuError::Compression("cannot compress empty input".into()));
    }

    let mut brotli_out = Vec::new();
    {
        let mut writer = brotli::CompressorWriter::new(&mut brotli_out, 4096, BROTLI_QUALITY, BROTLI_LGWIN);
        writer.write_all(data).map_err(|e| ShumzuError::Compression(e.to_string()))?;
    }

    zstd::encode_all(Cursor::new(brotli_out), ZSTD_LEVEL).map_err(|e| ShumzuError::Compression(e.to_string()))
}

/// Reverses [`compress`]: Zstandard first, then Brotli.
pub fn decompress(data: &[u8]) -> ShumzuResult<Vec<u8>> {
    if data.is_empty() {
        return Err(ShumzuError::Compression("cannot decompress empty input".into()));
    }

    let zstd_out = zstd::decode_all(Cursor::new(data)).map_err(|e| ShumzuError::Compression(e.to_string()))?;

    let mut brotli_out = Vec::new();
    let mut reader = brotli::Decompressor::new(Cursor::new(zstd_out), 4096);
    reader.read_to_end(&mut brotli_out).map_err(|e| ShumzuError::Compression(e.to_string()))?;

    Ok(brotli_out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let data = b"the quick brown fox jumps over the lazy dog".repeat(8);
        let compressed = compress(&data).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, data);
    }

    #[test]
    fn roundtrip_single_byte() {
        let data = b"x";
        let compressed = compress(data).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn compress_empty_is_an_error() {
        assert!(compress(&[]).is_err());
    }

    #[test]
    fn decompress_garbage_is_an_error() {
        assert!(decompress(b"not a valid zstd frame").is_err());
    }
}
