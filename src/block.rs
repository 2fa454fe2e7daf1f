//! Splits a source file into the metadata block plus contiguous payload
//! blocks, and joins decoded blocks back into file bytes.

use crate::config::METADATA_BLOCK_INDEX;
use crate::error::{ShumzuError, ShumzuResult};
use crate::hash::digest_hex;
use crate::types::{Block, Metadata};

/// Splits `file_bytes` into a metadata block (index 0) followed by payload
/// blocks of at most `block_size` bytes each, indexed contiguously from 1.
///
/// `file_name` is recorded verbatim (basename only is the caller's
/// responsibility) in the metadata record.
pub fn split(file_bytes: &[u8], file_name: &str, block_size: usize) -> ShumzuResult<Vec<Block>> {
    if file_bytes.is_empty() {
        return Err(ShumzuError::EmptyFile);
    }

    let metadata = Metadata { file_name: file_name.to_owned(), hash: digest_hex(file_bytes) };
    let metadata_bytes = serde_json::to_vec(&metadata)?;

    let mut blocks = Vec::with_capacity(1 + file_bytes.len().div_ceil(block_size));
    blocks.push(Block { index: METADATA_BLOCK_INDEX, bytes: metadata_bytes });

    for (i, chunk) in file_bytes.chunks(block_size).enumerate() {
        blocks.push(Block { index: (i + 1) as u32, bytes: chunk.to_vec() });
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_contiguous_indices() {
        let data = vec![7u8; 4096];
        let blocks = split(&data, "file.bin", 1024).unwrap();
        // metadata + 4 payload blocks
        assert_eq!(blocks.len(), 5);
        let indices: Vec<u32> = blocks.iter().map(|b| b.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn payload_concatenation_equals_input() {
        let data: Vec<u8> = (0..2500u32).map(|i| (i % 256) as u8).collect();
        let blocks = split(&data, "file.bin", 1024).unwrap();
        let joined: Vec<u8> = blocks[1..].iter().flat_map(|b| b.bytes.clone()).collect();
        assert_eq!(joined, data);
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(matches!(split(&[], "file.bin", 1024), Err(ShumzuError::EmptyFile)));
    }

    #[test]
    fn single_byte_file_yields_one_payload_block() {
        let blocks = split(b"x", "file.bin", 1024).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].bytes, b"x");
    }

    #[test]
    fn metadata_block_carries_name_and_hash() {
        let data = b"hello";
        let blocks = split(data, "greeting.txt", 1024).unwrap();
        let metadata: Metadata = serde_json::from_slice(&blocks[0].bytes).unwrap();
        assert_eq!(metadata.file_name, "greeting.txt");
        assert_eq!(metadata.hash, digest_hex(data));
    }
}
