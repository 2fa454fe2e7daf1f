//! Joins decoded blocks back into a file, verifies integrity, and writes
//! the result with collision-avoiding naming.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::METADATA_BLOCK_INDEX;
use crate::error::{ShumzuError, ShumzuResult};
use crate::hash::digest_hex;
use crate::types::{DecodedBlock, Metadata};

/// The file name and bytes recovered from a complete set of decoded blocks,
/// with integrity already verified against the metadata hash.
#[derive(Debug)]
pub struct Reassembled {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Joins `blocks` (in any order, duplicates allowed — last one for a given
/// index wins) into the original file, verifying the metadata hash.
pub fn reassemble(blocks: Vec<DecodedBlock>) -> ShumzuResult<Reassembled> {
    let mut by_index: BTreeMap<u32, Vec<u8>> = BTreeMap::new();
    for block in blocks {
        by_index.insert(block.index, block.bytes);
    }

    if !by_index.contains_key(&METADATA_BLOCK_INDEX) {
        return Err(ShumzuError::MissingBlocks(vec![METADATA_BLOCK_INDEX]));
    }

    let max_index = *by_index.keys().last().expect("metadata key present");
    let missing: Vec<u32> = (METADATA_BLOCK_INDEX..=max_index).filter(|i| !by_index.contains_key(i)).collect();
    if !missing.is_empty() {
        return Err(ShumzuError::MissingBlocks(missing));
    }

    let metadata_bytes = by_index.remove(&METADATA_BLOCK_INDEX).expect("checked above");
    let metadata: Metadata = serde_json::from_slice(&metadata_bytes).map_err(|e| ShumzuError::Metadata(e.to_string()))?;

    let mut file_bytes = Vec::new();
    for (_, bytes) in by_index {
        file_bytes.extend_from_slice(&bytes);
    }

    let actual = digest_hex(&file_bytes);
    if actual != metadata.hash {
        return Err(ShumzuError::Integrity { expected: metadata.hash, actual });
    }

    Ok(Reassembled { file_name: metadata.file_name, bytes: file_bytes })
}

/// Writes `data` under `output_dir/file_name`, appending `_<k>` before the
/// extension on collision until a free path is claimed. Uses `create_new`
/// so the probe-and-claim is atomic rather than a racy stat-then-open.
pub fn write_with_collision_avoidance(output_dir: &Path, file_name: &str, data: &[u8]) -> ShumzuResult<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let candidate = output_dir.join(file_name);
    if let Some(mut file) = try_create_new(&candidate)? {
        file.write_all(data)?;
        return Ok(candidate);
    }

    let path = PathBuf::from(file_name);
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let extension = path.extension().map(|e| e.to_string_lossy().into_owned());

    for k in 1u32.. {
        let renamed = match &extension {
            Some(ext) => format!("{stem}_{k}.{ext}"),
            None => format!("{stem}_{k}"),
        };
        let candidate = output_dir.join(renamed);
        if let Some(mut file) = try_create_new(&candidate)? {
            file.write_all(data)?;
            return Ok(candidate);
        }
    }

    unreachable!("u32 suffix space exhausted")
}

/// Attempts to atomically create `path`; returns `None` (not an error) if it
/// already exists, so the caller can try the next suffix.
fn try_create_new(path: &Path) -> ShumzuResult<Option<std::fs::File>> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(None),
        Err(e) => Err(e.into()),
    }
}
