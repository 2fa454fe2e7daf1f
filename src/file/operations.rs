//! Whole-file read/write helpers.
//!
//! The pipeline materializes the full source file and the full composite
//! canvas in memory (spec §5's resource model), so these are simple
//! read-to-end / write-all wrappers rather than streaming readers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_MATRIX_NAME;
use crate::error::ShumzuResult;
use crate::types::Mode;

/// Reads the entirety of `path` into memory.
pub fn read_file(path: &Path) -> ShumzuResult<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// The default output path when the CLI's `--output`/`--output_folder` flag
/// is omitted: `keymaster.png` beside the source file for encode, or the
/// source file's own directory for decode (the actual file name comes from
/// `Metadata.file_name`, resolved later by the reassembler).
pub fn default_output_path(input: &Path, mode: Mode) -> PathBuf {
    match mode {
        Mode::Encode => input.parent().map(|p| p.join(DEFAULT_MATRIX_NAME)).unwrap_or_else(|| PathBuf::from(DEFAULT_MATRIX_NAME)),
        Mode::Decode => input.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(".")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_back_exactly_what_was_written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.bin");
        std::fs::write(&path, b"payload").unwrap();
        assert_eq!(read_file(&path).unwrap(), b"payload");
    }

    #[test]
    fn default_output_path_for_encode_is_keymaster_png() {
        let input = Path::new("/tmp/source/document.txt");
        let output = default_output_path(input, Mode::Encode);
        assert_eq!(output, PathBuf::from("/tmp/source/keymaster.png"));
    }

    #[test]
    fn default_output_path_for_decode_is_the_source_directory() {
        let input = Path::new("/tmp/source/keymaster.png");
        let output = default_output_path(input, Mode::Decode);
        assert_eq!(output, PathBuf::from("/tmp/source"));
    }
}
