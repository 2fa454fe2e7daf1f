//! Input path validation.

use std::path::Path;

use crate::error::{ShumzuError, ShumzuResult};

/// Validates that `path` names an existing, non-empty, non-directory file —
/// the preconditions for both the encode source file and the decode
/// source PNG.
pub fn validate_input_path(path: &Path) -> ShumzuResult<()> {
    let metadata = std::fs::metadata(path)?;

    if metadata.is_dir() {
        return Err(ShumzuError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("path is a directory: {}", path.display()))));
    }

    if metadata.len() == 0 {
        return Err(ShumzuError::EmptyFile);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_rejected() {
        assert!(validate_input_path(Path::new("/nonexistent/path/file.txt")).is_err());
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, b"").unwrap();
        assert!(matches!(validate_input_path(&path), Err(ShumzuError::EmptyFile)));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_input_path(dir.path()).is_err());
    }

    #[test]
    fn non_empty_file_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, b"hello").unwrap();
        assert!(validate_input_path(&path).is_ok());
    }
}
