//! High-level encode/decode entry points wired to file I/O, password
//! resolution, and the terminal UI.
//!
//! This is the seam the CLI calls into; everything below it (`pipeline`,
//! `matrix`, `block`, `reassemble`) is pure codec logic with no knowledge of
//! paths, prompts, or progress bars.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::DEFAULT_BLOCK_SIZE;
use crate::error::{ShumzuError, ShumzuResult};
use crate::file::{operations, validation};
use crate::pipeline::{decode as decode_pipeline, encode as encode_pipeline};
use crate::reassemble;
use crate::types::{EncryptionMode, Mode};
use crate::ui::{self, prompt};

/// Resolved options for one encode invocation.
pub struct EncodeOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub password: Option<String>,
    pub block_size: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { input: PathBuf::new(), output: None, password: None, block_size: DEFAULT_BLOCK_SIZE }
    }
}

/// Resolved options for one decode invocation.
pub struct DecodeOptions {
    pub input: PathBuf,
    pub output_folder: Option<PathBuf>,
    pub password: Option<String>,
}

/// Runs the encode path end to end: read source file, derive the password
/// (interactively if `options.password` is `None`), run the pipeline, write
/// the composite PNG, and print a summary.
pub fn encode(options: EncodeOptions) -> ShumzuResult<PathBuf> {
    validation::validate_input_path(&options.input)?;
    ui::show_mode_started(Mode::Encode, &options.input);

    let file_bytes = operations::read_file(&options.input)?;
    let file_name = options
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_owned());

    let password = match options.password {
        Some(p) => p,
        None => prompt::prompt_encryption_password()?,
    };
    let encryption = EncryptionMode::from_password(Some(password));
    debug!(encrypted = encryption.is_encrypted(), "resolved encryption mode");

    let canvas = encode_pipeline::run(&file_bytes, &file_name, options.block_size, &encryption)?;

    let output_path = options.output.unwrap_or_else(|| operations::default_output_path(&options.input, Mode::Encode));
    write_png(&output_path, &canvas)?;

    let block_count = file_bytes.len().div_ceil(options.block_size) + 1;
    let (cols, rows) = crate::matrix::grid_dimensions(block_count);
    ui::show_encode_summary(&output_path, block_count, cols, rows);

    Ok(output_path)
}

/// Runs the decode path end to end: read the composite PNG, scan every QR,
/// resolve a password if the scan suggests one is needed, reassemble,
/// verify, write the output file, and print a summary.
pub fn decode(options: DecodeOptions) -> ShumzuResult<PathBuf> {
    validation::validate_input_path(&options.input)?;
    ui::show_mode_started(Mode::Decode, &options.input);

    let image = image::open(&options.input)?;
    let raw_envelopes = crate::matrix::scan(&image)?;

    let mut encryption = EncryptionMode::from_password(options.password.clone());

    if !encryption.is_encrypted() && envelopes_look_encrypted(&raw_envelopes) {
        let password = if is_interactive() {
            prompt::prompt_decryption_password()?
        } else {
            return Err(ShumzuError::PasswordRequired);
        };
        encryption = EncryptionMode::from_password(Some(password));
    }

    let decoded = decode_pipeline::run(&raw_envelopes, &encryption);
    let reassembled = reassemble::reassemble(decoded)?;

    let output_folder = options.output_folder.unwrap_or_else(|| operations::default_output_path(&options.input, Mode::Decode));
    let output_path = reassemble::write_with_collision_avoidance(&output_folder, &reassembled.file_name, &reassembled.bytes)?;

    ui::show_decode_summary(&output_path, &reassembled.file_name, reassembled.bytes.len() as u64);

    Ok(output_path)
}

/// Heuristic pre-scan: does any envelope's raw `data` look long enough to be
/// a cipher blob rather than bare compressed bytes? Used only to decide
/// whether to prompt; the pipeline's own per-block decrypt attempt is the
/// actual source of truth.
fn envelopes_look_encrypted(raw_envelopes: &[String]) -> bool {
    raw_envelopes.iter().filter_map(|raw| crate::envelope::decode(raw).ok()).any(|(_, data)| decode_pipeline::looks_encrypted(&data))
}

/// Whether stdin is attached to a terminal, gating the interactive password
/// fallback vs. failing with `PasswordRequiredError`.
fn is_interactive() -> bool {
    use std::io::IsTerminal;
    std::io::stdin().is_terminal()
}

fn write_png(path: &Path, canvas: &image::RgbImage) -> ShumzuResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    canvas.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_roundtrip_without_password() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("source.txt");
        std::fs::write(&input, b"hello SHUMZU world").unwrap();

        let output = dir.path().join("keymaster.png");
        let encode_opts = EncodeOptions { input: input.clone(), output: Some(output.clone()), password: Some(String::new()), block_size: 1024 };
        encode(encode_opts).unwrap();
        assert!(output.exists());

        let out_dir = dir.path().join("restored");
        let decode_opts = DecodeOptions { input: output, output_folder: Some(out_dir.clone()), password: None };
        let restored_path = decode(decode_opts).unwrap();

        assert_eq!(std::fs::read(restored_path).unwrap(), b"hello SHUMZU world");
    }

    #[test]
    fn end_to_end_roundtrip_with_password() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("secret.txt");
        std::fs::write(&input, b"top secret payload").unwrap();

        let output = dir.path().join("keymaster.png");
        let encode_opts = EncodeOptions { input: input.clone(), output: Some(output.clone()), password: Some("correct horse".into()), block_size: 1024 };
        encode(encode_opts).unwrap();

        let out_dir = dir.path().join("restored");
        let decode_opts = DecodeOptions { input: output, output_folder: Some(out_dir.clone()), password: Some("correct horse".into()) };
        let restored_path = decode(decode_opts).unwrap();

        assert_eq!(std::fs::read(restored_path).unwrap(), b"top secret payload");
    }

    #[test]
    fn wrong_password_fails_missing_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("secret.txt");
        std::fs::write(&input, b"top secret payload").unwrap();

        let output = dir.path().join("keymaster.png");
        let encode_opts = EncodeOptions { input, output: Some(output.clone()), password: Some("correct horse".into()), block_size: 1024 };
        encode(encode_opts).unwrap();

        let out_dir = dir.path().join("restored");
        let decode_opts = DecodeOptions { input: output, output_folder: Some(out_dir), password: Some("wrong".into()) };
        assert!(decode(decode_opts).is_err());
    }
}
