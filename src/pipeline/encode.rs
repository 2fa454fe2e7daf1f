//! `READ_FILE → FRAME → [parallel: COMPRESS → (ENCRYPT?) → ENVELOPE → QR_ENCODE] → ASSEMBLE_MATRIX → WRITE_PNG`

use rayon::prelude::*;

use crate::block;
use crate::compression;
use crate::crypto;
use crate::envelope;
use crate::error::ShumzuResult;
use crate::matrix;
use crate::types::EncryptionMode;
use crate::ui::progress::ProgressBar;

/// Runs the full encode pipeline and returns the composite PNG canvas.
///
/// Any per-block error is fatal: the whole operation aborts and nothing is
/// returned, matching the encode path's fail-fast propagation policy.
pub fn run(file_bytes: &[u8], file_name: &str, block_size: usize, encryption: &EncryptionMode) -> ShumzuResult<image::RgbImage> {
    let blocks = block::split(file_bytes, file_name, block_size)?;
    let total = blocks.len();
    let progress = ProgressBar::new(total as u64, "Encoding blocks");

    let envelopes: Vec<(u32, String)> = blocks
        .into_par_iter()
        .map(|b| {
            let result = transform_block(b.index, &b.bytes, encryption);
            progress.inc();
            result
        })
        .collect::<ShumzuResult<Vec<_>>>()?;

    progress.finish();
    matrix::build_from_envelopes(total, &envelopes)
}

/// One block's compress → (encrypt) → envelope chain. Order of completion
/// across blocks does not matter: the index travels with the result and is
/// all that the matrix assembly step relies on.
fn transform_block(index: u32, bytes: &[u8], encryption: &EncryptionMode) -> ShumzuResult<(u32, String)> {
    let compressed = compression::compress(bytes)?;

    let data = match encryption {
        EncryptionMode::Plain => compressed,
        EncryptionMode::Encrypted(password) => {
            use secrecy::ExposeSecret;
            crypto::seal(password.expose_secret().as_bytes(), &compressed)?
        }
    };

    Ok((index, envelope::encode(index, &data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_one_qr_per_block() {
        let data = vec![1u8; 2048];
        let canvas = run(&data, "file.bin", 1024, &EncryptionMode::Plain).unwrap();
        // 1 metadata + 2 payload blocks => T=3, cols=floor(sqrt(3))=1, rows=3.
        let (cols, rows) = crate::matrix::grid_dimensions(3);
        assert_eq!(canvas.width(), (cols as u32) * crate::config::QR_CELL_SIZE);
        assert_eq!(canvas.height(), (rows as u32) * crate::config::QR_CELL_SIZE);
    }

    #[test]
    fn empty_file_is_rejected_before_any_qr_work() {
        assert!(run(&[], "file.bin", 1024, &EncryptionMode::Plain).is_err());
    }
}
