//! Single-envelope QR encode/decode.
//!
//! Wraps the `qrcode` crate for encoding and `rqrr` for decoding — the two
//! libraries are independent implementations of the QR standard, which is
//! what lets [`decode_all`] recover symbols the encoder produced without
//! round-tripping through the same code path.

use image::{DynamicImage, GrayImage, Luma};
use qrcode::QrCode;

use crate::config::{QR_CELL_SIZE, QR_ECC_LEVEL};
use crate::error::{ShumzuError, ShumzuResult};

/// Encodes `envelope` (a JSON envelope string, for block `index`) at the
/// smallest QR version that fits it, error-correction level L, rendered to
/// exactly `QR_CELL_SIZE x QR_CELL_SIZE` pixels.
pub fn encode(index: u32, envelope: &str) -> ShumzuResult<GrayImage> {
    let code = QrCode::with_error_correction_level(envelope.as_bytes(), QR_ECC_LEVEL).map_err(|e| match e {
        qrcode::types::QrError::DataTooLong => ShumzuError::QrCapacity { index, len: envelope.len() },
        other => ShumzuError::QrEncode(other),
    })?;

    let rendered = code.render::<Luma<u8>>().min_dimensions(QR_CELL_SIZE, QR_CELL_SIZE).build();

    // `min_dimensions` rounds up to a whole number of QR modules, which is
    // rarely exactly QR_CELL_SIZE; the matrix requires uniform cells, so
    // resize down to the canonical size.
    let resized = image::imageops::resize(&rendered, QR_CELL_SIZE, QR_CELL_SIZE, image::imageops::FilterType::Nearest);
    Ok(resized)
}

/// Detects and decodes every QR symbol present in `image`, in unspecified
/// order. Symbols that fail to decode are silently skipped; only when not a
/// single symbol in the whole image decodes does this return
/// `QrError::QrDecode`.
pub fn decode_all(image: &DynamicImage) -> ShumzuResult<Vec<String>> {
    let gray = image.to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare(gray);
    let grids = prepared.detect_grids();

    let mut envelopes = Vec::with_capacity(grids.len());
    for grid in grids {
        if let Ok((_, content)) = grid.decode() {
            envelopes.push(content);
        }
    }

    if envelopes.is_empty() {
        return Err(ShumzuError::QrDecode);
    }

    Ok(envelopes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_produces_the_canonical_cell_size() {
        let image = encode(0, r#"{"index":0,"data":"aGVsbG8="}"#).unwrap();
        assert_eq!(image.width(), QR_CELL_SIZE);
        assert_eq!(image.height(), QR_CELL_SIZE);
    }

    #[test]
    fn encode_then_decode_roundtrips_the_envelope_string() {
        let envelope = r#"{"index":5,"data":"aGVsbG8gd29ybGQ="}"#;
        let cell = encode(5, envelope).unwrap();
        let image = DynamicImage::ImageLuma8(cell);
        let decoded = decode_all(&image).unwrap();
        assert_eq!(decoded, vec![envelope.to_owned()]);
    }

    #[test]
    fn decode_empty_image_fails() {
        let blank = GrayImage::from_pixel(QR_CELL_SIZE, QR_CELL_SIZE, Luma([255u8]));
        let image = DynamicImage::ImageLuma8(blank);
        assert!(decode_all(&image).is_err());
    }

    #[test]
    fn oversized_payload_fails_with_capacity_error() {
        let huge = "x".repeat(10_000);
        let result = encode(7, &huge);
        assert!(matches!(result, Err(ShumzuError::QrCapacity { index: 7, .. })));
    }
}
