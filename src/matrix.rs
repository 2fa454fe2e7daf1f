//! Grid geometry, PNG composition, and composite-image scanning.
//!
//! The "keymaster": a single raster holding every block's QR code pasted
//! into a deterministic cell. `cols = floor(sqrt(T))`, `rows =
//! ceil(T/cols)` for `T` total blocks (metadata + payload); cell `(r, c)`
//! holds block index `r*cols + c`, unused trailing cells stay background.

use image::{DynamicImage, GenericImage, GrayImage, Rgb, RgbImage};

use crate::config::QR_CELL_SIZE;
use crate::error::ShumzuResult;
use crate::qr;

/// Computes `(cols, rows)` for `total` blocks, per the canonical grid formula.
pub fn grid_dimensions(total: usize) -> (usize, usize) {
    let cols = (total as f64).sqrt().floor() as usize;
    let cols = cols.max(1);
    let rows = total.div_ceil(cols);
    (cols, rows)
}

/// Pastes one QR cell per `(index, cell)` pair into a single RGB canvas and
/// returns it ready for PNG encoding. `cells` need not be sorted; any index
/// not present in `cells` is left as background.
pub fn build(total: usize, cells: &[(u32, GrayImage)]) -> RgbImage {
    let (cols, rows) = grid_dimensions(total);
    let mut canvas = RgbImage::from_pixel((cols as u32) * QR_CELL_SIZE, (rows as u32) * QR_CELL_SIZE, Rgb([255, 255, 255]));

    for (index, cell) in cells {
        let index = *index as usize;
        let (row, col) = (index / cols, index % cols);
        let x = (col as u32) * QR_CELL_SIZE;
        let y = (row as u32) * QR_CELL_SIZE;
        let rgb_cell = DynamicImage::ImageLuma8(cell.clone()).to_rgb8();
        // Cells are always QR_CELL_SIZE square and within canvas bounds by
        // construction of `grid_dimensions`, so this cannot fail.
        canvas.copy_from(&rgb_cell, x, y).expect("cell fits within the canvas");
    }

    canvas
}

/// Encodes every `(index, envelope)` pair into a QR cell and composes the
/// full keymaster canvas in one call.
pub fn build_from_envelopes(total: usize, envelopes: &[(u32, String)]) -> ShumzuResult<RgbImage> {
    let mut cells = Vec::with_capacity(envelopes.len());
    for (index, envelope) in envelopes {
        cells.push((*index, qr::encode(*index, envelope)?));
    }
    Ok(build(total, &cells))
}

/// Scans every QR symbol out of a composite image, returning the raw
/// envelope strings in unspecified order.
pub fn scan(image: &DynamicImage) -> ShumzuResult<Vec<String>> {
    qr::decode_all(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dimensions_two_blocks() {
        // spec.md scenario: |B|=1, one metadata + one payload block => T=2.
        assert_eq!(grid_dimensions(2), (1, 2));
    }

    #[test]
    fn grid_dimensions_five_blocks() {
        // 1 metadata + 4 payload => T=5, cols=floor(sqrt(5))=2, rows=ceil(5/2)=3.
        assert_eq!(grid_dimensions(5), (2, 3));
    }

    #[test]
    fn grid_dimensions_perfect_square() {
        assert_eq!(grid_dimensions(9), (3, 3));
    }

    #[test]
    fn build_places_cells_at_expected_pixel_origin() {
        let cell = qr::encode(0, r#"{"index":0,"data":"aGk="}"#).unwrap();
        let canvas = build(2, &[(0, cell.clone()), (1, cell)]);
        // cols=1, rows=2: index 0 at (0,0), index 1 at (0, QR_CELL_SIZE).
        assert_eq!(canvas.width(), QR_CELL_SIZE);
        assert_eq!(canvas.height(), QR_CELL_SIZE * 2);
    }

    #[test]
    fn build_from_envelopes_reports_the_offending_block_index() {
        let huge = "x".repeat(10_000);
        let envelopes = vec![(0, r#"{"index":0,"data":"aGk="}"#.to_owned()), (4, huge)];
        match build_from_envelopes(5, &envelopes) {
            Err(crate::error::ShumzuError::QrCapacity { index, .. }) => assert_eq!(index, 4),
            other => panic!("expected QrCapacity{{index: 4, ..}}, got {other:?}"),
        }
    }

    #[test]
    fn pasting_order_does_not_affect_canvas_identity() {
        let a = qr::encode(0, r#"{"index":0,"data":"YQ=="}"#).unwrap();
        let b = qr::encode(1, r#"{"index":1,"data":"Yg=="}"#).unwrap();
        let forward = build(2, &[(0, a.clone()), (1, b.clone())]);
        let backward = build(2, &[(1, b), (0, a)]);
        assert_eq!(forward, backward);
    }
}
