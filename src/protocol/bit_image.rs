//! # ESC/POS Bit-Image Encoding
//!
//! This module packs a [`DotMatrix`] into the ESC `*` 24-dot double-density
//! bit-image command stream. The printer firmware has no tolerance for
//! malformed framing, so every byte here is exact.
//!
//! ## Frame Structure
//!
//! ```text
//! ESC @                          reset
//! ESC 3 24                       line spacing = band height
//! ┌ per band (24 rows each) ─────────────────────────┐
//! │ ESC * 33 wLo wHi             bit-image header    │
//! │ <width * 3 slice bytes>      column data         │
//! │ LF                           advance one band    │
//! └──────────────────────────────────────────────────┘
//! ESC 3 30                       restore default spacing
//! GS V 1                         partial cut
//! ```
//!
//! ## Slice Packing
//!
//! Unlike raster modes, ESC `*` data runs *vertically*: each column of a
//! band is sent as 3 bytes ("slices") of 8 stacked dots, top to bottom,
//! MSB first.
//!
//! ```text
//! column x, band at row `offset`:
//!
//!   slice 0          slice 1          slice 2
//!   bit7 → row 0     bit7 → row 8     bit7 → row 16     (+ offset)
//!   bit6 → row 1     bit6 → row 9     bit6 → row 17
//!   ...              ...              ...
//!   bit0 → row 7     bit0 → row 15    bit0 → row 23
//! ```
//!
//! For slice `k` and bit `b`, the source row is
//! `y = (offset/8 + k)*8 + b`. Rows past the bottom of the matrix are
//! padded as "off" — the final band of a matrix whose height is not a
//! multiple of 24 never reads out of bounds.

use crate::error::TermicaError;
use crate::protocol::commands::{ESC, LF, cut_partial, init, set_line_spacing, u16_le};
use crate::render::matrix::DotMatrix;

/// Rows per bit-image band.
pub const BAND_HEIGHT: usize = 24;

/// Slice bytes per column (24 rows / 8 dots per byte).
pub const SLICES_PER_COLUMN: usize = 3;

/// ESC `*` mode selector: 24-dot double-density.
pub const MODE_24_DOT_DOUBLE_DENSITY: u8 = 33;

/// Line spacing while emitting bands, in dots. Matches [`BAND_HEIGHT`] so
/// each trailing LF advances exactly one band.
pub const BAND_LINE_SPACING: u8 = 24;

/// Default line spacing restored after the image, in dots.
pub const DEFAULT_LINE_SPACING: u8 = 30;

/// # Bit-Image Band Header (ESC * 33 wLo wHi)
///
/// Announces one band of 24-dot double-density image data. The printer
/// then expects exactly `width * 3` data bytes.
///
/// ## Protocol Details
///
/// | Format  | Bytes              |
/// |---------|--------------------|
/// | ASCII   | ESC * 33 wLo wHi   |
/// | Hex     | 1B 2A 21 wLo wHi   |
/// | Decimal | 27 42 33 wLo wHi   |
///
/// `wLo`/`wHi` are the little-endian encoding of the band width in dots.
///
/// ## Example
///
/// ```
/// use termica::protocol::bit_image;
///
/// assert_eq!(bit_image::band_header(570), vec![0x1B, 0x2A, 33, 0x3A, 0x02]);
/// ```
#[inline]
pub fn band_header(width_dots: u16) -> Vec<u8> {
    let [lo, hi] = u16_le(width_dots);
    vec![ESC, b'*', MODE_24_DOT_DOUBLE_DENSITY, lo, hi]
}

/// Pack one 24-row band starting at `offset` into column slices.
///
/// Produces exactly `matrix.width() * 3` bytes. Rows past the bottom of
/// the matrix contribute 0 bits, so a partial final band is padded with
/// "off" dots.
pub fn pack_band(matrix: &DotMatrix, offset: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(matrix.width() * SLICES_PER_COLUMN);
    for x in 0..matrix.width() {
        for k in 0..SLICES_PER_COLUMN {
            let mut slice = 0u8;
            for b in 0..8 {
                let y = (offset / 8 + k) * 8 + b;
                if matrix.dot(x, y) {
                    slice |= 1 << (7 - b); // MSB is the topmost dot
                }
            }
            data.push(slice);
        }
    }
    data
}

/// Encode a complete print frame for `matrix`.
///
/// Emits init, band spacing, `ceil(height / 24)` bit-image bands, the
/// default-spacing restore, and the partial cut. Pure and deterministic:
/// the same matrix always yields byte-identical output, and nothing is
/// transmitted here — the caller hands the frame to the transport.
///
/// ## Errors
///
/// Returns [`TermicaError::InvalidMatrix`] when the width does not fit the
/// protocol's two-byte field. Zero-area matrices cannot be constructed,
/// so the frame always contains at least one band.
pub fn encode(matrix: &DotMatrix) -> Result<Vec<u8>, TermicaError> {
    let width = u16::try_from(matrix.width()).map_err(|_| {
        TermicaError::InvalidMatrix(format!(
            "width {} exceeds the protocol maximum of {}",
            matrix.width(),
            u16::MAX
        ))
    })?;

    let bands = matrix.height().div_ceil(BAND_HEIGHT);
    let mut frame = Vec::with_capacity(
        2 + 3 // init + spacing
            + bands * (5 + matrix.width() * SLICES_PER_COLUMN + 1)
            + 3 + 3, // spacing restore + cut
    );

    frame.extend(init());
    frame.extend(set_line_spacing(BAND_LINE_SPACING));

    let mut offset = 0;
    while offset < matrix.height() {
        frame.extend(band_header(width));
        frame.extend(pack_band(matrix, offset));
        frame.push(LF);
        offset += BAND_HEIGHT;
    }

    frame.extend(set_line_spacing(DEFAULT_LINE_SPACING));
    frame.extend(cut_partial());
    Ok(frame)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_from_rows(rows: &[&[bool]]) -> DotMatrix {
        let width = rows[0].len();
        let bits: Vec<bool> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        DotMatrix::new(width, rows.len(), bits).unwrap()
    }

    #[test]
    fn test_band_header_bytes() {
        assert_eq!(band_header(2), vec![0x1B, 0x2A, 33, 2, 0]);
        assert_eq!(band_header(570), vec![0x1B, 0x2A, 33, 0x3A, 0x02]);
        // Width > 255 exercises the high byte
        assert_eq!(band_header(1000), vec![0x1B, 0x2A, 33, 0xE8, 0x03]);
    }

    #[test]
    fn test_pack_band_checkerboard() {
        // 2x2 matrix [on, off / off, on]:
        //   column 0: row 0 on           -> slice 0 = 0b1000_0000
        //   column 1: row 1 on           -> slice 0 = 0b0100_0000
        // slices 1 and 2 fall entirely below the matrix -> 0
        let m = matrix_from_rows(&[&[true, false], &[false, true]]);
        assert_eq!(pack_band(&m, 0), vec![0x80, 0x00, 0x00, 0x40, 0x00, 0x00]);
    }

    #[test]
    fn test_pack_band_length() {
        let m = DotMatrix::new(7, 24, vec![true; 7 * 24]).unwrap();
        assert_eq!(pack_band(&m, 0).len(), 7 * SLICES_PER_COLUMN);
    }

    #[test]
    fn test_pack_band_full_column() {
        // A full 24-row black column packs to three 0xFF slices
        let m = DotMatrix::new(1, 24, vec![true; 24]).unwrap();
        assert_eq!(pack_band(&m, 0), vec![0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_pack_band_offset_reads_second_band() {
        // 1 wide, 48 tall; only row 24 is on. The second band (offset 24)
        // must see it in its top slice, the first band must not.
        let mut bits = vec![false; 48];
        bits[24] = true;
        let m = DotMatrix::new(1, 48, bits).unwrap();
        assert_eq!(pack_band(&m, 0), vec![0x00, 0x00, 0x00]);
        assert_eq!(pack_band(&m, 24), vec![0x80, 0x00, 0x00]);
    }

    #[test]
    fn test_pack_band_partial_final_band_pads_with_off() {
        // 25 rows, all on: band 2 covers rows 24..47 but only row 24
        // exists. Its top slice has one bit, the rest pad to zero.
        let m = DotMatrix::new(1, 25, vec![true; 25]).unwrap();
        assert_eq!(pack_band(&m, 24), vec![0x80, 0x00, 0x00]);
    }

    #[test]
    fn test_encode_frame_structure() {
        let m = matrix_from_rows(&[&[true, false], &[false, true]]);
        let frame = encode(&m).unwrap();

        // Prefix: ESC @, ESC 3 24
        assert_eq!(&frame[0..5], &[0x1B, 0x40, 0x1B, 0x33, 24]);
        // One band: header + 2 columns * 3 slices + LF
        assert_eq!(&frame[5..10], &[0x1B, 0x2A, 33, 2, 0]);
        assert_eq!(&frame[10..16], &[0x80, 0x00, 0x00, 0x40, 0x00, 0x00]);
        assert_eq!(frame[16], 0x0A);
        // Suffix: ESC 3 30, GS V 1
        assert_eq!(&frame[17..20], &[0x1B, 0x33, 30]);
        assert_eq!(&frame[20..], &[29, 86, 1]);
        assert_eq!(frame.len(), 23);
    }

    #[test]
    fn test_encode_band_count() {
        // height -> ceil(height / 24) band headers
        for (height, expected_bands) in [(1, 1), (24, 1), (25, 2), (48, 2), (49, 3)] {
            let m = DotMatrix::new(1, height, vec![false; height]).unwrap();
            let frame = encode(&m).unwrap();
            let headers = frame
                .windows(3)
                .filter(|w| *w == [0x1B, 0x2A, 33])
                .count();
            assert_eq!(headers, expected_bands, "height {}", height);
        }
    }

    #[test]
    fn test_encode_deterministic() {
        let m = DotMatrix::new(3, 30, (0..90).map(|i| i % 3 == 0).collect()).unwrap();
        assert_eq!(encode(&m).unwrap(), encode(&m).unwrap());
    }

    #[test]
    fn test_encode_rejects_oversized_width() {
        let width = u16::MAX as usize + 1;
        let m = DotMatrix::new(width, 1, vec![false; width]).unwrap();
        assert!(matches!(
            encode(&m),
            Err(TermicaError::InvalidMatrix(_))
        ));
    }
}
