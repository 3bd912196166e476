//! # Rasterizer
//!
//! Converts a decoded source image into a [`DotMatrix`] sized for the
//! printer. The pipeline has three independently testable stages:
//!
//! 1. **Decode**: the `image` crate turns the source bytes into a pixel grid
//! 2. **Resample**: nearest-neighbor scaling to the model's calibration width
//! 3. **Binarize**: weighted luminance against the configured threshold
//!
//! ## Scaling
//!
//! The scale factor normalizes every image to the calibration width:
//!
//! ```text
//! scale    = calibration_width / source_width
//! scaled_w = floor(source_width  * scale)   (= calibration_width)
//! scaled_h = floor(source_height * scale)
//! ```
//!
//! Destination dot `(x, y)` samples the nearest source pixel at
//! `(floor(x / scale), floor(y / scale))` — no interpolation, so line art
//! and QR-like content keep hard edges.
//!
//! ## Luminance Weights
//!
//! Binarization uses the weighted sum `0.3*R + 0.16*G + 0.114*B`. These are
//! legacy weights, deliberately *not* ITU-R BT.601/709: the sum tops out at
//! ~146 for pure white, which biases mid-grays toward black. Fleets of
//! existing prints were calibrated against this curve, so it is preserved
//! bit-exact. Raise [`PrinterConfig::threshold`] to darken output further,
//! lower it to lighten.

use image::DynamicImage;

use crate::error::TermicaError;
use crate::printer::PrinterConfig;
use crate::render::matrix::DotMatrix;

/// Decode raw image bytes (PNG, JPEG, BMP, ...) into a pixel grid.
///
/// ## Errors
///
/// Returns [`TermicaError::Decode`] for unsupported or corrupt input.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, TermicaError> {
    image::load_from_memory(bytes).map_err(|e| TermicaError::Decode(e.to_string()))
}

/// Weighted luminance of one RGB pixel, truncated to an integer.
///
/// Maximum value is 146 (pure white), so any threshold above that yields
/// an all-black print.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    (r as f64 * 0.3 + g as f64 * 0.16 + b as f64 * 0.114) as u8
}

/// Whether a pixel fires the print head: luminance strictly below the
/// threshold prints black.
#[inline]
pub fn binarize(r: u8, g: u8, b: u8, threshold: u8) -> bool {
    luminance(r, g, b) < threshold
}

/// Rasterize a decoded image into a dot matrix sized for `config`.
///
/// Deterministic: the same image and config always yield the same matrix.
///
/// ## Errors
///
/// Returns [`TermicaError::Decode`] for a zero-area source image and
/// [`TermicaError::InvalidMatrix`] when scaling collapses the image to
/// zero height (extremely wide sources on a small calibration width).
pub fn rasterize(img: &DynamicImage, config: &PrinterConfig) -> Result<DotMatrix, TermicaError> {
    let rgb = img.to_rgb8();
    let (src_w, src_h) = rgb.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(TermicaError::Decode("image has zero area".to_string()));
    }

    let scale = config.calibration_width as f64 / src_w as f64;
    let width = (src_w as f64 * scale) as usize;
    let height = (src_h as f64 * scale) as usize;

    let mut bits = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            // Nearest-neighbor sample; the min() guards against float
            // round-up on the last column/row.
            let sx = ((x as f64 / scale) as u32).min(src_w - 1);
            let sy = ((y as f64 / scale) as u32).min(src_h - 1);
            let pixel = rgb.get_pixel(sx, sy);
            bits.push(binarize(pixel[0], pixel[1], pixel[2], config.threshold));
        }
    }

    DotMatrix::new(width, height, bits)
}

/// Decode and rasterize in one step.
pub fn rasterize_bytes(bytes: &[u8], config: &PrinterConfig) -> Result<DotMatrix, TermicaError> {
    let img = decode_image(bytes)?;
    rasterize(&img, config)
}

// ============================================================================
// TESTS
// ============================================================================
