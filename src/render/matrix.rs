//! # Dot Matrix
//!
//! The central entity of the print pipeline: a binarized on/off grid
//! representing which print-head needles fire. Produced once per job by the
//! rasterizer, immutable thereafter, consumed by the bit-image encoder.
//!
//! ## Layout
//!
//! Dots are stored row-major: the dot at column `x`, row `y` lives at
//! linear index `y * width + x`.

use crate::error::TermicaError;

/// A 1-bit-per-dot monochrome grid, row-major.
///
/// The constructor enforces `bits.len() == width * height` and rejects
/// zero-area grids, so every constructed matrix is valid. Reads outside
/// the grid go through [`DotMatrix::dot`], which returns "off" instead of
/// indexing out of bounds — the encoder relies on this when padding the
/// final partial band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotMatrix {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl DotMatrix {
    /// Build a matrix from row-major dot data.
    ///
    /// ## Errors
    ///
    /// Returns [`TermicaError::InvalidMatrix`] if either dimension is zero
    /// or `bits.len() != width * height`.
    pub fn new(width: usize, height: usize, bits: Vec<bool>) -> Result<Self, TermicaError> {
        if width == 0 || height == 0 {
            return Err(TermicaError::InvalidMatrix(format!(
                "zero-area matrix ({}x{})",
                width, height
            )));
        }
        if bits.len() != width * height {
            return Err(TermicaError::InvalidMatrix(format!(
                "expected {} dots for {}x{}, got {}",
                width * height,
                width,
                height,
                bits.len()
            )));
        }
        Ok(Self {
            width,
            height,
            bits,
        })
    }

    /// Width in dots.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in dots.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the dot at `(x, y)` is on. Positions outside the grid are
    /// reported as off.
    #[inline]
    pub fn dot(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[y * self.width + x]
    }
}

// ============================================================================
// TESTS
// ============================================================================
