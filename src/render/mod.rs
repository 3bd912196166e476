//! # Rendering Module
//!
//! This module converts source images into the monochrome dot matrix
//! consumed by the bit-image encoder.
//!
//! ## Modules
//!
//! - [`matrix`]: The [`matrix::DotMatrix`] entity (binarized dot grid)
//! - [`raster`]: Decode, resample, and binarize pipeline
//!
//! ## Usage Example
//!
//! ```
//! use termica::printer::PrinterConfig;
//! use termica::render::raster;
//!
//! // An 8-dot-wide test "printer" keeps the matrix small
//! let config = PrinterConfig::GENERIC_80MM.with_calibration_width(8);
//!
//! let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
//!     4, 4, image::Rgb([0, 0, 0]),
//! ));
//! let matrix = raster::rasterize(&img, &config).unwrap();
//!
//! assert_eq!(matrix.width(), 8);
//! assert_eq!(matrix.height(), 8);
//! assert!(matrix.dot(0, 0)); // black source pixel fires the dot
//! ```

pub mod matrix;
pub mod raster;

pub use matrix::DotMatrix;
