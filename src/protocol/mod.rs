//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS protocol
//! spoken by Epson-compatible thermal receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic printer commands (init, line spacing, cut)
//! - [`bit_image`]: 24-dot double-density bit-image encoding
//!
//! ## Usage Example
//!
//! ```
//! use termica::DotMatrix;
//! use termica::protocol::{bit_image, commands};
//!
//! // A 2x2 checkerboard matrix
//! let matrix = DotMatrix::new(2, 2, vec![true, false, false, true]).unwrap();
//!
//! // Encode the complete print frame
//! let frame = bit_image::encode(&matrix).unwrap();
//!
//! // The frame opens with ESC @ (reset) and ends with the cut command
//! assert_eq!(&frame[0..2], &commands::init()[..]);
//! assert_eq!(&frame[frame.len() - 3..], &commands::cut_partial()[..]);
//! ```
//!
//! ## Protocol Reference
//!
//! Byte sequences follow the Epson "ESC/POS Application Programming Guide";
//! only the ESC `*` mode 33 bit-image path is implemented.

pub mod bit_image;
pub mod commands;
