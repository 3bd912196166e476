//! # Termica - ESC/POS Network Image Printer
//!
//! Termica prints raster images on ESC/POS thermal receipt printers over a
//! raw TCP socket (port 9100 on most network-attached models). It provides:
//!
//! - **Rasterizer**: image decoding, nearest-neighbor scaling to the
//!   printer's calibration width, and luminance thresholding into a 1-bit
//!   dot matrix
//! - **Protocol implementation**: ESC/POS command builders and the 24-dot
//!   double-density bit-image encoder
//! - **Transport**: async TCP with bounded connect/send timeouts and an
//!   outer job deadline
//! - **Printer configurations**: per-model calibration presets
//!
//! ## Quick Start
//!
//! ```no_run
//! use termica::{
//!     PrinterConfig,
//!     protocol::bit_image,
//!     render::raster,
//!     transport::{self, TransportOptions},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), termica::TermicaError> {
//!     // Decode and rasterize the source image
//!     let bytes = std::fs::read("receipt.png")?;
//!     let config = PrinterConfig::GENERIC_80MM;
//!     let matrix = raster::rasterize_bytes(&bytes, &config)?;
//!
//!     // Encode the full command frame (init, bands, cut)
//!     let frame = bit_image::encode(&matrix)?;
//!
//!     // Ship it to the printer
//!     transport::print("192.168.1.240:9100", &frame, &TransportOptions::default()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders and bit-image encoding |
//! | [`render`] | Image rasterization into a monochrome dot matrix |
//! | [`transport`] | TCP communication with timeout bounds |
//! | [`printer`] | Printer model configurations |
//! | [`error`] | Error types |
//!
//! ## Data Flow
//!
//! Data flows strictly one way, with no feedback loop:
//!
//! ```text
//! image bytes ──► DotMatrix ──► command frame ──► TCP socket
//!   (decode)     (rasterize)     (encode)           (send)
//! ```
//!
//! ## Supported Printers
//!
//! Any printer implementing the ESC `*` 24-dot double-density bit-image
//! mode and GS V partial cut. The calibration width is model-dependent
//! (570 dots for common 80mm models, 1000 for Beiyang) and exposed as a
//! tunable on [`PrinterConfig`].

pub mod error;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod transport;

// Re-exports for convenience
pub use error::TermicaError;
pub use printer::PrinterConfig;
pub use render::matrix::DotMatrix;
pub use transport::{TcpTransport, TransportOptions};
