//! # Error Types
//!
//! This module defines error types used throughout the termica library.
//!
//! Each variant maps to one pipeline stage, so callers can tell input-data
//! problems (decode, encode) from network problems (timeout, I/O) without
//! inspecting messages.

use std::time::Duration;

use thiserror::Error;

/// Main error type for termica operations
#[derive(Debug, Error)]
pub enum TermicaError {
    /// Unreadable or unsupported source image (rasterize stage)
    #[error("Image decode error: {0}")]
    Decode(String),

    /// Zero-area or mis-sized dot matrix (encode stage)
    #[error("Invalid dot matrix: {0}")]
    InvalidMatrix(String),

    /// A transport operation exceeded its configured bound
    #[error("{stage} timed out after {bound:?}")]
    Timeout {
        /// Which operation hit the bound ("connect", "send", "print job")
        stage: &'static str,
        /// The bound that was exceeded
        bound: Duration,
    },

    /// Connection refused/reset or write failure (transport stage)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
