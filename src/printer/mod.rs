//! # Printer Module
//!
//! This module provides printer-specific configurations and utilities.
//!
//! ## Modules
//!
//! - [`config`]: Printer model calibration and binarization settings

pub mod config;

pub use config::PrinterConfig;
