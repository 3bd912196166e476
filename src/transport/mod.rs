//! # Printer Transport Layer
//!
//! This module provides communication backends for sending encoded frames
//! to printers.
//!
//! ## Available Transports
//!
//! - [`tcp`]: Raw TCP ("JetDirect" style, port 9100) for network printers
//!
//! ## Future Transports
//!
//! - USB serial
//! - Bluetooth RFCOMM

pub mod tcp;

pub use tcp::{TcpTransport, TransportOptions, print};
