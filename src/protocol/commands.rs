//! # ESC/POS Basic Commands
//!
//! This module implements the control commands used around bit-image
//! printing: reset, line spacing, and paper cut.
//!
//! ## Escape Sequence Structure
//!
//! Commands are byte sequences introduced by a prefix byte:
//! - Two bytes: `ESC @`
//! - Three bytes with parameter: `ESC 3 n`, `GS V m`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Prefixes extended commands such as paper cut (`GS V`).
/// Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances paper by the current
/// line spacing amount. Between bit-image bands this is what moves the
/// head down by the configured 24 dots.
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Sent at the start of
/// each print job so leftover state from a previous job (line spacing,
/// print modes) cannot corrupt the frame.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Example
///
/// ```
/// use termica::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// LINE SPACING COMMANDS
// ============================================================================

/// # Set Line Spacing (ESC 3 n)
///
/// Sets the vertical motion per line feed to `n` dots.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC 3 n  |
/// | Hex     | 1B 33 n  |
/// | Decimal | 27 51 n  |
///
/// ## Usage in Bit-Image Printing
///
/// Bit-image bands are 24 dots tall, so spacing is set to 24 before the
/// bands (each trailing LF then advances exactly one band height, leaving
/// no white seam) and restored to the 30-dot default afterwards.
///
/// ## Example
///
/// ```
/// use termica::protocol::commands;
///
/// assert_eq!(commands::set_line_spacing(24), vec![0x1B, 0x33, 24]);
/// assert_eq!(commands::set_line_spacing(30), vec![0x1B, 0x33, 30]);
/// ```
#[inline]
pub fn set_line_spacing(dots: u8) -> Vec<u8> {
    vec![ESC, b'3', dots]
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// # Partial Cut (GS V 1)
///
/// Cuts the paper leaving a small uncut "hinge" so the receipt hangs until
/// torn off. Emitted as the final bytes of every frame.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V 1   |
/// | Hex     | 1D 56 01 |
/// | Decimal | 29 86 1  |
#[inline]
pub fn cut_partial() -> Vec<u8> {
    vec![GS, b'V', 1]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ESC/POS uses little-endian encoding for all multi-byte integers.
///
/// ## Example
///
/// ```
/// use termica::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(570), [0x3A, 0x02]); // 570 = 0x023A
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
