//! rust_qrgen - QR code encoder
//!
//! Turns text or raw bytes into a standards-compliant QR Code (Model 2,
//! versions 1-40) in pure Rust:
//! - Mode segmentation (numeric, alphanumeric, byte) with greedy merging
//! - Reed-Solomon error correction over GF(256)
//! - Automatic or forced version selection
//! - Mask selection by penalty score, optionally in parallel
//!
//! # Example
//! ```
//! use rust_qrgen::{ECLevel, encode};
//!
//! let qr = encode(b"HELLO WORLD", ECLevel::M).unwrap();
//! let grid = qr.bitmap();
//! assert_eq!(grid.len(), qr.size());
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding pipeline (segmentation, error correction, matrix building)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (QRCode, Symbol, BitMatrix, etc.)
pub mod models;
/// Rendering helpers (image, text)
pub mod utils;

pub use encoder::QrEncoder;
pub use error::{QrError, QrResult};
pub use models::{BitMatrix, ECLevel, MaskPattern, QRCode, Symbol, Version};

/// Encode `content` at `level`, choosing the smallest version that fits
///
/// Uses the default quiet zone and mask parallelism; see [`QrEncoder`] for
/// other settings.
pub fn encode(content: &[u8], level: ECLevel) -> QrResult<QRCode> {
    QrEncoder::new(level).encode(content)
}
