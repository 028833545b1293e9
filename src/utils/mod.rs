//! Output helpers for finished QR codes
//!
//! These only read the module grid of a [`crate::QRCode`]; nothing here
//! affects encoding.

/// PNG and terminal rendering
pub mod render;
