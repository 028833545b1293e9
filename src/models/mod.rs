/// Packed bit grid
pub mod matrix;
/// Encoded QR code and its parameters
pub mod qr_code;
/// Module grid with quiet zone
pub mod symbol;

pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, QRCode, Version};
pub use symbol::Symbol;
