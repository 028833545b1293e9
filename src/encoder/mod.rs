/// Assembler (terminator, padding, block split, interleaving)
pub mod assembler;
/// BCH codes for format and version information
pub mod bch;
/// Append-only bit buffer
pub mod bitstream;
/// Matrix builder and mask selection
pub mod builder;
mod config;
/// Segmentation and mode encoding of raw content
pub mod data;
/// Format information (level and mask)
pub mod format;
/// Finder, alignment, timing, format and version patterns
pub mod function_patterns;
/// Encoding modes and version-range profiles
pub mod modes;
/// Mask penalty rules
pub mod penalty;
/// Zig-zag data placement
pub mod placement;
/// Top-level encoder
pub mod qr_encoder;
/// Reed-Solomon error correction over GF(256)
pub mod reed_solomon;
/// Segment classification and merging
pub mod segment;
/// Block and alignment tables
pub mod tables;
/// Version/capacity catalog
pub mod version;

pub use qr_encoder::{Prepared, QrEncoder};
