//! Error types returned by the encoding pipeline

use crate::encoder::modes::Mode;
use crate::models::ECLevel;

/// Result alias used across the crate
pub type QrResult<T> = Result<T, QrError>;

/// Everything that can abort a single encoding call.
///
/// None of these are transient: the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QrError {
    /// The content was empty
    #[error("no data to encode")]
    EmptyContent,

    /// No version at the requested level can hold the encoded content
    #[error("content too long to encode: {bits} bits do not fit any version at level {level:?}")]
    ContentTooLong {
        /// Encoded length in bits
        bits: usize,
        /// Requested error correction level
        level: ECLevel,
    },

    /// The mode has no indicator in the active encoding profile
    #[error("mode {0:?} is not supported by the active encoding profile")]
    UnsupportedMode(Mode),

    /// The symbol count does not fit the character count field
    #[error("{count} characters in {mode:?} mode exceed the {bits}-bit length field")]
    LengthFieldOverflow {
        /// Segment mode
        mode: Mode,
        /// Number of characters in the segment
        count: usize,
        /// Width of the character count field
        bits: usize,
    },

    /// Forced version outside 1-40 or missing from the catalog
    #[error("invalid version {version} at level {level:?} (expected 1-40 inclusive)")]
    InvalidVersionOrLevel {
        /// Requested version number
        version: u8,
        /// Requested error correction level
        level: ECLevel,
    },

    /// Forced version is too small for the content
    #[error(
        "content too large for fixed version {version}: encoded length is {required} bits, maximum is {capacity} bits"
    )]
    CapacityExceeded {
        /// Forced version number
        version: u8,
        /// Encoded length in bits
        required: usize,
        /// Data capacity of the version in bits
        capacity: usize,
    },

    /// Table or placement defect; never caused by user input
    #[error("internal consistency failure: {0}")]
    InternalConsistency(String),

    /// Read past the end of a bit buffer
    #[error("bit index {index} out of range for buffer of {len} bits")]
    BitIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Buffer length in bits
        len: usize,
    },

    /// More bits requested than the value type holds
    #[error("cannot append {requested} bits from a {width}-bit value")]
    BitWidthExceeded {
        /// Requested bit count
        requested: usize,
        /// Natural width of the value
        width: usize,
    },

    /// Substring bounds are reversed or past the end
    #[error("invalid bit range {start}..{end} for buffer of {len} bits")]
    InvalidBitRange {
        /// Range start
        start: usize,
        /// Range end (exclusive)
        end: usize,
        /// Buffer length in bits
        len: usize,
    },
}

impl QrError {
    /// True for errors that indicate a defect in the encoder rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, QrError::InternalConsistency(_))
    }
}
