use super::Symbol;
use crate::encoder::segment::Segment;

/// QR code version (1-40, Model 2 only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest version
    pub const MIN: Version = Version(1);
    /// Largest version
    pub const MAX: Version = Version(40);

    /// Validate a version number
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number <= 40 {
            Some(Version(number))
        } else {
            None
        }
    }

    /// Get the version number
    pub const fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height), quiet zone excluded
    pub const fn size(&self) -> usize {
        4 * (self.0 as usize) + 17
    }
}

/// Error correction level, ordered low to high
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All levels, lowest first
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Two-bit code written into the format information (L=01, M=00, Q=11, H=10)
    pub const fn format_bits(self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Inverse of [`ECLevel::format_bits`]
    pub fn from_format_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b01 => ECLevel::L,
            0b00 => ECLevel::M,
            0b11 => ECLevel::Q,
            _ => ECLevel::H,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Mask pattern (0-7); `i` is the row and `j` the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight patterns in id order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its 3-bit id
    pub fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0x07) as usize]
    }

    /// Mask id (0-7)
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Check if module at row `i`, column `j` should be inverted
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// An encoded QR code
#[derive(Debug, Clone)]
pub struct QRCode {
    /// Raw content bytes that were encoded
    pub data: Vec<u8>,
    /// Optimized segments the content was split into
    pub segments: Vec<Segment>,
    /// QR code version
    pub version: Version,
    /// Error correction level
    pub error_correction: ECLevel,
    /// Mask pattern that scored lowest
    pub mask_pattern: MaskPattern,
    /// Penalty score of the chosen mask
    pub penalty: u32,
    /// Finished module grid
    pub symbol: Symbol,
}

impl QRCode {
    /// Module grid indexed `[row][col]` (true = dark), quiet zone included
    pub fn bitmap(&self) -> Vec<Vec<bool>> {
        self.symbol.bitmap()
    }

    /// Width/height of the module grid, quiet zone included
    pub fn size(&self) -> usize {
        self.symbol.size()
    }
}
