/// Format information written next to the finder patterns
use crate::encoder::bch::BchEncoder;
use crate::models::{ECLevel, MaskPattern};

/// Error correction level and mask id of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Error correction level
    pub ec_level: ECLevel,
    /// Mask applied to the data modules
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Pair a level with a mask
    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// The 15 masked bits, bit 14 first in reading order
    pub fn bits(&self) -> u16 {
        let data = (self.ec_level.format_bits() << 3) | self.mask_pattern.id();
        BchEncoder::encode_format(data)
    }

    /// Inverse of [`FormatInfo::bits`] for an undamaged codeword
    pub fn from_bits(bits: u16) -> Option<Self> {
        let data = ((bits ^ 0x5412) >> 10) as u8;
        let info = Self::new(
            ECLevel::from_format_bits(data >> 3),
            MaskPattern::from_bits(data & 0x07),
        );
        (info.bits() == bits).then_some(info)
    }
}
