//! QR code data modes and the encoding profiles that parameterize them
//!
//! - Numeric: digits 0-9, three digits per 10 bits
//! - Alphanumeric: 45-character set, two characters per 11 bits
//! - Byte: arbitrary 8-bit data
//!
//! The mode indicator and the width of the character count field depend on
//! the version range, captured by [`EncodingProfile`].

/// Alphanumeric mode payloads
pub mod alphanumeric;
/// Byte mode payloads
pub mod byte;
/// Numeric mode payloads
pub mod numeric;

use crate::encoder::bitstream::BitBuffer;
use crate::error::{QrError, QrResult};

use alphanumeric::AlphanumericEncoder;
use byte::ByteEncoder;
use numeric::NumericEncoder;

/// Data encoding mode, ordered by how many byte values each can represent.
///
/// Any byte codeable in a lower mode is also codeable in every higher mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// No data classified yet
    None,
    /// Digits 0-9
    Numeric,
    /// Digits, A-Z, space and `$%*+-./:`
    Alphanumeric,
    /// Any byte
    Byte,
}

impl Mode {
    /// Lowest mode able to represent `byte`
    pub fn of_byte(byte: u8) -> Mode {
        if byte.is_ascii_digit() {
            Mode::Numeric
        } else if alphanumeric::alphanumeric_value(byte).is_some() {
            Mode::Alphanumeric
        } else {
            Mode::Byte
        }
    }

    /// Payload bits for `n` characters, excluding indicator and count field
    pub fn payload_bits(self, n: usize) -> usize {
        match self {
            Mode::None => 0,
            Mode::Numeric => NumericEncoder::payload_bits(n),
            Mode::Alphanumeric => AlphanumericEncoder::payload_bits(n),
            Mode::Byte => ByteEncoder::payload_bits(n),
        }
    }
}

/// Version ranges that share mode indicators and count field widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncoderType {
    /// Versions 1-9
    Type1To9,
    /// Versions 10-26
    Type10To26,
    /// Versions 27-40
    Type27To40,
}

/// Fixed mode indicators and character count widths for one version range
#[derive(Debug, PartialEq, Eq)]
pub struct EncodingProfile {
    encoder_type: EncoderType,
    min_version: u8,
    max_version: u8,
    numeric_char_count_bits: usize,
    alphanumeric_char_count_bits: usize,
    byte_char_count_bits: usize,
}

/// Mode indicators are identical across profiles
const NUMERIC_MODE_INDICATOR: u32 = 0b0001;
const ALPHANUMERIC_MODE_INDICATOR: u32 = 0b0010;
const BYTE_MODE_INDICATOR: u32 = 0b0100;
const MODE_INDICATOR_BITS: usize = 4;

/// The three profiles, in increasing version order
pub static PROFILES: [EncodingProfile; 3] = [
    EncodingProfile {
        encoder_type: EncoderType::Type1To9,
        min_version: 1,
        max_version: 9,
        numeric_char_count_bits: 10,
        alphanumeric_char_count_bits: 9,
        byte_char_count_bits: 8,
    },
    EncodingProfile {
        encoder_type: EncoderType::Type10To26,
        min_version: 10,
        max_version: 26,
        numeric_char_count_bits: 12,
        alphanumeric_char_count_bits: 11,
        byte_char_count_bits: 16,
    },
    EncodingProfile {
        encoder_type: EncoderType::Type27To40,
        min_version: 27,
        max_version: 40,
        numeric_char_count_bits: 14,
        alphanumeric_char_count_bits: 13,
        byte_char_count_bits: 16,
    },
];

impl EncodingProfile {
    /// Profile covering `version`; versions above 40 map to the last profile
    pub fn for_version(version: u8) -> &'static EncodingProfile {
        match version {
            0..=9 => &PROFILES[0],
            10..=26 => &PROFILES[1],
            _ => &PROFILES[2],
        }
    }

    /// Which version range this profile covers
    pub fn encoder_type(&self) -> EncoderType {
        self.encoder_type
    }

    /// Lowest version using this profile
    pub fn min_version(&self) -> u8 {
        self.min_version
    }

    /// Highest version using this profile
    pub fn max_version(&self) -> u8 {
        self.max_version
    }

    /// 4-bit mode indicator, `None` for modes without one
    pub fn mode_indicator(&self, mode: Mode) -> Option<u32> {
        match mode {
            Mode::None => None,
            Mode::Numeric => Some(NUMERIC_MODE_INDICATOR),
            Mode::Alphanumeric => Some(ALPHANUMERIC_MODE_INDICATOR),
            Mode::Byte => Some(BYTE_MODE_INDICATOR),
        }
    }

    /// Width of the character count field for `mode`
    pub fn char_count_bits(&self, mode: Mode) -> usize {
        match mode {
            Mode::None => 0,
            Mode::Numeric => self.numeric_char_count_bits,
            Mode::Alphanumeric => self.alphanumeric_char_count_bits,
            Mode::Byte => self.byte_char_count_bits,
        }
    }

    fn check_length(&self, mode: Mode, n: usize) -> QrResult<(u32, usize)> {
        let indicator = self
            .mode_indicator(mode)
            .ok_or(QrError::UnsupportedMode(mode))?;
        let bits = self.char_count_bits(mode);
        let max_length = (1usize << bits) - 1;
        if n > max_length {
            return Err(QrError::LengthFieldOverflow {
                mode,
                count: n,
                bits,
            });
        }
        Ok((indicator, bits))
    }

    /// Append a complete segment: indicator, character count, payload
    pub fn encode_segment(&self, mode: Mode, data: &[u8], buffer: &mut BitBuffer) -> QrResult<()> {
        let (indicator, count_bits) = self.check_length(mode, data.len())?;
        buffer.append_bits(indicator, MODE_INDICATOR_BITS)?;
        buffer.append_bits(data.len() as u32, count_bits)?;
        match mode {
            Mode::Numeric => NumericEncoder::encode(data, buffer),
            Mode::Alphanumeric => AlphanumericEncoder::encode(data, buffer),
            Mode::Byte => ByteEncoder::encode(data, buffer),
            Mode::None => Err(QrError::UnsupportedMode(mode)),
        }
    }
}

/// Cost model consulted by the segment optimizer
pub trait EncodingCost {
    /// Encoded bit length of `n` characters in `mode`, headers included
    fn cost(&self, mode: Mode, n: usize) -> QrResult<usize>;
}

impl EncodingCost for EncodingProfile {
    fn cost(&self, mode: Mode, n: usize) -> QrResult<usize> {
        let (_, count_bits) = self.check_length(mode, n)?;
        Ok(MODE_INDICATOR_BITS + count_bits + mode.payload_bits(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(b'0', Mode::Numeric; "digit zero")]
    #[test_case(b'9', Mode::Numeric; "digit nine")]
    #[test_case(b'A', Mode::Alphanumeric; "upper a")]
    #[test_case(b' ', Mode::Alphanumeric; "space")]
    #[test_case(b':', Mode::Alphanumeric; "colon")]
    #[test_case(b'a', Mode::Byte; "lower a")]
    #[test_case(b',', Mode::Byte; "comma")]
    #[test_case(0xFF, Mode::Byte; "high byte")]
    fn test_of_byte(byte: u8, expected: Mode) {
        assert_eq!(Mode::of_byte(byte), expected);
    }

    #[test]
    fn test_mode_order() {
        assert!(Mode::None < Mode::Numeric);
        assert!(Mode::Numeric < Mode::Alphanumeric);
        assert!(Mode::Alphanumeric < Mode::Byte);
    }

    #[test_case(1, EncoderType::Type1To9)]
    #[test_case(9, EncoderType::Type1To9)]
    #[test_case(10, EncoderType::Type10To26)]
    #[test_case(26, EncoderType::Type10To26)]
    #[test_case(27, EncoderType::Type27To40)]
    #[test_case(40, EncoderType::Type27To40)]
    fn test_profile_for_version(version: u8, expected: EncoderType) {
        let profile = EncodingProfile::for_version(version);
        assert_eq!(profile.encoder_type(), expected);
        assert!((profile.min_version()..=profile.max_version()).contains(&version));
    }

    #[test_case(Mode::Numeric, 1, 4 + 10 + 4)]
    #[test_case(Mode::Numeric, 2, 4 + 10 + 7)]
    #[test_case(Mode::Numeric, 3, 4 + 10 + 10)]
    #[test_case(Mode::Numeric, 10, 4 + 10 + 34)]
    #[test_case(Mode::Alphanumeric, 11, 4 + 9 + 61)]
    #[test_case(Mode::Byte, 17, 4 + 8 + 136)]
    fn test_cost_type1(mode: Mode, n: usize, expected: usize) {
        assert_eq!(PROFILES[0].cost(mode, n), Ok(expected));
    }

    #[test]
    fn test_cost_length_field_overflow() {
        assert_eq!(PROFILES[0].cost(Mode::Byte, 255), Ok(4 + 8 + 255 * 8));
        assert_eq!(
            PROFILES[0].cost(Mode::Byte, 256),
            Err(QrError::LengthFieldOverflow {
                mode: Mode::Byte,
                count: 256,
                bits: 8
            })
        );
        assert!(PROFILES[1].cost(Mode::Byte, 256).is_ok());
    }

    #[test]
    fn test_cost_unsupported_mode() {
        assert_eq!(
            PROFILES[2].cost(Mode::None, 1),
            Err(QrError::UnsupportedMode(Mode::None))
        );
    }

    #[test]
    fn test_encode_segment_header() {
        let mut buffer = BitBuffer::new();
        PROFILES[0]
            .encode_segment(Mode::Alphanumeric, b"HELLO WORLD", &mut buffer)
            .unwrap();
        let bits = buffer.to_string();
        assert!(bits.starts_with("0010000001011"));
        assert_eq!(buffer.len(), PROFILES[0].cost(Mode::Alphanumeric, 11).unwrap());
    }
}
