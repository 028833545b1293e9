/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bitstream::BitBuffer;
use crate::error::{QrError, QrResult};

/// Packs decimal digits in groups of three
pub struct NumericEncoder;

impl NumericEncoder {
    /// Payload length for `n` digits
    pub fn payload_bits(n: usize) -> usize {
        let remainder = match n % 3 {
            0 => 0,
            1 => 4,
            _ => 7,
        };
        10 * (n / 3) + remainder
    }

    /// Append digit groups to the buffer
    pub fn encode(data: &[u8], buffer: &mut BitBuffer) -> QrResult<()> {
        for group in data.chunks(3) {
            let mut value: u32 = 0;
            for &digit in group {
                if !digit.is_ascii_digit() {
                    return Err(QrError::InternalConsistency(format!(
                        "byte 0x{:02X} is not encodable in numeric mode",
                        digit
                    )));
                }
                value = value * 10 + u32::from(digit - b'0');
            }
            let bits_needed = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            buffer.append_bits(value, bits_needed)?;
        }
        Ok(())
    }
}
