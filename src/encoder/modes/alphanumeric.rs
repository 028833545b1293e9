/// Alphanumeric mode encoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use crate::encoder::bitstream::BitBuffer;
use crate::error::{QrError, QrResult};

/// Characters in value order
pub const ALPHANUMERIC_TABLE: [u8; 45] = *b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Reverse lookup, -1 for bytes outside the set
static ALPHANUMERIC_VALUES: [i8; 256] = build_value_table();

const fn build_value_table() -> [i8; 256] {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < ALPHANUMERIC_TABLE.len() {
        table[ALPHANUMERIC_TABLE[i] as usize] = i as i8;
        i += 1;
    }
    table
}

/// Index of `byte` in the alphanumeric character set
pub fn alphanumeric_value(byte: u8) -> Option<u8> {
    let value = ALPHANUMERIC_VALUES[byte as usize];
    if value < 0 { None } else { Some(value as u8) }
}

/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Payload length for `n` characters
    pub fn payload_bits(n: usize) -> usize {
        11 * (n / 2) + 6 * (n % 2)
    }

    /// Append character pairs to the buffer
    pub fn encode(data: &[u8], buffer: &mut BitBuffer) -> QrResult<()> {
        for pair in data.chunks(2) {
            let mut value: u32 = 0;
            for &c in pair {
                let index = alphanumeric_value(c).ok_or_else(|| {
                    QrError::InternalConsistency(format!(
                        "byte 0x{:02X} is not encodable in alphanumeric mode",
                        c
                    ))
                })?;
                value = value * 45 + u32::from(index);
            }
            let bits_needed = if pair.len() == 2 { 11 } else { 6 };
            buffer.append_bits(value, bits_needed)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_encode() {
        // "A1" = (10 * 45 + 1) = 451 = 0b00111000011 (11 bits)
        let mut buffer = BitBuffer::new();
        AlphanumericEncoder::encode(b"A1", &mut buffer).unwrap();
        assert_eq!(buffer.to_string(), "00111000011");
    }

    #[test]
    fn test_alphanumeric_odd_length() {
        // "HE" = 17*45+14 = 779, "L" = 21
        let mut buffer = BitBuffer::new();
        AlphanumericEncoder::encode(b"HEL", &mut buffer).unwrap();
        assert_eq!(buffer.to_string(), "01100001011010101");
        assert_eq!(buffer.len(), AlphanumericEncoder::payload_bits(3));
    }

    #[test]
    fn test_value_table() {
        assert_eq!(alphanumeric_value(b'0'), Some(0));
        assert_eq!(alphanumeric_value(b'Z'), Some(35));
        assert_eq!(alphanumeric_value(b' '), Some(36));
        assert_eq!(alphanumeric_value(b':'), Some(44));
        assert_eq!(alphanumeric_value(b'a'), None);
        assert_eq!(alphanumeric_value(b'#'), None);
    }
}
