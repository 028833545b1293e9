/// Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bitstream::BitBuffer;
use crate::error::QrResult;

/// Writes each byte as 8 bits
pub struct ByteEncoder;

impl ByteEncoder {
    /// Payload length for `n` bytes
    pub fn payload_bits(n: usize) -> usize {
        8 * n
    }

    /// Append the bytes unchanged
    pub fn encode(data: &[u8], buffer: &mut BitBuffer) -> QrResult<()> {
        buffer.append_bytes(data);
        Ok(())
    }
}
