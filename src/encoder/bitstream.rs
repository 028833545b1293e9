/// Append-only bit buffer used to build the QR data stream
use crate::error::{QrError, QrResult};

/// Ordered, growable sequence of bits stored most-significant-bit first.
///
/// Bits can only be appended; any bit can be read back by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    num_bits: usize,
    bits: Vec<u8>,
}

impl BitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `num_bits` without reallocating
    pub fn with_capacity(num_bits: usize) -> Self {
        Self {
            num_bits: 0,
            bits: Vec::with_capacity(num_bits.div_ceil(8)),
        }
    }

    /// Create a buffer holding exactly `values`
    pub fn from_bools(values: &[bool]) -> Self {
        let mut buffer = Self::with_capacity(values.len());
        buffer.append_bools(values);
        buffer
    }

    /// Number of bits written
    pub fn len(&self) -> usize {
        self.num_bits
    }

    /// True if no bits have been written
    pub fn is_empty(&self) -> bool {
        self.num_bits == 0
    }

    fn push(&mut self, value: bool) {
        let offset = self.num_bits % 8;
        if offset == 0 {
            // Vec growth doubles its capacity, keeping appends amortized O(1)
            self.bits.push(0);
        }
        if value {
            let last = self.bits.len() - 1;
            self.bits[last] |= 0x80 >> offset;
        }
        self.num_bits += 1;
    }

    /// Append the `n` least significant bits of `value`, most significant first
    pub fn append_bits(&mut self, value: u32, n: usize) -> QrResult<()> {
        if n > 32 {
            return Err(QrError::BitWidthExceeded {
                requested: n,
                width: 32,
            });
        }
        for i in (0..n).rev() {
            self.push((value >> i) & 1 == 1);
        }
        Ok(())
    }

    /// Append the `n` least significant bits of a byte, most significant first
    pub fn append_byte_bits(&mut self, value: u8, n: usize) -> QrResult<()> {
        if n > 8 {
            return Err(QrError::BitWidthExceeded {
                requested: n,
                width: 8,
            });
        }
        self.append_bits(u32::from(value), n)
    }

    /// Append whole bytes, 8 bits each
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            for i in (0..8).rev() {
                self.push((byte >> i) & 1 == 1);
            }
        }
    }

    /// Append individual bits in order
    pub fn append_bools(&mut self, values: &[bool]) {
        for &value in values {
            self.push(value);
        }
    }

    /// Append every bit of `other` in order
    pub fn append_buffer(&mut self, other: &BitBuffer) {
        for value in other.iter() {
            self.push(value);
        }
    }

    /// Append `n` copies of `value`
    pub fn append_repeated(&mut self, n: usize, value: bool) {
        for _ in 0..n {
            self.push(value);
        }
    }

    /// Read bit `index`
    pub fn bit_at(&self, index: usize) -> QrResult<bool> {
        if index >= self.num_bits {
            return Err(QrError::BitIndexOutOfRange {
                index,
                len: self.num_bits,
            });
        }
        Ok(self.bit_unchecked(index))
    }

    fn bit_unchecked(&self, index: usize) -> bool {
        self.bits[index / 8] & (0x80 >> (index % 8)) != 0
    }

    /// Read up to 8 bits starting at `index` as a byte, first bit most significant.
    ///
    /// Near the end of the buffer fewer bits are available; they are returned
    /// right-aligned.
    pub fn byte_at(&self, index: usize) -> QrResult<u8> {
        if index >= self.num_bits {
            return Err(QrError::BitIndexOutOfRange {
                index,
                len: self.num_bits,
            });
        }
        let end = (index + 8).min(self.num_bits);
        let mut result = 0u8;
        for i in index..end {
            result = (result << 1) | self.bit_unchecked(i) as u8;
        }
        Ok(result)
    }

    /// Copy bits `[start, end)` into a new buffer
    pub fn substring(&self, start: usize, end: usize) -> QrResult<BitBuffer> {
        if start > end || end > self.num_bits {
            return Err(QrError::InvalidBitRange {
                start,
                end,
                len: self.num_bits,
            });
        }
        let mut result = BitBuffer::with_capacity(end - start);
        for i in start..end {
            result.push(self.bit_unchecked(i));
        }
        Ok(result)
    }

    /// Iterate over all bits in order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.num_bits).map(move |i| self.bit_unchecked(i))
    }

    /// Copy out the bits as booleans
    pub fn to_bools(&self) -> Vec<bool> {
        self.iter().collect()
    }

    /// Packed bytes; a trailing partial byte is zero-padded on the right
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }
}

impl std::fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for value in self.iter() {
            f.write_str(if value { "1" } else { "0" })?;
        }
        Ok(())
    }
}
