/// Turns an encoded bit stream into the final codeword sequence:
/// terminator, padding, block split, error correction, interleaving
use crate::encoder::bitstream::BitBuffer;
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::version::VersionDescriptor;
use crate::error::{QrError, QrResult};

/// Pad codewords alternate starting with 0xEC
const PAD_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

/// Data codewords of one block with their error correction codewords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodewordBlock {
    /// Data codewords in stream order
    pub data: Vec<u8>,
    /// Error correction codewords for `data`
    pub ec: Vec<u8>,
}

/// Append up to four zero terminator bits, never past the data capacity
pub fn terminate(buffer: &mut BitBuffer, version: &VersionDescriptor) {
    let n = version.terminator_bits_required(buffer.len());
    buffer.append_repeated(n, false);
}

/// Fill to the exact data capacity: zero bits to a codeword boundary, then pad codewords
pub fn pad(buffer: &mut BitBuffer, version: &VersionDescriptor) -> QrResult<()> {
    let capacity = version.data_bit_capacity();
    if buffer.len() > capacity {
        return Err(QrError::InternalConsistency(format!(
            "{} data bits exceed version {} capacity of {}",
            buffer.len(),
            version.version_number(),
            capacity
        )));
    }
    if buffer.len() == capacity {
        return Ok(());
    }

    buffer.append_repeated((8 - buffer.len() % 8) % 8, false);

    let mut pad = PAD_CODEWORDS.iter().cycle();
    while capacity - buffer.len() >= 8 {
        if let Some(&codeword) = pad.next() {
            buffer.append_bytes(&[codeword]);
        }
    }

    if buffer.len() != capacity {
        return Err(QrError::InternalConsistency(format!(
            "padded length {} does not match capacity {}",
            buffer.len(),
            capacity
        )));
    }
    Ok(())
}

/// Cut the padded stream into blocks and compute each block's error correction
pub fn split_and_correct(
    buffer: &BitBuffer,
    version: &VersionDescriptor,
) -> QrResult<Vec<CodewordBlock>> {
    let mut blocks = Vec::with_capacity(version.num_blocks());
    let mut start = 0;

    for group in version.block_groups() {
        let rs = ReedSolomonEncoder::new(group.ec_codewords());
        for _ in 0..group.count {
            let end = start + group.data_codewords * 8;
            let data = buffer.substring(start, end)?;
            let ec = rs.ecc_codewords(&data);
            blocks.push(CodewordBlock {
                data: data.as_bytes().to_vec(),
                ec,
            });
            start = end;
        }
    }

    if start != buffer.len() {
        return Err(QrError::InternalConsistency(format!(
            "blocks consumed {} of {} data bits",
            start,
            buffer.len()
        )));
    }
    Ok(blocks)
}

fn interleave_column<F>(blocks: &[CodewordBlock], out: &mut BitBuffer, region: F)
where
    F: Fn(&CodewordBlock) -> &[u8],
{
    let longest = blocks.iter().map(|b| region(b).len()).max().unwrap_or(0);
    for i in 0..longest {
        for block in blocks {
            if let Some(&codeword) = region(block).get(i) {
                out.append_bytes(&[codeword]);
            }
        }
    }
}

/// Interleave data then error correction codewords across blocks and append remainder bits
pub fn interleave(blocks: &[CodewordBlock], version: &VersionDescriptor) -> QrResult<BitBuffer> {
    let expected = version.total_codewords() * 8 + version.remainder_bits();
    let mut result = BitBuffer::with_capacity(expected);

    interleave_column(blocks, &mut result, |b| &b.data);
    interleave_column(blocks, &mut result, |b| &b.ec);
    result.append_repeated(version.remainder_bits(), false);

    if result.len() != expected {
        return Err(QrError::InternalConsistency(format!(
            "interleaved length {} does not match expected {}",
            result.len(),
            expected
        )));
    }
    Ok(result)
}

/// Terminate, pad, correct and interleave `encoded` for `version`
pub fn assemble(encoded: &BitBuffer, version: &VersionDescriptor) -> QrResult<BitBuffer> {
    let mut buffer = BitBuffer::with_capacity(version.data_bit_capacity());
    buffer.append_buffer(encoded);
    terminate(&mut buffer, version);
    pad(&mut buffer, version)?;
    let blocks = split_and_correct(&buffer, version)?;
    interleave(&blocks, version)
}
