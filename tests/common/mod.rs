//! Minimal reader for encoded symbols, used to round-trip the encoder output.
//!
//! Works on the clean module grid (no image processing): reads the format
//! information, unmasks, extracts codewords along the zig-zag path,
//! de-interleaves, verifies Reed-Solomon syndromes and parses segments.

#![allow(dead_code)]

use rust_qrgen::encoder::bch::BchEncoder;
use rust_qrgen::encoder::format::FormatInfo;
use rust_qrgen::encoder::modes::alphanumeric::ALPHANUMERIC_TABLE;
use rust_qrgen::encoder::modes::{EncodingProfile, Mode};
use rust_qrgen::encoder::reed_solomon::Gf256;
use rust_qrgen::encoder::tables::alignment_pattern_centers;
use rust_qrgen::encoder::version::{VersionDescriptor, lookup};
use rust_qrgen::{ECLevel, MaskPattern, QRCode, Symbol};

/// What the reader recovered from a symbol
#[derive(Debug)]
pub struct Decoded {
    pub version: u8,
    pub level: ECLevel,
    pub mask: MaskPattern,
    pub modes: Vec<Mode>,
    pub content: Vec<u8>,
}

/// true = function module (not data)
pub struct FunctionMask {
    mask: Vec<bool>,
    size: usize,
}

impl FunctionMask {
    pub fn new(version: u8) -> Self {
        let size = 17 + 4 * version as usize;
        let mut fm = Self {
            mask: vec![false; size * size],
            size,
        };

        // Finder patterns + separators
        fm.mark_area(0, 0, 8, 8);
        fm.mark_area(size - 8, 0, 8, 8);
        fm.mark_area(0, size - 8, 8, 8);

        // Timing patterns
        fm.mark_area(0, 6, size, 1);
        fm.mark_area(6, 0, 1, size);

        let centers = alignment_pattern_centers(version);
        for &cx in centers {
            for &cy in centers {
                let in_tl = cx <= 8 && cy <= 8;
                let in_tr = cx >= size - 9 && cy <= 8;
                let in_bl = cx <= 8 && cy >= size - 9;
                if in_tl || in_tr || in_bl {
                    continue;
                }
                fm.mark_area(cx - 2, cy - 2, 5, 5);
            }
        }

        // Format info, including the dark module
        fm.mark_area(8, 0, 1, 9);
        fm.mark_area(0, 8, 9, 1);
        fm.mark_area(size - 8, 8, 8, 1);
        fm.mark_area(8, size - 8, 1, 8);

        if version >= 7 {
            fm.mark_area(size - 11, 0, 3, 6);
            fm.mark_area(0, size - 11, 6, 3);
        }

        fm
    }

    fn mark_area(&mut self, x: usize, y: usize, w: usize, h: usize) {
        for yy in y..y + h {
            for xx in x..x + w {
                self.mask[yy * self.size + xx] = true;
            }
        }
    }

    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask[y * self.size + x]
    }

    pub fn num_data_modules(&self) -> usize {
        self.mask.iter().filter(|&&m| !m).count()
    }
}

fn read_format(symbol: &Symbol) -> FormatInfo {
    let size = symbol.symbol_size();
    let mut first = 0u16;
    let positions = (0..=5)
        .map(|i| (8, i))
        .chain([(8, 7), (8, 8), (7, 8)])
        .chain((9..15).map(|i| (14 - i, 8)));
    for (i, (x, y)) in positions.enumerate() {
        first |= (symbol.get(x, y) as u16) << i;
    }

    let mut second = 0u16;
    for i in 0..8 {
        second |= (symbol.get(size - 1 - i, 8) as u16) << i;
    }
    for i in 8..15 {
        second |= (symbol.get(8, size - 15 + i) as u16) << i;
    }

    assert_eq!(first, second, "format information copies differ");
    assert!(symbol.get(8, size - 8), "dark module missing");
    FormatInfo::from_bits(first).expect("format information is not a valid codeword")
}

fn check_version_info(symbol: &Symbol, version: u8) {
    if version < 7 {
        return;
    }
    let size = symbol.symbol_size();
    let expected = BchEncoder::encode_version(version);
    for i in 0..18 {
        let bit = (expected >> i) & 1 != 0;
        assert_eq!(symbol.get(size - 11 + i % 3, i / 3), bit, "version info bit {}", i);
        assert_eq!(symbol.get(i / 3, size - 11 + i % 3), bit, "version info bit {}", i);
    }
}

/// Unmasked data bits in placement order
pub fn extract_bits(symbol: &Symbol, func: &FunctionMask, mask: MaskPattern) -> Vec<bool> {
    let dimension = symbol.symbol_size();
    let mut bits = Vec::with_capacity(func.num_data_modules());
    let mut upward = true;
    let mut col = dimension as i32 - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }
        for i in 0..dimension {
            let row = if upward { dimension - 1 - i } else { i };
            for c in [col as usize, col as usize - 1] {
                if !func.is_function(c, row) {
                    bits.push(symbol.get(c, row) ^ mask.is_masked(row, c));
                }
            }
        }
        upward = !upward;
        col -= 2;
    }
    bits
}

fn to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
        .collect()
}

/// Split interleaved codewords into per-block (data, ec) pairs
pub fn deinterleave(codewords: &[u8], descriptor: &VersionDescriptor) -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut blocks: Vec<(Vec<u8>, Vec<u8>)> = Vec::new();
    let mut shapes = Vec::new();
    for group in descriptor.block_groups() {
        for _ in 0..group.count {
            shapes.push((group.data_codewords, group.ec_codewords()));
            blocks.push((Vec::new(), Vec::new()));
        }
    }

    let mut iter = codewords.iter().copied();
    let max_data = shapes.iter().map(|s| s.0).max().unwrap_or(0);
    for i in 0..max_data {
        for (b, shape) in shapes.iter().enumerate() {
            if i < shape.0 {
                blocks[b].0.push(iter.next().expect("ran out of data codewords"));
            }
        }
    }
    let max_ec = shapes.iter().map(|s| s.1).max().unwrap_or(0);
    for i in 0..max_ec {
        for (b, shape) in shapes.iter().enumerate() {
            if i < shape.1 {
                blocks[b].1.push(iter.next().expect("ran out of ec codewords"));
            }
        }
    }
    assert!(iter.next().is_none(), "unconsumed codewords");
    blocks
}

/// True when every syndrome of the block's codeword is zero
pub fn syndromes_are_zero(data: &[u8], ec: &[u8]) -> bool {
    (0..ec.len()).all(|i| {
        let root = Gf256::exp(i);
        data.iter()
            .chain(ec)
            .fold(0u8, |acc, &c| Gf256::mul(acc, root) ^ c)
            == 0
    })
}

struct BitReader<'a> {
    bits: &'a [bool],
    pos: usize,
}

impl<'a> BitReader<'a> {
    fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }

    fn read(&mut self, n: usize) -> u32 {
        assert!(n <= self.remaining(), "read past end of data");
        let mut v = 0u32;
        for _ in 0..n {
            v = (v << 1) | self.bits[self.pos] as u32;
            self.pos += 1;
        }
        v
    }
}

fn parse_segments(bits: &[bool], profile: &EncodingProfile) -> (Vec<Mode>, Vec<u8>) {
    let mut reader = BitReader { bits, pos: 0 };
    let mut modes = Vec::new();
    let mut content = Vec::new();

    while reader.remaining() >= 4 {
        let mode = match reader.read(4) {
            0 => break,
            0b0001 => Mode::Numeric,
            0b0010 => Mode::Alphanumeric,
            0b0100 => Mode::Byte,
            other => panic!("unexpected mode indicator {:04b}", other),
        };
        let count = reader.read(profile.char_count_bits(mode)) as usize;
        modes.push(mode);

        match mode {
            Mode::Numeric => {
                let mut left = count;
                while left > 0 {
                    let (digits, width) = match left {
                        1 => (1, 4),
                        2 => (2, 7),
                        _ => (3, 10),
                    };
                    let value = reader.read(width);
                    let text = format!("{:0width$}", value, width = digits);
                    content.extend_from_slice(text.as_bytes());
                    left -= digits;
                }
            }
            Mode::Alphanumeric => {
                let mut left = count;
                while left >= 2 {
                    let value = reader.read(11) as usize;
                    content.push(ALPHANUMERIC_TABLE[value / 45]);
                    content.push(ALPHANUMERIC_TABLE[value % 45]);
                    left -= 2;
                }
                if left == 1 {
                    content.push(ALPHANUMERIC_TABLE[reader.read(6) as usize]);
                }
            }
            Mode::Byte => {
                for _ in 0..count {
                    content.push(reader.read(8) as u8);
                }
            }
            Mode::None => unreachable!(),
        }
    }

    (modes, content)
}

/// Read a symbol back, asserting every structural invariant along the way
pub fn read_symbol(symbol: &Symbol) -> Decoded {
    let size = symbol.symbol_size();
    assert_eq!((size - 17) % 4, 0, "invalid symbol size {}", size);
    let version = ((size - 17) / 4) as u8;

    let format = read_format(symbol);
    check_version_info(symbol, version);

    let descriptor = lookup(version, format.ec_level).expect("version in range");
    let func = FunctionMask::new(version);
    assert_eq!(
        func.num_data_modules(),
        descriptor.total_codewords() * 8 + descriptor.remainder_bits()
    );

    let bits = extract_bits(symbol, &func, format.mask_pattern);
    let codewords = to_bytes(&bits[..descriptor.total_codewords() * 8]);
    assert!(
        bits[descriptor.total_codewords() * 8..].iter().all(|&b| !b),
        "remainder bits must be zero"
    );

    let mut data = Vec::with_capacity(descriptor.data_codewords());
    for (i, (block_data, block_ec)) in deinterleave(&codewords, descriptor).iter().enumerate() {
        assert!(syndromes_are_zero(block_data, block_ec), "block {} fails RS check", i);
        data.extend_from_slice(block_data);
    }

    let data_bits: Vec<bool> = data
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 != 0))
        .collect();
    let (modes, content) = parse_segments(&data_bits, descriptor.profile());

    Decoded {
        version,
        level: format.ec_level,
        mask: format.mask_pattern,
        modes,
        content,
    }
}

/// Convenience wrapper over [`read_symbol`]
pub fn read(qr: &QRCode) -> Decoded {
    read_symbol(&qr.symbol)
}
