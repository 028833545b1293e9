/// Fixed structural patterns stamped before data placement
use crate::encoder::bch::BchEncoder;
use crate::encoder::format::FormatInfo;
use crate::encoder::tables::alignment_pattern_centers;
use crate::models::Symbol;

/// Finder patterns with their light separators at the three non-bottom-right corners
pub fn add_finder_patterns(symbol: &mut Symbol) {
    let size = symbol.symbol_size();
    for (cx, cy) in [(3, 3), (size - 4, 3), (3, size - 4)] {
        add_finder_pattern(symbol, cx, cy);
    }
}

fn add_finder_pattern(symbol: &mut Symbol, cx: usize, cy: usize) {
    let size = symbol.symbol_size() as isize;
    for dy in -4isize..=4 {
        for dx in -4isize..=4 {
            let (x, y) = (cx as isize + dx, cy as isize + dy);
            if !(0..size).contains(&x) || !(0..size).contains(&y) {
                continue;
            }
            let dist = dx.abs().max(dy.abs());
            symbol.set(x as usize, y as usize, dist != 2 && dist != 4);
        }
    }
}

/// 5x5 alignment patterns at every centre pair not already covered by a finder
pub fn add_alignment_patterns(symbol: &mut Symbol, version: u8) {
    let centers = alignment_pattern_centers(version);
    for &cy in centers {
        for &cx in centers {
            if symbol.is_used(cx, cy) {
                continue;
            }
            for dy in -2isize..=2 {
                for dx in -2isize..=2 {
                    let dist = dx.abs().max(dy.abs());
                    let x = (cx as isize + dx) as usize;
                    let y = (cy as isize + dy) as usize;
                    symbol.set(x, y, dist != 1);
                }
            }
        }
    }
}

/// Alternating row 6 and column 6 between the finder patterns
pub fn add_timing_patterns(symbol: &mut Symbol) {
    let size = symbol.symbol_size();
    for i in 8..size - 8 {
        let dark = i % 2 == 0;
        symbol.set(i, 6, dark);
        symbol.set(6, i, dark);
    }
}

/// Both copies of the format information plus the always-dark module
pub fn add_format_info(symbol: &mut Symbol, info: FormatInfo) {
    let size = symbol.symbol_size();
    let bits = info.bits();
    let bit = |i: usize| (bits >> i) & 1 != 0;

    // Around the top-left finder
    for i in 0..=5 {
        symbol.set(8, i, bit(i));
    }
    symbol.set(8, 7, bit(6));
    symbol.set(8, 8, bit(7));
    symbol.set(7, 8, bit(8));
    for i in 9..15 {
        symbol.set(14 - i, 8, bit(i));
    }

    // Split between the top-right and bottom-left finders
    for i in 0..8 {
        symbol.set(size - 1 - i, 8, bit(i));
    }
    for i in 8..15 {
        symbol.set(8, size - 15 + i, bit(i));
    }

    symbol.set(8, size - 8, true);
}

/// Version information blocks; only versions 7 and up carry them
pub fn add_version_info(symbol: &mut Symbol, version: u8) {
    if version < 7 {
        return;
    }
    let size = symbol.symbol_size();
    let bits = BchEncoder::encode_version(version);
    for i in 0..18 {
        let dark = (bits >> i) & 1 != 0;
        let a = size - 11 + i % 3;
        let b = i / 3;
        symbol.set(a, b, dark);
        symbol.set(b, a, dark);
    }
}
