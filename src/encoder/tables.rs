use crate::models::ECLevel;

// Block tables from ISO/IEC 18004 (Model 2).
// Index: [ec_level][version]
pub(crate) const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

pub(crate) const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Alignment pattern centre coordinates per version (rows and columns share them)
pub static ALIGNMENT_PATTERN_CENTERS: [&[usize]; 41] = [
    &[],
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

/// Alignment centres for `version`; empty for version 1 or out-of-range input
pub fn alignment_pattern_centers(version: u8) -> &'static [usize] {
    ALIGNMENT_PATTERN_CENTERS
        .get(version as usize)
        .copied()
        .unwrap_or(&[])
}

/// Error correction codewords per block and number of blocks
pub(crate) const fn ec_block_params(version: u8, ec_level: ECLevel) -> (usize, usize) {
    let idx = ec_level.index();
    let ecc = ECC_CODEWORDS_PER_BLOCK[idx][version as usize];
    let blocks = NUM_ERROR_CORRECTION_BLOCKS[idx][version as usize];
    (ecc as usize, blocks as usize)
}

/// Modules available for data and error correction codewords, remainder bits included
pub const fn raw_data_modules(version: u8) -> usize {
    let v = version as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_table_matches_spacing_rule() {
        for version in 2..=40u8 {
            let size = 4 * version as usize + 17;
            let count = version as usize / 7 + 2;
            let step = (version as usize * 8 + count * 3 + 5) / (count * 4 - 4) * 2;
            let mut expected: Vec<usize> = (0..count - 1).map(|i| size - 7 - i * step).collect();
            expected.push(6);
            expected.reverse();
            assert_eq!(
                alignment_pattern_centers(version),
                expected.as_slice(),
                "version {}",
                version
            );
        }
        assert!(alignment_pattern_centers(1).is_empty());
        assert!(alignment_pattern_centers(41).is_empty());
    }

    #[test]
    fn test_raw_data_modules() {
        assert_eq!(raw_data_modules(1), 208);
        assert_eq!(raw_data_modules(2), 359);
        assert_eq!(raw_data_modules(7), 1568);
        assert_eq!(raw_data_modules(40), 29648);
    }

    #[test]
    fn test_ec_block_params() {
        assert_eq!(ec_block_params(1, ECLevel::M), (10, 1));
        assert_eq!(ec_block_params(5, ECLevel::Q), (18, 4));
        assert_eq!(ec_block_params(40, ECLevel::H), (30, 81));
    }
}
