/// Mask penalty rules, evaluated over the symbol area only
use crate::models::Symbol;

const RUN_PENALTY: u32 = 3;
const BLOCK_PENALTY: u32 = 3;
const FINDER_LIKE_PENALTY: u32 = 40;
const BALANCE_PENALTY: u32 = 10;

const FINDER_LIKE: [bool; 11] = [
    false, false, false, false, true, false, true, true, true, false, true,
];
const FINDER_LIKE_REVERSED: [bool; 11] = [
    true, false, true, true, true, false, true, false, false, false, false,
];

/// Per-rule penalty breakdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PenaltyScore {
    /// Runs of five or more same-colored modules
    pub rule1: u32,
    /// Same-colored 2x2 blocks
    pub rule2: u32,
    /// Finder-like 1:1:3:1:1 patterns with four light modules on one side
    pub rule3: u32,
    /// Deviation of the dark module ratio from 50%
    pub rule4: u32,
}

impl PenaltyScore {
    /// Sum of all four rules
    pub fn total(&self) -> u32 {
        self.rule1 + self.rule2 + self.rule3 + self.rule4
    }
}

/// Score a fully built symbol
pub fn score(symbol: &Symbol) -> PenaltyScore {
    let size = symbol.symbol_size();
    let rows: Vec<Vec<bool>> = (0..size)
        .map(|y| (0..size).map(|x| symbol.get(x, y)).collect())
        .collect();
    let cols: Vec<Vec<bool>> = (0..size)
        .map(|x| (0..size).map(|y| rows[y][x]).collect())
        .collect();

    PenaltyScore {
        rule1: rows.iter().chain(&cols).map(|line| run_penalty(line)).sum(),
        rule2: block_penalty(&rows),
        rule3: rows
            .iter()
            .chain(&cols)
            .map(|line| finder_like_penalty(line))
            .sum(),
        rule4: balance_penalty(symbol.num_dark_modules(), size * size),
    }
}

fn run_penalty(line: &[bool]) -> u32 {
    let mut penalty = 0;
    let mut run = 0usize;
    let mut prev = None;
    for &module in line {
        if Some(module) == prev {
            run += 1;
        } else {
            penalty += score_run(run);
            run = 1;
            prev = Some(module);
        }
    }
    penalty + score_run(run)
}

fn score_run(run: usize) -> u32 {
    if run >= 5 {
        RUN_PENALTY + (run - 5) as u32
    } else {
        0
    }
}

fn block_penalty(rows: &[Vec<bool>]) -> u32 {
    let mut penalty = 0;
    for pair in rows.windows(2) {
        let (top, bottom) = (&pair[0], &pair[1]);
        for x in 0..top.len().saturating_sub(1) {
            let m = top[x];
            if top[x + 1] == m && bottom[x] == m && bottom[x + 1] == m {
                penalty += BLOCK_PENALTY;
            }
        }
    }
    penalty
}

fn finder_like_penalty(line: &[bool]) -> u32 {
    line.windows(FINDER_LIKE.len())
        .filter(|w| *w == FINDER_LIKE || *w == FINDER_LIKE_REVERSED)
        .count() as u32
        * FINDER_LIKE_PENALTY
}

fn balance_penalty(dark: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // 10 * floor(|50 - 100 * dark / total| / 5) in integers. Floors whole 5%
    // steps, unlike |total/2 - dark| / (total/20): 242 dark of 441 scores 0.
    let deviation = (10 * total).abs_diff(20 * dark) / total;
    BALANCE_PENALTY * deviation as u32
}
