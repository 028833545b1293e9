use super::BitMatrix;

/// A QR symbol under construction: module values plus a used flag per module.
///
/// Coordinates passed to the accessors are symbol coordinates (x = column,
/// y = row) that exclude the quiet zone; the quiet zone only shows up in
/// [`Symbol::bitmap`] and [`Symbol::size`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    modules: BitMatrix,
    used: BitMatrix,
    symbol_size: usize,
    quiet_zone_size: usize,
}

impl Symbol {
    /// Allocate an empty symbol with every module unused and light
    pub fn new(symbol_size: usize, quiet_zone_size: usize) -> Self {
        let size = symbol_size + 2 * quiet_zone_size;
        Self {
            modules: BitMatrix::new(size, size),
            used: BitMatrix::new(size, size),
            symbol_size,
            quiet_zone_size,
        }
    }

    /// Width/height including both quiet zones
    pub fn size(&self) -> usize {
        self.symbol_size + 2 * self.quiet_zone_size
    }

    /// Width/height of the symbol proper
    pub fn symbol_size(&self) -> usize {
        self.symbol_size
    }

    /// Width of a single quiet zone
    pub fn quiet_zone_size(&self) -> usize {
        self.quiet_zone_size
    }

    /// Module value at (x, y); true = dark
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.modules
            .get(x + self.quiet_zone_size, y + self.quiet_zone_size)
    }

    /// Whether the module at (x, y) has already been assigned
    pub fn is_used(&self, x: usize, y: usize) -> bool {
        self.used.get(x + self.quiet_zone_size, y + self.quiet_zone_size)
    }

    /// Assign a module and mark it used
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let (qx, qy) = (x + self.quiet_zone_size, y + self.quiet_zone_size);
        self.modules.set(qx, qy, value);
        self.used.set(qx, qy, true);
    }

    /// Count of modules inside the symbol area never assigned
    pub fn num_unused_modules(&self) -> usize {
        let mut count = 0;
        for y in 0..self.symbol_size {
            for x in 0..self.symbol_size {
                if !self.is_used(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Count of dark modules inside the symbol area
    pub fn num_dark_modules(&self) -> usize {
        // The quiet zone is never written, so the whole matrix can be counted
        self.modules.count_ones()
    }

    /// Full module grid indexed `[row][col]`, quiet zone included
    pub fn bitmap(&self) -> Vec<Vec<bool>> {
        let size = self.size();
        (0..size)
            .map(|y| (0..size).map(|x| self.modules.get(x, y)).collect())
            .collect()
    }
}
