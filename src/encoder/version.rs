/// Version/capacity catalog: block structure and data capacity for every
/// (version, level) pair, derived at compile time from the block tables
use crate::encoder::modes::EncodingProfile;
use crate::encoder::tables::{ec_block_params, raw_data_modules};
use crate::error::{QrError, QrResult};
use crate::models::{ECLevel, Version};

/// Blocks sharing the same codeword layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGroup {
    /// Number of blocks in the group
    pub count: usize,
    /// Codewords per block, data plus error correction
    pub total_codewords: usize,
    /// Data codewords per block
    pub data_codewords: usize,
}

impl BlockGroup {
    const EMPTY: BlockGroup = BlockGroup {
        count: 0,
        total_codewords: 0,
        data_codewords: 0,
    };

    /// Error correction codewords per block
    pub fn ec_codewords(&self) -> usize {
        self.total_codewords - self.data_codewords
    }
}

/// Static description of one version at one error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionDescriptor {
    version: u8,
    level: ECLevel,
    groups: [BlockGroup; 2],
    num_groups: usize,
    total_codewords: usize,
    remainder_bits: usize,
}

/// Up to four terminator bits follow the last segment
const TERMINATOR_BITS: usize = 4;

impl VersionDescriptor {
    const fn derive(version: u8, level: ECLevel) -> Self {
        let raw = raw_data_modules(version);
        let total_codewords = raw / 8;
        let (ec_per_block, num_blocks) = ec_block_params(version, level);

        let num_long = total_codewords % num_blocks;
        let num_short = num_blocks - num_long;
        let short_total = total_codewords / num_blocks;
        let short = BlockGroup {
            count: num_short,
            total_codewords: short_total,
            data_codewords: short_total - ec_per_block,
        };

        let (groups, num_groups) = if num_long == 0 {
            ([short, BlockGroup::EMPTY], 1)
        } else {
            let long = BlockGroup {
                count: num_long,
                total_codewords: short_total + 1,
                data_codewords: short_total + 1 - ec_per_block,
            };
            ([short, long], 2)
        };

        Self {
            version,
            level,
            groups,
            num_groups,
            total_codewords,
            remainder_bits: raw % 8,
        }
    }

    /// Version number (1-40)
    pub fn version(&self) -> Version {
        // Catalog entries are built from 1..=40 only
        Version::new(self.version).unwrap_or(Version::MIN)
    }

    /// Version number as a plain integer
    pub fn version_number(&self) -> u8 {
        self.version
    }

    /// Error correction level
    pub fn level(&self) -> ECLevel {
        self.level
    }

    /// Encoding profile implied by the version range
    pub fn profile(&self) -> &'static EncodingProfile {
        EncodingProfile::for_version(self.version)
    }

    /// Block groups in interleaving order, shorter blocks first
    pub fn block_groups(&self) -> &[BlockGroup] {
        &self.groups[..self.num_groups]
    }

    /// Number of error correction blocks
    pub fn num_blocks(&self) -> usize {
        self.block_groups().iter().map(|g| g.count).sum()
    }

    /// Data plus error correction codewords in the symbol
    pub fn total_codewords(&self) -> usize {
        self.total_codewords
    }

    /// Data codewords across all blocks
    pub fn data_codewords(&self) -> usize {
        self.block_groups()
            .iter()
            .map(|g| g.count * g.data_codewords)
            .sum()
    }

    /// Bits available for segments, terminator and padding
    pub fn data_bit_capacity(&self) -> usize {
        self.data_codewords() * 8
    }

    /// Zero bits appended after the interleaved codewords
    pub fn remainder_bits(&self) -> usize {
        self.remainder_bits
    }

    /// Terminator bits to append after `num_bits` of encoded data
    pub fn terminator_bits_required(&self, num_bits: usize) -> usize {
        TERMINATOR_BITS.min(self.data_bit_capacity().saturating_sub(num_bits))
    }

    /// Symbol width in modules, quiet zone excluded
    pub fn symbol_size(&self) -> usize {
        4 * self.version as usize + 17
    }
}

const CATALOG_LEN: usize = 40 * 4;

const fn build_catalog() -> [VersionDescriptor; CATALOG_LEN] {
    let mut catalog = [VersionDescriptor {
        version: 0,
        level: ECLevel::L,
        groups: [BlockGroup::EMPTY; 2],
        num_groups: 0,
        total_codewords: 0,
        remainder_bits: 0,
    }; CATALOG_LEN];
    let mut i = 0;
    while i < CATALOG_LEN {
        catalog[i] = VersionDescriptor::derive((i / 4) as u8 + 1, ECLevel::ALL[i % 4]);
        i += 1;
    }
    catalog
}

/// Every descriptor, ordered by version then level
pub static CATALOG: [VersionDescriptor; CATALOG_LEN] = build_catalog();

/// Descriptor for a (version, level) pair, `None` outside 1-40
pub fn lookup(version: u8, level: ECLevel) -> Option<&'static VersionDescriptor> {
    if !(1..=40).contains(&version) {
        return None;
    }
    CATALOG.get((version as usize - 1) * 4 + level.index())
}

/// Smallest version in the profile's range at `level` holding `num_bits`
pub fn choose_version(
    level: ECLevel,
    profile: &EncodingProfile,
    num_bits: usize,
) -> Option<&'static VersionDescriptor> {
    CATALOG.iter().find(|d| {
        d.level == level
            && (profile.min_version()..=profile.max_version()).contains(&d.version)
            && d.data_bit_capacity() >= num_bits
    })
}

/// Descriptor for a forced version, checked against `num_bits`
pub fn choose_fixed_version(
    level: ECLevel,
    version: u8,
    num_bits: usize,
) -> QrResult<&'static VersionDescriptor> {
    let descriptor =
        lookup(version, level).ok_or(QrError::InvalidVersionOrLevel { version, level })?;
    if num_bits > descriptor.data_bit_capacity() {
        return Err(QrError::CapacityExceeded {
            version,
            required: num_bits,
            capacity: descriptor.data_bit_capacity(),
        });
    }
    Ok(descriptor)
}
