/// Matrix builder: one symbol per mask candidate, lowest penalty wins
use rayon::prelude::*;
use tracing::trace;

use crate::encoder::bitstream::BitBuffer;
use crate::encoder::format::FormatInfo;
use crate::encoder::function_patterns::{
    add_alignment_patterns, add_finder_patterns, add_format_info, add_timing_patterns,
    add_version_info,
};
use crate::encoder::penalty::{self, PenaltyScore};
use crate::encoder::placement::place_data;
use crate::encoder::version::VersionDescriptor;
use crate::error::{QrError, QrResult};
use crate::models::{MaskPattern, Symbol};

/// A finished symbol for one mask with its penalty
#[derive(Debug, Clone)]
pub struct MaskCandidate {
    /// Mask applied to the data modules
    pub mask: MaskPattern,
    /// Symbol with format information for `mask`
    pub symbol: Symbol,
    /// Penalty of `symbol`
    pub penalty: PenaltyScore,
}

/// Build a complete symbol for `data` under a single mask
pub fn build_symbol(
    version: &VersionDescriptor,
    data: &BitBuffer,
    mask: MaskPattern,
    quiet_zone: usize,
) -> QrResult<Symbol> {
    let mut symbol = Symbol::new(version.symbol_size(), quiet_zone);

    add_finder_patterns(&mut symbol);
    add_alignment_patterns(&mut symbol, version.version_number());
    add_timing_patterns(&mut symbol);
    add_format_info(&mut symbol, FormatInfo::new(version.level(), mask));
    add_version_info(&mut symbol, version.version_number());
    place_data(&mut symbol, data, mask)?;

    Ok(symbol)
}

fn build_candidate(
    version: &VersionDescriptor,
    data: &BitBuffer,
    mask: MaskPattern,
    quiet_zone: usize,
) -> QrResult<MaskCandidate> {
    let symbol = build_symbol(version, data, mask, quiet_zone)?;
    let penalty = penalty::score(&symbol);
    trace!(
        mask = mask.id(),
        rule1 = penalty.rule1,
        rule2 = penalty.rule2,
        rule3 = penalty.rule3,
        rule4 = penalty.rule4,
        total = penalty.total(),
        "mask candidate"
    );
    Ok(MaskCandidate {
        mask,
        symbol,
        penalty,
    })
}

/// Build and score all eight mask candidates, in mask id order
pub fn evaluate_masks(
    version: &VersionDescriptor,
    data: &BitBuffer,
    quiet_zone: usize,
    parallel: bool,
) -> QrResult<Vec<MaskCandidate>> {
    if parallel {
        MaskPattern::ALL
            .par_iter()
            .map(|&mask| build_candidate(version, data, mask, quiet_zone))
            .collect()
    } else {
        MaskPattern::ALL
            .iter()
            .map(|&mask| build_candidate(version, data, mask, quiet_zone))
            .collect()
    }
}

/// Candidate with the lowest total penalty; the lowest mask id wins ties
pub fn select_mask(
    version: &VersionDescriptor,
    data: &BitBuffer,
    quiet_zone: usize,
    parallel: bool,
) -> QrResult<MaskCandidate> {
    evaluate_masks(version, data, quiet_zone, parallel)?
        .into_iter()
        .min_by_key(|c| (c.penalty.total(), c.mask.id()))
        .ok_or_else(|| QrError::InternalConsistency("no mask candidates".to_string()))
}
