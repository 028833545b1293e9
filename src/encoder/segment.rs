/// Splits content into mode-tagged runs and merges runs that are cheaper together
use std::ops::Range;

use crate::encoder::modes::{EncodingCost, Mode};
use crate::error::QrResult;

/// A run of content bytes encoded in a single mode
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Encoding mode for the whole run
    pub mode: Mode,
    /// Byte range into the original content
    pub range: Range<usize>,
}

impl Segment {
    /// Create a segment over `range`
    pub fn new(mode: Mode, range: Range<usize>) -> Self {
        Self { mode, range }
    }

    /// Number of characters in the segment
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// True for a zero-length segment
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// The bytes this segment covers
    pub fn data<'a>(&self, content: &'a [u8]) -> &'a [u8] {
        &content[self.range.clone()]
    }
}

/// Mode classification and greedy segment merging
pub struct Segmenter;

impl Segmenter {
    /// Group consecutive bytes sharing an intrinsic mode.
    ///
    /// Also returns the highest mode required anywhere in the content.
    pub fn classify(content: &[u8]) -> (Vec<Segment>, Mode) {
        let mut segments = Vec::new();
        let mut highest = Mode::None;
        let mut start = 0;
        let mut mode = Mode::None;

        for (i, &byte) in content.iter().enumerate() {
            let new_mode = Mode::of_byte(byte);
            if new_mode != mode {
                if i != 0 {
                    segments.push(Segment::new(mode, start..i));
                }
                start = i;
                mode = new_mode;
            }
            highest = highest.max(new_mode);
        }
        if !content.is_empty() {
            segments.push(Segment::new(mode, start..content.len()));
        }

        (segments, highest)
    }

    /// Greedily absorb following segments while the merged run is strictly cheaper.
    ///
    /// A segment is never merged into a run of a lower mode, so the order is
    /// left-to-right and modes are never upgraded.
    pub fn optimize<C: EncodingCost + ?Sized>(
        segments: &[Segment],
        cost: &C,
    ) -> QrResult<Vec<Segment>> {
        let mut optimized = Vec::with_capacity(segments.len());
        let mut i = 0;

        while i < segments.len() {
            let mode = segments[i].mode;
            let start = segments[i].range.start;
            let mut end = segments[i].range.end;
            let mut j = i + 1;

            while j < segments.len() {
                let next = &segments[j];
                if next.mode > mode {
                    break;
                }
                let current_len = end - start;
                let coalesced = cost.cost(mode, current_len + next.len())?;
                let separate = cost.cost(mode, current_len)? + cost.cost(next.mode, next.len())?;
                if coalesced < separate {
                    end = next.range.end;
                    j += 1;
                } else {
                    break;
                }
            }

            optimized.push(Segment::new(mode, start..end));
            i = j;
        }

        Ok(optimized)
    }

    /// Total encoded length of `segments` under `cost`
    pub fn total_cost<C: EncodingCost + ?Sized>(segments: &[Segment], cost: &C) -> QrResult<usize> {
        segments
            .iter()
            .try_fold(0, |total, s| Ok(total + cost.cost(s.mode, s.len())?))
    }
}
