/// Turns raw content into a segmented, mode-encoded bit stream for one profile
use tracing::trace;

use crate::encoder::bitstream::BitBuffer;
use crate::encoder::modes::{EncodingCost, EncodingProfile};
use crate::encoder::segment::{Segment, Segmenter};
use crate::error::{QrError, QrResult};

/// Output of [`DataEncoder::encode`]
#[derive(Debug, Clone)]
pub struct EncodedData {
    /// Segments actually written
    pub segments: Vec<Segment>,
    /// Mode indicators, count fields and payloads, unterminated
    pub bits: BitBuffer,
}

/// Data encoder bound to one encoding profile
pub struct DataEncoder {
    profile: &'static EncodingProfile,
}

impl DataEncoder {
    /// Create an encoder for `profile`
    pub fn new(profile: &'static EncodingProfile) -> Self {
        Self { profile }
    }

    /// Profile this encoder writes with
    pub fn profile(&self) -> &'static EncodingProfile {
        self.profile
    }

    /// Classify, optimize and encode `content`.
    ///
    /// When one segment in the highest required mode costs no more than the
    /// optimized segments, that single segment is used instead.
    pub fn encode(&self, content: &[u8]) -> QrResult<EncodedData> {
        if content.is_empty() {
            return Err(QrError::EmptyContent);
        }

        let (classified, highest) = Segmenter::classify(content);
        let mut segments = Segmenter::optimize(&classified, self.profile)?;

        let optimized_length = Segmenter::total_cost(&segments, self.profile)?;
        let single_length = self.profile.cost(highest, content.len())?;
        if single_length <= optimized_length {
            segments = vec![Segment::new(highest, 0..content.len())];
        }
        trace!(
            classified = classified.len(),
            optimized = segments.len(),
            optimized_length,
            single_length,
            "segmented content"
        );

        let mut bits = BitBuffer::with_capacity(optimized_length.min(single_length));
        for segment in &segments {
            self.profile
                .encode_segment(segment.mode, segment.data(content), &mut bits)?;
        }

        Ok(EncodedData { segments, bits })
    }
}
