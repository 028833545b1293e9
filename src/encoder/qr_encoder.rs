/// Top-level encoder: version selection, assembly and mask selection
use tracing::debug;

use crate::encoder::assembler::assemble;
use crate::encoder::bitstream::BitBuffer;
use crate::encoder::builder::select_mask;
use crate::encoder::config;
use crate::encoder::data::{DataEncoder, EncodedData};
use crate::encoder::modes::{EncodingProfile, PROFILES};
use crate::encoder::segment::Segment;
use crate::encoder::version::{VersionDescriptor, choose_fixed_version, choose_version};
use crate::error::{QrError, QrResult};
use crate::models::{ECLevel, QRCode, Version};

/// Content laid out for a version, before any mask is applied
#[derive(Debug, Clone)]
pub struct Prepared {
    /// Chosen version and level
    pub version: &'static VersionDescriptor,
    /// Segments written into the stream
    pub segments: Vec<Segment>,
    /// Interleaved codewords followed by remainder bits
    pub stream: BitBuffer,
}

/// QR code encoder with builder-style configuration
///
/// # Example
/// ```
/// use rust_qrgen::{ECLevel, QrEncoder};
///
/// let qr = QrEncoder::new(ECLevel::M).encode_str("HELLO WORLD").unwrap();
/// assert_eq!(qr.version.number(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QrEncoder {
    level: ECLevel,
    version: Option<u8>,
    quiet_zone: usize,
    parallel_masks: bool,
}

impl QrEncoder {
    /// Encoder choosing the smallest version that fits, with process defaults
    /// for quiet zone and mask parallelism
    pub fn new(level: ECLevel) -> Self {
        Self {
            level,
            version: None,
            quiet_zone: config::quiet_zone(),
            parallel_masks: config::parallel_masks(),
        }
    }

    /// Force a version (1-40) instead of choosing automatically
    pub fn with_version(mut self, version: u8) -> Self {
        self.version = Some(version);
        self
    }

    /// Quiet zone width in modules; 0 disables the border
    pub fn with_quiet_zone(mut self, modules: usize) -> Self {
        self.quiet_zone = modules;
        self
    }

    /// Evaluate mask candidates on the rayon pool
    pub fn with_parallel_masks(mut self, parallel: bool) -> Self {
        self.parallel_masks = parallel;
        self
    }

    /// Error correction level
    pub fn level(&self) -> ECLevel {
        self.level
    }

    /// Quiet zone width in modules
    pub fn quiet_zone(&self) -> usize {
        self.quiet_zone
    }

    /// Segment, choose a version and assemble the final codeword stream
    pub fn prepare(&self, content: &[u8]) -> QrResult<Prepared> {
        let (version, encoded) = match self.version {
            Some(number) => self.fixed_version(number, content)?,
            None => self.auto_version(content)?,
        };

        debug!(
            version = version.version_number(),
            level = ?self.level,
            profile = ?version.profile().encoder_type(),
            segments = encoded.segments.len(),
            bits = encoded.bits.len(),
            capacity = version.data_bit_capacity(),
            "chose version"
        );

        let stream = assemble(&encoded.bits, version)?;
        Ok(Prepared {
            version,
            segments: encoded.segments,
            stream,
        })
    }

    fn fixed_version(
        &self,
        number: u8,
        content: &[u8],
    ) -> QrResult<(&'static VersionDescriptor, EncodedData)> {
        if Version::new(number).is_none() {
            return Err(QrError::InvalidVersionOrLevel {
                version: number,
                level: self.level,
            });
        }
        let encoded = DataEncoder::new(EncodingProfile::for_version(number)).encode(content)?;
        let version = choose_fixed_version(self.level, number, encoded.bits.len())?;
        Ok((version, encoded))
    }

    fn auto_version(&self, content: &[u8]) -> QrResult<(&'static VersionDescriptor, EncodedData)> {
        let mut last_error = None;
        let mut last_length = 0;

        for profile in &PROFILES {
            let encoded = match DataEncoder::new(profile).encode(content) {
                Ok(encoded) => encoded,
                Err(err) => {
                    last_error = Some(err);
                    continue;
                }
            };
            last_error = None;
            last_length = encoded.bits.len();
            if let Some(version) = choose_version(self.level, profile, last_length) {
                return Ok((version, encoded));
            }
        }

        Err(last_error.unwrap_or(QrError::ContentTooLong {
            bits: last_length,
            level: self.level,
        }))
    }

    /// Encode raw bytes into a finished QR code
    pub fn encode(&self, content: &[u8]) -> QrResult<QRCode> {
        let prepared = self.prepare(content)?;
        let chosen = select_mask(
            prepared.version,
            &prepared.stream,
            self.quiet_zone,
            self.parallel_masks,
        )?;

        debug!(
            mask = chosen.mask.id(),
            penalty = chosen.penalty.total(),
            "chose mask"
        );

        Ok(QRCode {
            data: content.to_vec(),
            segments: prepared.segments,
            version: prepared.version.version(),
            error_correction: self.level,
            mask_pattern: chosen.mask,
            penalty: chosen.penalty.total(),
            symbol: chosen.symbol,
        })
    }

    /// Encode UTF-8 text
    pub fn encode_str(&self, content: &str) -> QrResult<QRCode> {
        self.encode(content.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::modes::Mode;
    use test_case::test_case;

    fn digits(n: usize) -> Vec<u8> {
        (0..n).map(|i| b'0' + (i % 10) as u8).collect()
    }

    #[test]
    fn test_hello_world_low() {
        let qr = QrEncoder::new(ECLevel::L).encode(b"HELLO WORLD").unwrap();
        assert_eq!(qr.version.number(), 1);
        assert_eq!(qr.error_correction, ECLevel::L);
        assert_eq!(qr.segments, vec![Segment::new(Mode::Alphanumeric, 0..11)]);
        assert_eq!(qr.symbol.num_unused_modules(), 0);
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(
            QrEncoder::new(ECLevel::M).encode(b"").unwrap_err(),
            QrError::EmptyContent
        );
        assert_eq!(
            QrEncoder::new(ECLevel::M).with_version(5).encode(b"").unwrap_err(),
            QrError::EmptyContent
        );
    }

    #[test_case(34, ECLevel::M, 1; "exact capacity")]
    #[test_case(35, ECLevel::M, 2; "one digit over")]
    #[test_case(41, ECLevel::L, 1; "one bit spare")]
    #[test_case(42, ECLevel::L, 2; "rolls over")]
    fn test_numeric_capacity_boundary(n: usize, level: ECLevel, version: u8) {
        let prepared = QrEncoder::new(level).prepare(&digits(n)).unwrap();
        assert_eq!(prepared.version.version_number(), version);
        assert_eq!(
            prepared.stream.len(),
            prepared.version.total_codewords() * 8 + prepared.version.remainder_bits()
        );
    }

    #[test]
    fn test_profile_fallback_after_length_overflow() {
        // 300 bytes overflow the 8-bit byte count of versions 1-9
        let content = vec![b'a'; 300];
        let prepared = QrEncoder::new(ECLevel::L).prepare(&content).unwrap();
        assert_eq!(prepared.version.version_number(), 11);
    }

    #[test]
    fn test_content_too_long() {
        let content = vec![b'a'; 3000];
        assert!(matches!(
            QrEncoder::new(ECLevel::H).encode(&content),
            Err(QrError::ContentTooLong {
                level: ECLevel::H,
                ..
            })
        ));
    }

    #[test]
    fn test_last_profile_error_is_reported() {
        let content = digits(20_000);
        assert!(matches!(
            QrEncoder::new(ECLevel::L).encode(&content),
            Err(QrError::LengthFieldOverflow {
                mode: Mode::Numeric,
                bits: 14,
                ..
            })
        ));
    }

    #[test]
    fn test_forced_version() {
        let qr = QrEncoder::new(ECLevel::Q)
            .with_version(7)
            .encode(b"HELLO WORLD")
            .unwrap();
        assert_eq!(qr.version.number(), 7);
        assert_eq!(qr.symbol.symbol_size(), 45);

        assert_eq!(
            QrEncoder::new(ECLevel::M).with_version(1).encode(&digits(35)).unwrap_err(),
            QrError::CapacityExceeded {
                version: 1,
                required: 131,
                capacity: 128
            }
        );
    }

    #[test_case(0; "zero")]
    #[test_case(41; "above forty")]
    fn test_forced_version_out_of_range(version: u8) {
        assert_eq!(
            QrEncoder::new(ECLevel::H).with_version(version).encode(b"1").unwrap_err(),
            QrError::InvalidVersionOrLevel {
                version,
                level: ECLevel::H
            }
        );
    }

    #[test]
    fn test_quiet_zone_configuration() {
        let bordered = QrEncoder::new(ECLevel::M).with_quiet_zone(4).encode(b"A1").unwrap();
        let bare = QrEncoder::new(ECLevel::M).with_quiet_zone(0).encode(b"A1").unwrap();
        assert_eq!(bordered.size(), 29);
        assert_eq!(bare.size(), 21);
        assert_eq!(bordered.mask_pattern, bare.mask_pattern);
        let inner: Vec<Vec<bool>> = bordered.bitmap()[4..25]
            .iter()
            .map(|row| row[4..25].to_vec())
            .collect();
        assert_eq!(inner, bare.bitmap());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let encoder = QrEncoder::new(ECLevel::Q);
        let a = encoder.encode_str("Hello, World! 123").unwrap();
        let b = encoder.with_parallel_masks(false).encode_str("Hello, World! 123").unwrap();
        assert_eq!(a.bitmap(), b.bitmap());
        assert_eq!(a.mask_pattern, b.mask_pattern);
    }
}
