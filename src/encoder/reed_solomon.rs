/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use crate::encoder::bitstream::BitBuffer;

/// GF(256) field operations using log/exp tables
pub struct Gf256;

const PRIMITIVE_POLYNOMIAL: u16 = 0x11D;

/// EXP_TABLE[i] = alpha^i; entry 255 wraps back to 1
static EXP_TABLE: [u8; 256] = build_exp_table();
/// LOG_TABLE[alpha^i] = i; entry 0 is unused since log(0) is undefined
static LOG_TABLE: [u8; 256] = build_log_table();

const fn build_exp_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut value: u16 = 1;
    let mut i = 0;
    while i < 256 {
        table[i] = value as u8;
        value <<= 1;
        if value & 0x100 != 0 {
            value ^= PRIMITIVE_POLYNOMIAL;
        }
        i += 1;
    }
    table
}

const fn build_log_table() -> [u8; 256] {
    let exp = build_exp_table();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

impl Gf256 {
    /// Addition (and subtraction) is exclusive-or
    pub fn add(a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Multiplication via log/antilog tables
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }

    /// Panics when `b` is zero
    pub fn div(a: u8, b: u8) -> u8 {
        if b == 0 {
            panic!("Division by zero");
        }
        if a == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + 255 - log_b) % 255]
    }

    /// alpha^n
    pub fn exp(n: usize) -> u8 {
        EXP_TABLE[n % 255]
    }

    /// Discrete log of a nonzero element
    pub fn log(a: u8) -> Option<u8> {
        if a == 0 {
            None
        } else {
            Some(LOG_TABLE[a as usize])
        }
    }
}

/// Polynomial over GF(256), coefficients in ascending power of x.
///
/// Always normalized: the highest stored coefficient is nonzero, and the zero
/// polynomial has no terms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GfPoly {
    terms: Vec<u8>,
}

impl GfPoly {
    /// Build from ascending coefficients, dropping zero high-order terms
    pub fn new(terms: Vec<u8>) -> Self {
        let mut poly = Self { terms };
        poly.normalize();
        poly
    }

    /// The zero polynomial
    pub fn zero() -> Self {
        Self::default()
    }

    /// `coefficient * x^degree`
    pub fn monomial(coefficient: u8, degree: usize) -> Self {
        if coefficient == 0 {
            return Self::zero();
        }
        let mut terms = vec![0u8; degree + 1];
        terms[degree] = coefficient;
        Self { terms }
    }

    /// Interpret the bytes of `data` as coefficients, earliest byte highest order
    pub fn from_data(data: &BitBuffer) -> Self {
        let num_bytes = data.len().div_ceil(8);
        let mut terms = vec![0u8; num_bytes];
        for (k, start) in (0..data.len()).step_by(8).enumerate() {
            // start < len, so byte_at cannot fail
            terms[num_bytes - 1 - k] = data.byte_at(start).unwrap_or(0);
        }
        Self::new(terms)
    }

    fn normalize(&mut self) {
        while self.terms.last() == Some(&0) {
            self.terms.pop();
        }
    }

    /// Coefficients in ascending order
    pub fn terms(&self) -> &[u8] {
        &self.terms
    }

    /// Number of stored terms (degree + 1, or 0 for the zero polynomial)
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Degree, `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.terms.len().checked_sub(1)
    }

    /// True for the zero polynomial (no terms)
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Term-wise field addition
    pub fn add(&self, other: &GfPoly) -> GfPoly {
        let (longer, shorter) = if self.terms.len() >= other.terms.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut terms = longer.terms.clone();
        for (term, &s) in terms.iter_mut().zip(&shorter.terms) {
            *term = Gf256::add(*term, s);
        }
        GfPoly::new(terms)
    }

    /// Full convolution
    pub fn multiply(&self, other: &GfPoly) -> GfPoly {
        if self.is_zero() || other.is_zero() {
            return GfPoly::zero();
        }
        let mut terms = vec![0u8; self.terms.len() + other.terms.len() - 1];
        for (i, &a) in self.terms.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.terms.iter().enumerate() {
                terms[i + j] ^= Gf256::mul(a, b);
            }
        }
        GfPoly::new(terms)
    }

    /// Remainder of `self / denominator` by synthetic division.
    ///
    /// Panics when `denominator` is the zero polynomial.
    pub fn remainder(&self, denominator: &GfPoly) -> GfPoly {
        let Some(denominator_degree) = denominator.degree() else {
            panic!("Remainder by zero polynomial");
        };
        let leading = denominator.terms[denominator_degree];
        let mut remainder = self.terms.clone();

        while remainder.len() > denominator_degree {
            let top = remainder.len() - 1;
            let coefficient = Gf256::div(remainder[top], leading);
            let shift = top - denominator_degree;
            for (i, &d) in denominator.terms.iter().enumerate() {
                remainder[shift + i] ^= Gf256::mul(coefficient, d);
            }
            // The leading term cancels; any further zeros are stripped too
            while remainder.last() == Some(&0) {
                remainder.pop();
            }
        }

        GfPoly::new(remainder)
    }

    /// Coefficients as `num_terms` codewords, highest order first, left-padded with zeros
    pub fn to_codewords(&self, num_terms: usize) -> Vec<u8> {
        let mut result = vec![0u8; num_terms];
        let offset = num_terms.saturating_sub(self.terms.len());
        for (k, &term) in self.terms.iter().rev().take(num_terms).enumerate() {
            result[offset + k] = term;
        }
        result
    }
}

/// Reed-Solomon generator of the given degree: (x + a^0)(x + a^1)...(x + a^(degree-1))
pub fn generator_polynomial(degree: usize) -> GfPoly {
    let mut generator = GfPoly::new(vec![1]);
    for i in 0..degree {
        generator = generator.multiply(&GfPoly::new(vec![Gf256::exp(i), 1]));
    }
    generator
}

/// Reed-Solomon encoder for QR code blocks
pub struct ReedSolomonEncoder {
    num_ecc_codewords: usize,
    generator: GfPoly,
}

impl ReedSolomonEncoder {
    /// Encoder producing `num_ecc_codewords` EC codewords per block
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self {
            num_ecc_codewords,
            generator: generator_polynomial(num_ecc_codewords),
        }
    }

    /// EC codewords produced per block
    pub fn num_ecc_codewords(&self) -> usize {
        self.num_ecc_codewords
    }

    /// Error correction codewords for one block of data codewords
    pub fn ecc_codewords(&self, data: &BitBuffer) -> Vec<u8> {
        let shifted = GfPoly::from_data(data)
            .multiply(&GfPoly::monomial(1, self.num_ecc_codewords));
        shifted
            .remainder(&self.generator)
            .to_codewords(self.num_ecc_codewords)
    }
}
