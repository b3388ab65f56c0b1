//! Bit-level views of double-precision values.

use malachite::num::arithmetic::traits::PowerOf2;
use malachite::{Natural, Rational};

pub const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
pub const EXPONENT_MASK: u64 = 0x7ff0_0000_0000_0000;
pub const MANTISSA_MASK: u64 = 0x000f_ffff_ffff_ffff;

pub const MANTISSA_WIDTH: u32 = 52;
pub const EXPONENT_BIAS: i32 = 1023;

const MAX_EXPONENT: u16 = 0x7ff;

/// The pattern every NaN is mapped to when two results are compared.
///
/// Only comparisons use it. The functions themselves return whatever NaN their
/// arithmetic produces.
pub const CANONICAL_NAN: u64 = 0x7ff8_0000_0000_0000;

/// A double decomposed into its sign, biased exponent and trailing mantissa
/// fields.
///
/// Decomposition and recomposition are mutual inverses on every pattern,
/// including subnormals, signed zeros, infinities and NaN payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FloatBits {
    pub is_negative: bool,
    pub exponent: u16,
    pub mantissa: u64,
}

impl FloatBits {
    pub fn from_bits(bits: u64) -> FloatBits {
        FloatBits {
            is_negative: bits & SIGN_MASK != 0,
            exponent: ((bits & EXPONENT_MASK) >> MANTISSA_WIDTH) as u16,
            mantissa: bits & MANTISSA_MASK,
        }
    }

    pub fn to_bits(self) -> u64 {
        let sign = if self.is_negative { SIGN_MASK } else { 0 };
        let exponent = u64::from(self.exponent & MAX_EXPONENT) << MANTISSA_WIDTH;

        sign | exponent | (self.mantissa & MANTISSA_MASK)
    }

    pub fn to_f64(self) -> f64 {
        f64::from_bits(self.to_bits())
    }

    pub fn is_nan(&self) -> bool {
        self.exponent == MAX_EXPONENT && self.mantissa != 0
    }

    pub fn is_infinite(&self) -> bool {
        self.exponent == MAX_EXPONENT && self.mantissa == 0
    }

    pub fn is_zero(&self) -> bool {
        self.exponent == 0 && self.mantissa == 0
    }

    pub fn is_subnormal(&self) -> bool {
        self.exponent == 0 && self.mantissa != 0
    }

    /// The full significand, including the implicit leading bit of normal
    /// numbers.
    pub fn significand(&self) -> u64 {
        if self.exponent == 0 {
            self.mantissa
        } else {
            self.mantissa | (1 << MANTISSA_WIDTH)
        }
    }

    /// The power of two scaling the integer significand, so that a finite value
    /// equals `significand * 2^scale`.
    pub fn scale(&self) -> i32 {
        let exponent = i32::from(self.exponent.max(1));

        exponent - EXPONENT_BIAS - MANTISSA_WIDTH as i32
    }

    /// Counts the bits between the leading and trailing one bits of the
    /// significand, inclusive. Zero has no significant bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strictmath::bits::FloatBits;
    /// #
    /// assert_eq!(FloatBits::from(1.0).significant_bits(), 1);
    /// assert_eq!(FloatBits::from(10.0).significant_bits(), 3);
    /// assert_eq!(FloatBits::from(0.1).significant_bits(), 52);
    /// ```
    pub fn significant_bits(&self) -> u32 {
        let significand = self.significand();

        if significand == 0 {
            return 0;
        }

        u64::BITS - significand.leading_zeros() - significand.trailing_zeros()
    }

    /// Whether the pattern is a positive or negative integral power of two,
    /// subnormal powers included.
    pub fn is_power_of_two(&self) -> bool {
        self.exponent != MAX_EXPONENT && self.significand().count_ones() == 1
    }

    /// Computes the exact value of a finite pattern. Both zeros map to zero.
    pub fn to_rational(&self) -> Option<Rational> {
        if self.exponent == MAX_EXPONENT {
            return None;
        }

        let magnitude = Rational::from(Natural::from(self.significand()))
            * Rational::power_of_2(i64::from(self.scale()));

        if self.is_negative {
            Some(-magnitude)
        } else {
            Some(magnitude)
        }
    }
}

impl From<f64> for FloatBits {
    fn from(value: f64) -> Self {
        FloatBits::from_bits(value.to_bits())
    }
}

impl From<FloatBits> for f64 {
    fn from(value: FloatBits) -> Self {
        value.to_f64()
    }
}

/// The bits of `x`, with every NaN replaced by [`CANONICAL_NAN`].
pub fn canonical_bits(x: f64) -> u64 {
    if x.is_nan() {
        CANONICAL_NAN
    } else {
        x.to_bits()
    }
}

/// Compares two results bit for bit, treating all NaNs as equal.
pub fn same_bits(a: f64, b: f64) -> bool {
    canonical_bits(a) == canonical_bits(b)
}

#[inline]
pub fn high_word(x: f64) -> u32 {
    (x.to_bits() >> 32) as u32
}

#[inline]
pub fn low_word(x: f64) -> u32 {
    x.to_bits() as u32
}

#[inline]
pub fn from_words(high: u32, low: u32) -> f64 {
    f64::from_bits((u64::from(high) << 32) | u64::from(low))
}

#[inline]
pub fn with_high_word(x: f64, high: u32) -> f64 {
    from_words(high, low_word(x))
}

#[inline]
pub fn with_low_word(x: f64, low: u32) -> f64 {
    from_words(high_word(x), low)
}

/// Truncates `x` to its leading 21 mantissa bits.
#[inline]
pub fn clear_low_word(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & 0xffff_ffff_0000_0000)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATTERNS: [u64; 12] = [
        0x0000_0000_0000_0000,
        0x8000_0000_0000_0000,
        0x0000_0000_0000_0001,
        0x800f_ffff_ffff_ffff,
        0x0010_0000_0000_0000,
        0x3ff0_0000_0000_0000,
        0x7fef_ffff_ffff_ffff,
        0x7ff0_0000_0000_0000,
        0xfff0_0000_0000_0000,
        0x7ff8_0000_0000_0000,
        0xfff8_0000_dead_beef,
        0x7ff0_0000_0000_0001,
    ];

    #[test]
    fn decomposition_round_trips() {
        for bits in PATTERNS {
            let fields = FloatBits::from_bits(bits);

            assert_eq!(fields.to_bits(), bits);
            assert_eq!(f64::from(fields).to_bits(), bits);
            assert_eq!(FloatBits::from(f64::from_bits(bits)), fields);
        }
    }

    #[test]
    fn fields() {
        assert_eq!(
            FloatBits::from(1.0),
            FloatBits {
                is_negative: false,
                exponent: 1023,
                mantissa: 0
            }
        );
        assert_eq!(
            FloatBits::from(-0.75),
            FloatBits {
                is_negative: true,
                exponent: 1022,
                mantissa: 1 << 51
            }
        );

        let min_subnormal = FloatBits::from_bits(1);

        assert!(min_subnormal.is_subnormal());
        assert_eq!(min_subnormal.scale(), -1074);
        assert_eq!(FloatBits::from(f64::MIN_POSITIVE).scale(), -1074);
    }

    #[test]
    fn classification() {
        assert!(FloatBits::from(f64::NAN).is_nan());
        assert!(FloatBits::from_bits(0xfff0_0000_0000_0001).is_nan());
        assert!(!FloatBits::from(f64::INFINITY).is_nan());
        assert!(FloatBits::from(f64::NEG_INFINITY).is_infinite());
        assert!(FloatBits::from(-0.0).is_zero());

        assert!(FloatBits::from(0.25).is_power_of_two());
        assert!(FloatBits::from(-1024.0).is_power_of_two());
        assert!(FloatBits::from_bits(1 << 40).is_power_of_two());
        assert!(!FloatBits::from(3.0).is_power_of_two());
        assert!(!FloatBits::from(0.0).is_power_of_two());
        assert!(!FloatBits::from(f64::INFINITY).is_power_of_two());
    }

    #[test]
    fn nan_canonicalization() {
        let payload = f64::from_bits(0xfff8_0000_dead_beef);

        assert_eq!(canonical_bits(payload), CANONICAL_NAN);
        assert_eq!(canonical_bits(-0.0), 0x8000_0000_0000_0000);
        assert!(same_bits(payload, f64::NAN));
        assert!(!same_bits(0.0, -0.0));
    }

    #[test]
    fn words() {
        let x = 1.5f64;

        assert_eq!(high_word(x), 0x3ff8_0000);
        assert_eq!(low_word(x), 0);
        assert_eq!(from_words(0x4000_0000, 0), 2.0);
        assert_eq!(with_high_word(x, 0x4008_0000), 3.0);
        assert_eq!(with_low_word(1.0, 1), 1.0 + f64::EPSILON);
        assert_eq!(clear_low_word(1.0 + f64::EPSILON), 1.0);
    }

    #[test]
    fn exact_values() {
        assert_eq!(
            FloatBits::from(0.75).to_rational().unwrap(),
            Rational::from_signeds(3, 4)
        );
        assert_eq!(
            FloatBits::from(-10.0).to_rational().unwrap(),
            Rational::from(-10)
        );
        assert_eq!(
            FloatBits::from_bits(1).to_rational().unwrap(),
            Rational::power_of_2(-1074i64)
        );
        assert_eq!(
            FloatBits::from(-0.0).to_rational().unwrap(),
            Rational::from(0)
        );
        assert_eq!(FloatBits::from(f64::NAN).to_rational(), None);
    }
}
