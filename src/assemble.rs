//! Recombination of kernel values with their reduction terms.
//!
//! Every expression here is evaluated in exactly the order written. Regrouping
//! algebraically equal terms moves the final rounding and changes low bits.

use crate::approx::{
    exp_correction, LogKernel, ATAN_HI, ATAN_LO, IVLN10_HI, IVLN10_LO, LG2, LG2_H, LG2_L,
    LN2_HI, LN2_LO, LOG10_2_HI, LOG10_2_LO, PI, PIO2_HI, PIO2_LO, PI_LO,
};
use crate::bits::{clear_low_word, high_word, with_high_word};
use crate::reduce::{AtanReduction, Exp2Reduction, ExpReduction, SqrtReduction};

/// Computes `x * 2^n` with a single rounding, including for subnormal
/// results.
///
/// # Examples
///
/// ```
/// # use strictmath::assemble::scalbn;
/// #
/// assert_eq!(scalbn(1.5, 4), 24.0);
/// assert_eq!(scalbn(1.0, -1074), f64::from_bits(1));
/// assert_eq!(scalbn(1.0, 1024), f64::INFINITY);
/// ```
pub fn scalbn(x: f64, mut n: i32) -> f64 {
    let x1p1023 = f64::from_bits(0x7fe0_0000_0000_0000);
    let x1p53 = f64::from_bits(0x4340_0000_0000_0000);
    let x1p_1022 = f64::from_bits(0x0010_0000_0000_0000);

    let mut y = x;

    if n > 1023 {
        y *= x1p1023;
        n -= 1023;
        if n > 1023 {
            y *= x1p1023;
            n -= 1023;
            n = n.min(1023);
        }
    } else if n < -1022 {
        // scale down in two steps so that a subnormal result is rounded once
        y *= x1p_1022 * x1p53;
        n += 1022 - 53;
        if n < -1022 {
            y *= x1p_1022 * x1p53;
            n += 1022 - 53;
            n = n.max(-1022);
        }
    }

    y * f64::from_bits(((0x3ff + n) as u64) << 52)
}

pub fn exp(reduced: &ExpReduction) -> f64 {
    let ExpReduction { r, hi, lo, k } = *reduced;
    let c = exp_correction(r);
    let y = 1.0 + (r * c / (2.0 - c) - lo + hi);

    if k == 0 {
        y
    } else {
        scalbn(y, k)
    }
}

/// `log(x) = k*ln2_hi + (f - (hfsq - (s*(hfsq + r) + k*ln2_lo)))`.
pub fn log(f: f64, k: i32, kernel: &LogKernel) -> f64 {
    let LogKernel { hfsq, s, r } = *kernel;
    let dk = f64::from(k);

    s * (hfsq + r) + dk * LN2_LO - hfsq + f + dk * LN2_HI
}

/// Splits `log(1+f)` into a short high part and a tail so that its product
/// with the high half of `1/ln10` is exact, then adds `k*log10(2)` last.
pub fn log10(f: f64, k: i32, kernel: &LogKernel) -> f64 {
    let LogKernel { hfsq, s, r } = *kernel;

    let hi = clear_low_word(f - hfsq);
    let lo = f - hi - hfsq + s * (hfsq + r);

    let val_hi = hi * IVLN10_HI;
    let dk = f64::from(k);
    let y = dk * LOG10_2_HI;
    let mut val_lo = dk * LOG10_2_LO + (lo + hi) * IVLN10_LO + lo * IVLN10_HI;

    let w = y + val_hi;
    val_lo += (y - w) + val_hi;

    val_lo + w
}

/// `log10(2^k)`. With `f = 0` every kernel term vanishes and [`log10`] reduces
/// to this sum, so both give the same bits.
pub fn log10_power_of_two(k: i32) -> f64 {
    let dk = f64::from(k);

    dk * LOG10_2_LO + dk * LOG10_2_HI
}

/// `asin(|x|)` for `|x|` in `[0.975, 1)`, from `pi/2 - 2*(s + s*R(z))`.
pub fn asin_near_one(reduced: &SqrtReduction, ratio: f64) -> f64 {
    let s = reduced.s;

    PIO2_HI - (2.0 * (s + s * ratio) - PIO2_LO)
}

/// `asin(|x|)` for `|x|` in `[0.5, 0.975)`. The square root is split into a
/// 21-bit head `f` and a correction `c = (z - f*f)/(s + f)`.
pub fn asin_middle(reduced: &SqrtReduction, ratio: f64) -> f64 {
    let SqrtReduction { z, s } = *reduced;
    let f = clear_low_word(s);
    let c = (z - f * f) / (s + f);

    0.5 * PIO2_HI - (2.0 * s * ratio - (PIO2_LO - 2.0 * c) - (0.5 * PIO2_HI - 2.0 * f))
}

/// `acos(x)` for `|x| < 0.5`, from `pi/2 - asin(x)`.
pub fn acos_middle(x: f64, ratio: f64) -> f64 {
    PIO2_HI - (x - (PIO2_LO - x * ratio))
}

/// `acos(x)` for `x < -0.5`, from `pi - 2*asin(sqrt((1 + x)/2))`.
pub fn acos_negative(reduced: &SqrtReduction, ratio: f64) -> f64 {
    let s = reduced.s;
    let w = ratio * s - PIO2_LO;

    2.0 * (PIO2_HI - (s + w))
}

/// `acos(x)` for `x > 0.5`, from `2*asin(sqrt((1 - x)/2))`.
pub fn acos_positive(reduced: &SqrtReduction, ratio: f64) -> f64 {
    let SqrtReduction { z, s } = *reduced;
    let df = clear_low_word(s);
    let c = (z - df * df) / (s + df);
    let w = ratio * s + c;

    2.0 * (df + w)
}

/// Adds back `atan` of the breakpoint the argument was measured from and
/// restores the sign of the original input.
pub fn atan(reduced: &AtanReduction, series: f64, negative: bool) -> f64 {
    let t = reduced.t;

    let Some(id) = reduced.breakpoint else {
        return t - t * series;
    };

    let z = ATAN_HI[id] - ((t * series - ATAN_LO[id]) - t);

    if negative {
        -z
    } else {
        z
    }
}

/// Moves `z = atan(|y/x|)` into the quadrant selected by
/// `m = 2*sign(x) + sign(y)`.
pub fn atan2_quadrant(z: f64, m: u32) -> f64 {
    match m {
        0 => z,
        1 => -z,
        2 => PI - (z - PI_LO),
        _ => (z - PI_LO) - PI,
    }
}

/// `2^(p_h + p_l)` with the integer part applied to the exponent field
/// directly, or through [`scalbn`] when the result is subnormal.
pub fn pow(reduced: &Exp2Reduction) -> f64 {
    let Exp2Reduction { p_h, p_l, n } = *reduced;

    let t = clear_low_word(p_l + p_h);
    let u = t * LG2_H;
    let v = (p_l - (t - p_h)) * LG2 + t * LG2_L;
    let z = u + v;
    let w = v - (z - u);

    let t1 = exp_correction(z);
    let r = (z * t1) / (t1 - 2.0) - (w + z * w);
    let z = 1.0 - (r - z);

    let j = (high_word(z) as i32).wrapping_add(n << 20);

    if (j >> 20) <= 0 {
        scalbn(z, n)
    } else {
        with_high_word(z, j as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling() {
        assert_eq!(scalbn(3.0, 0), 3.0);
        assert_eq!(scalbn(-1.0, 1023), -f64::from_bits(0x7fe0_0000_0000_0000));
        assert_eq!(scalbn(1.0, 2000), f64::INFINITY);
        assert_eq!(scalbn(f64::from_bits(1), 2097), f64::from_bits(0x7fe0_0000_0000_0000));
        assert_eq!(scalbn(f64::MAX, -2100), 0.0);
        assert_eq!(scalbn(-0.0, 10).to_bits(), (-0.0f64).to_bits());

        // ties to even
        assert_eq!(scalbn(1.5, -1074), f64::from_bits(2));
        assert_eq!(scalbn(2.5, -1074), f64::from_bits(2));
        assert_eq!(scalbn(1.0 + f64::EPSILON, -1023), f64::MIN_POSITIVE / 2.0);
    }

    #[test]
    fn powers_of_two() {
        assert_eq!(log10_power_of_two(0).to_bits(), 0);
        assert_eq!(log10_power_of_two(1), 0.3010299956639812);

        let kernel = LogKernel {
            hfsq: 0.0,
            s: 0.0,
            r: 0.0,
        };

        for k in [-1074, -1022, -54, -1, 1, 3, 17, 1023] {
            assert_eq!(log10(0.0, k, &kernel).to_bits(), log10_power_of_two(k).to_bits());
        }
    }

    #[test]
    fn quadrants() {
        let z = 0.5;

        assert_eq!(atan2_quadrant(z, 0), z);
        assert_eq!(atan2_quadrant(z, 1), -z);
        assert_eq!(atan2_quadrant(0.0, 2), PI);
        assert_eq!(atan2_quadrant(0.0, 3), -PI);
    }
}
