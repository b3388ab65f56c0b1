//! Minimax approximations over each function's primary interval.

mod tables;

pub use tables::*;

use crate::bits::{clear_low_word, with_high_word};
use crate::reduce::PowLogReduction;

/// A fixed polynomial, coefficients listed from the lowest degree up.
pub struct CoefficientTable<const N: usize> {
    pub name: &'static str,
    pub coefficients: [f64; N],
}

impl<const N: usize> CoefficientTable<N> {
    /// Evaluates the polynomial at `x` by Horner's scheme, starting from the
    /// highest-degree coefficient.
    #[inline]
    pub fn horner(&self, x: f64) -> f64 {
        let mut coefficients = self.coefficients.iter().rev();
        let highest = coefficients.next().copied().unwrap_or(0.0);

        coefficients.fold(highest, |acc, &c| acc * x + c)
    }
}

/// Computes `c = r - r^2 * P(r^2)`, from which `e^r = 1 + r + r*c/(2-c)`.
#[inline]
pub fn exp_correction(r: f64) -> f64 {
    let rr = r * r;

    r - rr * EXP_P.horner(rr)
}

/// Pieces of `log(1+f) = f - hfsq + s*(hfsq + r)`.
pub struct LogKernel {
    pub hfsq: f64,
    pub s: f64,
    pub r: f64,
}

/// Evaluates the `log(1+f)` kernel for `f` in `[sqrt(2)/2 - 1, sqrt(2) - 1)`.
pub fn log_kernel(f: f64) -> LogKernel {
    let hfsq = 0.5 * f * f;
    let s = f / (2.0 + f);
    let z = s * s;
    let w = z * z;
    let t1 = w * LG_EVEN.horner(w);
    let t2 = z * LG_ODD.horner(w);

    LogKernel {
        hfsq,
        s,
        r: t2 + t1,
    }
}

/// Rational approximation `R(z)` with `asin(x) = x + x*R(x^2)`.
#[inline]
pub fn asin_ratio(z: f64) -> f64 {
    let p = z * ASIN_P.horner(z);
    let q = 1.0 + z * ASIN_Q.horner(z);

    p / q
}

/// Evaluates `atan(t) = t - t*S(t)` for reduced `t`, returning `S(t)`.
#[inline]
pub fn atan_series(t: f64) -> f64 {
    let z = t * t;
    let w = z * z;
    let s1 = z * ATAN_EVEN.horner(w);
    let s2 = w * ATAN_ODD.horner(w);

    s1 + s2
}

/// Computes `log2(ax)` as an unevaluated sum `t1 + t2`, with `t1` carrying
/// only 21 mantissa bits.
///
/// The input is split as `ax = 2^n * (bp + u)` with `bp` one of 1 or 1.5, and
/// the logarithm of the fraction is expanded in `ss = u / (ax + bp)`.
pub fn log2_extended(reduced: &PowLogReduction) -> (f64, f64) {
    let k = reduced.interval;
    let ax = reduced.ax;

    // ss = s_h + s_l = (ax - bp) / (ax + bp)
    let u = ax - BP[k];
    let v = 1.0 / (ax + BP[k]);
    let ss = u * v;
    let s_h = clear_low_word(ss);

    let t_h = with_high_word(
        0.0,
        ((reduced.ix >> 1) | 0x2000_0000) + 0x0008_0000 + ((k as u32) << 18),
    );
    let t_l = ax - (t_h - BP[k]);
    let s_l = v * ((u - s_h * t_h) - s_h * t_l);

    let s2 = ss * ss;
    let mut r = s2 * s2 * POW_L.horner(s2);
    r += s_l * (s_h + ss);

    let s2 = s_h * s_h;
    let t_h = clear_low_word(3.0 + s2 + r);
    let t_l = r - ((t_h - 3.0) - s2);

    // u + v = ss * (1 + ...)
    let u = s_h * t_h;
    let v = s_l * t_h + t_l * ss;

    // 2/(3 log2) * (ss + ...)
    let p_h = clear_low_word(u + v);
    let p_l = v - (p_h - u);
    let z_h = CP_H * p_h;
    let z_l = CP_L * p_h + p_l * CP + DP_L[k];

    let t = f64::from(reduced.n);
    let t1 = clear_low_word(((z_h + z_l) + DP_H[k]) + t);
    let t2 = z_l - (((t1 - t) - DP_H[k]) - z_h);

    (t1, t2)
}

/// Computes `log2(ax)` as `t1 + t2` for `|ax - 1| <= 2^-20`, where a short
/// Taylor series suffices.
#[allow(clippy::excessive_precision)]
pub fn log2_near_one(ax: f64) -> (f64, f64) {
    let t = ax - 1.0;
    let w = (t * t) * (0.5 - t * (0.3333333333333333333333 - t * 0.25));
    let u = IVLN2_H * t;
    let v = t * IVLN2_L - w * IVLN2;
    let t1 = clear_low_word(u + v);
    let t2 = v - (t1 - u);

    (t1, t2)
}
