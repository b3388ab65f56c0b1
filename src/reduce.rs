//! Argument reduction into each function's primary interval.

use crate::approx::{HALF, INV_LN2, LN2_HI, LN2_LO, TWO53};
use crate::bits::{clear_low_word, high_word, low_word, with_high_word};

/// `x = k*ln2 + r` with `|r| <= ln2/2`, where `r = hi - lo` is kept as an
/// unevaluated difference for the final recombination.
pub struct ExpReduction {
    pub r: f64,
    pub hi: f64,
    pub lo: f64,
    pub k: i32,
}

/// Reduces a finite `x` whose exponential neither overflows nor underflows to
/// zero.
pub fn exp(x: f64) -> ExpReduction {
    let hx = high_word(x);
    let sign = (hx >> 31) as usize;
    let hx = hx & 0x7fff_ffff;

    // |x| <= ln2/2
    if hx <= 0x3fd6_2e42 {
        return ExpReduction {
            r: x,
            hi: x,
            lo: 0.0,
            k: 0,
        };
    }

    let k = if hx >= 0x3ff0_a2b2 {
        (INV_LN2 * x + HALF[sign]) as i32
    } else {
        1 - 2 * sign as i32
    };

    // k*ln2hi is exact here
    let hi = x - f64::from(k) * LN2_HI;
    let lo = f64::from(k) * LN2_LO;

    ExpReduction {
        r: hi - lo,
        hi,
        lo,
        k,
    }
}

/// `x = 2^k * (1 + f)` with `1 + f` in `[sqrt(2)/2, sqrt(2))`.
pub struct LogReduction {
    pub f: f64,
    pub k: i32,
}

impl LogReduction {
    /// Whether the input was an exact power of two, in which case the
    /// logarithm is just `k` times that of two.
    pub fn is_power_of_two(&self) -> bool {
        self.f == 0.0
    }
}

/// Reduces a finite, strictly positive `x`.
pub fn log(x: f64) -> LogReduction {
    let x1p54 = f64::from_bits(0x4350_0000_0000_0000);

    let mut x = x;
    let mut k = 0;
    let mut hx = high_word(x);

    if hx < 0x0010_0000 {
        k -= 54;
        x *= x1p54;
        hx = high_word(x);
    }

    hx += 0x3ff0_0000 - 0x3fe6_a09e;
    k += (hx >> 20) as i32 - 0x3ff;
    hx = (hx & 0x000f_ffff) + 0x3fe6_a09e;

    LogReduction {
        f: with_high_word(x, hx) - 1.0,
        k,
    }
}

/// `z = (1 - |x|) / 2` together with its square root, so that
/// `asin(|x|) = pi/2 - 2*asin(sqrt(z))`.
pub struct SqrtReduction {
    pub z: f64,
    pub s: f64,
}

pub fn half_complement(x: f64) -> SqrtReduction {
    let z = (1.0 - x.abs()) * 0.5;

    SqrtReduction { z, s: z.sqrt() }
}

/// The argument of `atan` mapped into `[-7/16, 7/16]`, with the index of the
/// breakpoint it was measured from, if any.
pub struct AtanReduction {
    pub t: f64,
    pub breakpoint: Option<usize>,
}

/// Reduces `x` for `atan` using `atan(x) = atan(c) + atan((x - c)/(1 + x*c))`
/// about `c` in `{0.5, 1, 1.5, inf}`.
pub fn atan(x: f64) -> AtanReduction {
    let ix = high_word(x) & 0x7fff_ffff;

    if ix < 0x3fdc_0000 {
        return AtanReduction {
            t: x,
            breakpoint: None,
        };
    }

    let x = x.abs();

    let (t, breakpoint) = if ix < 0x3ff3_0000 {
        if ix < 0x3fe6_0000 {
            ((2.0 * x - 1.0) / (2.0 + x), 0)
        } else {
            ((x - 1.0) / (x + 1.0), 1)
        }
    } else if ix < 0x4003_8000 {
        ((x - 1.5) / (1.0 + 1.5 * x), 2)
    } else {
        (-1.0 / x, 3)
    };

    AtanReduction {
        t,
        breakpoint: Some(breakpoint),
    }
}

/// `|x| = 2^n * ax` with `ax` in `[sqrt(3)/2, sqrt(3))`, split at `sqrt(3/2)`
/// into two intervals centred on 1 and 1.5.
pub struct PowLogReduction {
    pub ax: f64,
    pub ix: u32,
    pub n: i32,
    pub interval: usize,
}

pub fn pow_log(ax: f64) -> PowLogReduction {
    let mut ax = ax;
    let mut n = 0;
    let mut ix = high_word(ax);

    if ix < 0x0010_0000 {
        ax *= TWO53;
        n -= 53;
        ix = high_word(ax);
    }

    n += (ix >> 20) as i32 - 0x3ff;
    let j = ix & 0x000f_ffff;
    ix = j | 0x3ff0_0000;

    let interval = if j <= 0x3988e {
        0
    } else if j < 0xbb67a {
        1
    } else {
        n += 1;
        ix -= 0x0010_0000;
        0
    };

    PowLogReduction {
        ax: with_high_word(ax, ix),
        ix,
        n,
        interval,
    }
}

/// The product `y * (t1 + t2)` as `p_h + p_l`, where `p_h` carries 21 bits of
/// `y` times the 21-bit `t1`.
pub struct Log2Product {
    pub p_h: f64,
    pub p_l: f64,
    pub z: f64,
}

impl Log2Product {
    pub fn new(y: f64, t1: f64, t2: f64) -> Log2Product {
        let y1 = clear_low_word(y);
        let p_l = (y - y1) * t1 + y * t2;
        let p_h = y1 * t1;

        Log2Product {
            p_h,
            p_l,
            z: p_l + p_h,
        }
    }

    pub fn high_word(&self) -> i32 {
        high_word(self.z) as i32
    }

    pub fn low_word(&self) -> i32 {
        low_word(self.z) as i32
    }
}

/// `p_h + p_l = n + f` with `n` the nearest integer and `|f| <= 1/2`.
pub struct Exp2Reduction {
    pub p_h: f64,
    pub p_l: f64,
    pub n: i32,
}

/// Splits off the integer part of a product already known not to overflow or
/// underflow.
pub fn exp2(product: &Log2Product) -> Exp2Reduction {
    let j = product.high_word();
    let i = j & 0x7fff_ffff;
    let mut p_h = product.p_h;
    let mut n = 0;

    // |z| > 0.5, so n = [z + 0.5]
    if i > 0x3fe0_0000 {
        let k = (i >> 20) - 0x3ff;
        n = j.wrapping_add(0x0010_0000 >> (k + 1));

        let k = ((n & 0x7fff_ffff) >> 20) - 0x3ff;
        let t = with_high_word(0.0, (n & !(0x000f_ffff >> k)) as u32);

        n = ((n & 0x000f_ffff) | 0x0010_0000) >> (20 - k);
        if j < 0 {
            n = -n;
        }
        p_h -= t;
    }

    Exp2Reduction {
        p_h,
        p_l: product.p_l,
        n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp_reduction() {
        let reduced = exp(0.1);
        assert_eq!((reduced.r, reduced.k), (0.1, 0));

        let reduced = exp(1.0);
        assert_eq!(reduced.k, 1);
        assert!(reduced.r.abs() <= 0.5 * std::f64::consts::LN_2);

        let reduced = exp(-100.0);
        assert_eq!(reduced.k, -144);
        assert!(reduced.r.abs() <= 0.5 * std::f64::consts::LN_2);
    }

    #[test]
    fn log_reduction() {
        let reduced = log(8.0);
        assert_eq!((reduced.f, reduced.k), (0.0, 3));
        assert!(reduced.is_power_of_two());

        let reduced = log(1.5);
        assert_eq!((reduced.f, reduced.k), (-0.25, 1));
        assert!(!reduced.is_power_of_two());

        let reduced = log(f64::from_bits(1));
        assert_eq!((reduced.f, reduced.k), (0.0, -1074));

        let reduced = log(f64::MAX);
        assert_eq!(reduced.k, 1024);
    }

    #[test]
    fn sqrt_reduction() {
        let reduced = half_complement(-0.5);
        assert_eq!((reduced.z, reduced.s), (0.25, 0.5));
    }

    #[test]
    fn atan_reduction() {
        assert_eq!(atan(0.25).breakpoint, None);
        assert_eq!(atan(-0.5).breakpoint, Some(0));
        assert_eq!(atan(1.0).t, 0.0);
        assert_eq!(atan(-1.5).t, 0.0);
        assert_eq!(atan(-1.5).breakpoint, Some(2));
        assert_eq!(atan(1e10).breakpoint, Some(3));
    }

    #[test]
    fn pow_log_reduction() {
        let reduced = pow_log(1.0);
        assert_eq!((reduced.ax, reduced.n, reduced.interval), (1.0, 0, 0));

        let reduced = pow_log(3.0);
        assert_eq!((reduced.ax, reduced.n, reduced.interval), (1.5, 1, 1));

        let reduced = pow_log(7.5);
        assert_eq!((reduced.ax, reduced.n, reduced.interval), (0.9375, 3, 0));

        let reduced = pow_log(f64::from_bits(1));
        assert_eq!((reduced.ax, reduced.n), (1.0, -1074));
    }

    #[test]
    fn exp2_reduction() {
        let product = Log2Product {
            p_h: 10.25,
            p_l: 0.0,
            z: 10.25,
        };
        let reduced = exp2(&product);

        assert_eq!((reduced.n, reduced.p_h), (10, 0.25));

        let product = Log2Product {
            p_h: -3.75,
            p_l: 0.0,
            z: -3.75,
        };
        let reduced = exp2(&product);

        assert_eq!((reduced.n, reduced.p_h), (-4, 0.25));
    }
}
