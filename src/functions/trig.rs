use crate::approx::{asin_ratio, atan_series};
use crate::bits::high_word;
use crate::special::{self, Atan2Args, ACOS, ASIN, ATAN, ATAN2};
use crate::{assemble, reduce};

fn magnitude_word(x: f64) -> u32 {
    high_word(x) & 0x7fff_ffff
}

/// Returns the arcsine of `x`, in `[-pi/2, pi/2]`.
///
/// Inputs outside `[-1, 1]` give NaN.
pub fn asin(x: f64) -> f64 {
    if let Some(result) = special::resolve(&ASIN, &x) {
        return result;
    }

    let ix = magnitude_word(x);

    if ix < 0x3fe0_0000 {
        return x + x * asin_ratio(x * x);
    }

    let reduced = reduce::half_complement(x);
    let ratio = asin_ratio(reduced.z);

    let y = if ix >= 0x3fef_3333 {
        assemble::asin_near_one(&reduced, ratio)
    } else {
        assemble::asin_middle(&reduced, ratio)
    };

    if x.is_sign_negative() {
        -y
    } else {
        y
    }
}

/// Returns the arccosine of `x`, in `[0, pi]`.
///
/// Inputs outside `[-1, 1]` give NaN.
pub fn acos(x: f64) -> f64 {
    if let Some(result) = special::resolve(&ACOS, &x) {
        return result;
    }

    if magnitude_word(x) < 0x3fe0_0000 {
        return assemble::acos_middle(x, asin_ratio(x * x));
    }

    let reduced = reduce::half_complement(x);
    let ratio = asin_ratio(reduced.z);

    if x.is_sign_negative() {
        assemble::acos_negative(&reduced, ratio)
    } else {
        assemble::acos_positive(&reduced, ratio)
    }
}

/// Returns the arctangent of `x`, in `[-pi/2, pi/2]`.
pub(crate) fn atan(x: f64) -> f64 {
    if let Some(result) = special::resolve(&ATAN, &x) {
        return result;
    }

    let reduced = reduce::atan(x);

    assemble::atan(&reduced, atan_series(reduced.t), x.is_sign_negative())
}

/// Returns the angle of the point `(x, y)` from the positive x axis, in
/// `[-pi, pi]`.
///
/// The ratio `|y/x|` is passed to `atan`, which handles ratios above one
/// through `-1/t`, and the quadrant is restored from the operand signs.
///
/// # Examples
///
/// ```
/// # use strictmath::atan2;
/// #
/// assert_eq!(atan2(0.0, -1.0), std::f64::consts::PI);
/// assert_eq!(atan2(-0.0, -1.0), -std::f64::consts::PI);
/// assert_eq!(atan2(1.0, 0.0), std::f64::consts::FRAC_PI_2);
/// ```
pub fn atan2(y: f64, x: f64) -> f64 {
    let args = Atan2Args::new(y, x);

    if let Some(result) = special::resolve(&ATAN2, &args) {
        return result;
    }

    // |y/x| < 2^-64 with x < 0 rounds to pi without an atan
    let z = if args.m & 2 != 0 && args.iy.wrapping_add(64 << 20) < args.ix {
        0.0
    } else {
        atan((y / x).abs())
    };

    assemble::atan2_quadrant(z, args.m)
}
