use crate::approx::{log2_extended, log2_near_one};
use crate::assemble;
use crate::bits::FloatBits;
use crate::reduce::{self, Log2Product};
use crate::special::{self, Parity, PowArgs, POW};

/// Returns `x` raised to the power `y`.
///
/// `pow(x, 0)` and `pow(1, y)` are `1` for every `x` and `y`, NaN included. A
/// negative base with a non-integer exponent gives NaN, and with an odd
/// integer exponent gives a negative result.
///
/// # Examples
///
/// ```
/// # use strictmath::pow;
/// #
/// assert_eq!(pow(0.0, 0.0), 1.0);
/// assert_eq!(pow(10.0, 3.0), 1000.0);
/// assert_eq!(pow(-2.0, 3.0), -8.0);
/// assert_eq!(pow(f64::NAN, 0.0), 1.0);
/// assert!(pow(-2.0, 0.5).is_nan());
/// ```
pub fn pow(x: f64, y: f64) -> f64 {
    let args = PowArgs::new(x, y);

    if let Some(result) = special::resolve(&POW, &args) {
        return result;
    }

    if let Some(result) = exact_integer_power(&args) {
        return result;
    }

    let sign = args.result_sign();
    let ax = x.abs();

    // |y| > 2^31 only reaches here with |x - 1| <= 2^-20
    let (t1, t2) = if args.iy > 0x41e0_0000 {
        log2_near_one(ax)
    } else {
        log2_extended(&reduce::pow_log(ax))
    };

    let product = Log2Product::new(y, t1, t2);

    if let Some(result) = special::pow_limits(&product, sign) {
        return result;
    }

    sign * assemble::pow(&reduce::exp2(&product))
}

/// Computes `x^y` for an integer `1 < |y| < 2^31` by repeated squaring, as long
/// as every intermediate product is exact.
///
/// When that holds the true power is representable and is the correctly
/// rounded result, so no further rounding can differ. For negative `y` the
/// reciprocal is only exact when the power is a power of two.
fn exact_integer_power(args: &PowArgs) -> Option<f64> {
    if args.parity == Parity::NonInteger || args.iy >= 0x41e0_0000 {
        return None;
    }

    let mut n = args.y.abs() as u32;

    if n <= 1 {
        return None;
    }

    let mut square = args.x.abs();
    let mut acc = 1.0;

    loop {
        if n & 1 == 1 {
            acc = exact_product(acc, square)?;
        }

        n >>= 1;
        if n == 0 {
            break;
        }

        square = exact_product(square, square)?;
    }

    if args.hy < 0 {
        if !FloatBits::from(acc).is_power_of_two() {
            return None;
        }
        acc = 1.0 / acc;
    }

    Some(args.result_sign() * acc)
}

/// Multiplies two positive values whose product fits in 53 bits and lands in
/// the normal range, and so is exact.
fn exact_product(a: f64, b: f64) -> Option<f64> {
    let bits = FloatBits::from(a).significant_bits() + FloatBits::from(b).significant_bits();

    if bits > 53 {
        return None;
    }

    let product = a * b;

    (product.is_finite() && product > f64::MIN_POSITIVE).then_some(product)
}
