use crate::approx::log_kernel;
use crate::special::{self, LOG};
use crate::{assemble, reduce};

/// Returns the natural logarithm of `x`.
///
/// Negative inputs, `-inf` included, give NaN. Both zeros give `-inf`, and
/// `log(1.0)` is exactly `+0.0`.
pub fn log(x: f64) -> f64 {
    if let Some(result) = special::resolve(&LOG, &x) {
        return result;
    }

    let reduce::LogReduction { f, k } = reduce::log(x);

    assemble::log(f, k, &log_kernel(f))
}

/// Returns the base-10 logarithm of `x`.
///
/// Exact powers of two, subnormal ones included, skip the kernel and are
/// computed as `k*log10(2)` from a split constant.
///
/// # Examples
///
/// ```
/// # use strictmath::log10;
/// #
/// assert_eq!(log10(2.0), 0.3010299956639812);
/// assert_eq!(log10(1000.0), 3.0);
/// assert_eq!(log10(0.0), f64::NEG_INFINITY);
/// assert!(log10(-1.0).is_nan());
/// ```
pub fn log10(x: f64) -> f64 {
    if let Some(result) = special::resolve(&LOG, &x) {
        return result;
    }

    let reduced = reduce::log(x);

    if reduced.is_power_of_two() {
        return assemble::log10_power_of_two(reduced.k);
    }

    assemble::log10(reduced.f, reduced.k, &log_kernel(reduced.f))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::functions::testing::{assert_same, operands, EDGES};

    #[test]
    fn scenarios() {
        assert_eq!(log(1.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(log10(1.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(log(0.0), f64::NEG_INFINITY);
        assert_eq!(log(-0.0), f64::NEG_INFINITY);
        assert_eq!(log10(0.0), f64::NEG_INFINITY);
        assert_eq!(log(f64::INFINITY), f64::INFINITY);
        assert_eq!(log10(10.0), 1.0);
        assert_eq!(log10(2.0).to_bits(), 0.3010299956639812f64.to_bits());
        assert_eq!(log10(2.0).to_bits(), libm::log10(2.0).to_bits());
    }

    #[test]
    fn domain_rejection() {
        for x in [-0.5, -1.0, -2.0, -4.9e-324, f64::MIN, f64::NEG_INFINITY] {
            assert!(log(x).is_nan(), "log({x:e})");
            assert!(log10(x).is_nan(), "log10({x:e})");
        }
    }

    #[test]
    fn powers_of_two() {
        for k in -1074..=1023 {
            let x = crate::assemble::scalbn(1.0, k);

            assert_same("log10", &[x], log10(x), libm::log10(x));
            assert_same("log", &[x], log(x), libm::log(x));
        }
    }

    #[test]
    fn matches_reference() {
        for x in EDGES.into_iter().chain(operands(2, 100_000)) {
            assert_same("log", &[x], log(x), libm::log(x));
            assert_same("log10", &[x], log10(x), libm::log10(x));
        }
    }

    #[test]
    fn near_one() {
        let mut x = 1.0 - f64::powi(2.0, -10);

        for _ in 0..20_000 {
            assert_same("log", &[x], log(x), libm::log(x));
            assert_same("log10", &[x], log10(x), libm::log10(x));
            x += f64::powi(2.0, -23) + f64::EPSILON;
        }
    }
}
