use crate::special::{self, EXP};
use crate::{assemble, reduce};

/// Returns `e^x`.
///
/// Overflows to `+inf` above about `709.78` and underflows to `+0` below about
/// `-745.13`, with subnormal results in between rounded once.
///
/// # Examples
///
/// ```
/// # use strictmath::exp;
/// #
/// assert_eq!(exp(0.0), 1.0);
/// assert_eq!(exp(f64::NEG_INFINITY), 0.0);
/// assert_eq!(exp(1000.0), f64::INFINITY);
/// ```
pub fn exp(x: f64) -> f64 {
    if let Some(result) = special::resolve(&EXP, &x) {
        return result;
    }

    assemble::exp(&reduce::exp(x))
}
