//! The public entry points.
//!
//! Each function checks its special-value rules, reduces the argument,
//! evaluates the kernel and reassembles the result. All of them are total:
//! every input pattern maps to a defined output pattern, and none allocate,
//! panic or touch shared state.

mod exp;
mod log;
mod pow;
mod trig;

pub use exp::exp;
pub use self::log::{log, log10};
pub use pow::pow;
pub use trig::{acos, asin, atan2};

pub(crate) use trig::atan;

#[cfg(test)]
pub(crate) mod testing {
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::bits::canonical_bits;

    pub fn assert_same(name: &str, operands: &[f64], actual: f64, expected: f64) {
        assert_eq!(
            canonical_bits(actual),
            canonical_bits(expected),
            "{name}({}) = {actual:e} ({:#018x}), expected {expected:e} ({:#018x})",
            operands.iter().map(|x| format!("{x:e}")).join(", "),
            actual.to_bits(),
            expected.to_bits(),
        );
    }

    /// Boundary values shared by every function's tests.
    pub const EDGES: [f64; 24] = [
        0.0,
        -0.0,
        1.0,
        -1.0,
        0.5,
        -0.5,
        2.0,
        -2.0,
        1.5,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        4.9e-324,
        -4.9e-324,
        f64::MAX,
        f64::MIN,
        f64::EPSILON,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
        709.782712893383973096,
        -745.13321910194110842,
        0.975,
        1e-300,
        1e300,
    ];

    /// A mix of arbitrary bit patterns and moderate values `±m * 2^e`.
    pub fn operands(seed: u64, count: usize) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);

        (0..count)
            .map(|i| {
                if i % 2 == 0 {
                    f64::from_bits(rng.random())
                } else {
                    let m: f64 = rng.random();
                    let e: i32 = rng.random_range(-16..=10);
                    let sign = if rng.random() { -1.0 } else { 1.0 };

                    sign * m * f64::powi(2.0, e)
                }
            })
            .collect()
    }
}
