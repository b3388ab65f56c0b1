//! Bit-exact comparison of every entry point against the `libm` crate.
//!
//! Operands are drawn from a seeded generator, so a failing sweep can be
//! replayed from its seed alone.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use strum_macros::{Display, EnumString};

use crate::bits::same_bits;
use crate::function::Function;

/// Mismatches kept in a [`Report`] beyond the count.
pub const MAX_EXAMPLES: usize = 8;

/// A distribution of operands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Sampler {
    /// Uniform over `[-MAX, MAX]`. Almost every sample is huge.
    #[default]
    Magnitude,
    /// Uniform over all bit patterns, NaN payloads and subnormals included.
    Bits,
    /// `±m * 2^e` with `m` in `[0, 1)` and `e` in `[-16, 10]`.
    Scaled,
}

impl Sampler {
    pub fn sample<R: Rng>(self, rng: &mut R) -> f64 {
        match self {
            Sampler::Magnitude => (rng.random::<f64>() * 2.0 - 1.0) * f64::MAX,
            Sampler::Bits => f64::from_bits(rng.random()),
            Sampler::Scaled => {
                let m: f64 = rng.random();
                let e = rng.random_range(-16..=10);
                let sign = if rng.random() { -1.0 } else { 1.0 };

                sign * m * f64::powi(2.0, e)
            }
        }
    }
}

/// Evaluates `function` with the reference implementation.
pub fn reference(function: Function, a: f64, b: f64) -> f64 {
    match function {
        Function::Exp => libm::exp(a),
        Function::Log => libm::log(a),
        Function::Log10 => libm::log10(a),
        Function::Pow => libm::pow(a, b),
        Function::Acos => libm::acos(a),
        Function::Asin => libm::asin(a),
        Function::Atan2 => libm::atan2(a, b),
    }
}

/// An input on which the two implementations disagree.
#[derive(Clone, Copy, Debug)]
pub struct Mismatch {
    pub function: Function,
    pub operands: [f64; 2],
    pub expected: f64,
    pub actual: f64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands = self.operands[..self.function.arity()]
            .iter()
            .map(|x| format!("{x:e}"))
            .join(", ");

        write!(
            f,
            "{}({operands}): expected {:e} ({:#018x}), got {:e} ({:#018x})",
            self.function,
            self.expected,
            self.expected.to_bits(),
            self.actual,
            self.actual.to_bits(),
        )
    }
}

/// The outcome of a sweep.
#[derive(Clone, Debug)]
pub struct Report {
    pub function: Function,
    pub sampler: Sampler,
    pub trials: u64,
    pub mismatches: u64,
    pub examples: SmallVec<[Mismatch; MAX_EXAMPLES]>,
}

impl Report {
    fn new(function: Function, sampler: Sampler) -> Report {
        Report {
            function,
            sampler,
            trials: 0,
            mismatches: 0,
            examples: SmallVec::new(),
        }
    }

    fn record(&mut self, mismatch: Mismatch) {
        self.mismatches += 1;

        if self.examples.len() < MAX_EXAMPLES {
            log::warn!("{mismatch}");
            self.examples.push(mismatch);
        }
    }

    pub fn is_conformant(&self) -> bool {
        self.mismatches == 0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} {} samples differ",
            self.function, self.mismatches, self.trials, self.sampler
        )
    }
}

/// Compares `function` with the reference on `trials` sampled inputs.
pub fn sweep(function: Function, sampler: Sampler, trials: u64, seed: u64) -> Report {
    log::debug!("sweeping {function} over {trials} {sampler} samples, seed {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = Report::new(function, sampler);

    for _ in 0..trials {
        let a = sampler.sample(&mut rng);
        let b = if function.arity() == 2 {
            sampler.sample(&mut rng)
        } else {
            0.0
        };

        let actual = function.evaluate(a, b);
        let expected = reference(function, a, b);

        report.trials += 1;

        if !same_bits(actual, expected) {
            report.record(Mismatch {
                function,
                operands: [a, b],
                expected,
                actual,
            });
        }
    }

    log::info!("{report}");

    report
}

/// Time spent on the same `log` and `pow` workload by each implementation.
#[derive(Clone, Copy, Debug)]
pub struct Timing {
    pub iterations: usize,
    pub ours: Duration,
    pub reference: Duration,
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} iterations of log and pow: strictmath {:?}, libm {:?}",
            self.iterations, self.ours, self.reference
        )
    }
}

/// Times `log(a)` followed by `pow(a, b)` over magnitude-sampled operands.
pub fn bench(iterations: usize, seed: u64) -> Timing {
    let mut rng = StdRng::seed_from_u64(seed);
    let operands: Vec<(f64, f64)> = (0..iterations)
        .map(|_| {
            let a = Sampler::Magnitude.sample(&mut rng);
            let b = Sampler::Magnitude.sample(&mut rng);

            (a, b)
        })
        .collect();

    let time = |log: fn(f64) -> f64, pow: fn(f64, f64) -> f64| {
        let start = Instant::now();

        for &(a, b) in &operands {
            black_box(log(black_box(a)));
            black_box(pow(black_box(a), black_box(b)));
        }

        start.elapsed()
    };

    let reference = time(libm::log, libm::pow);
    let ours = time(crate::log, crate::pow);

    log::debug!("benchmarked {iterations} iterations, seed {seed}");

    Timing {
        iterations,
        ours,
        reference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use strum::IntoEnumIterator;

    #[test]
    fn magnitude_sweep() {
        for function in Function::iter() {
            let report = sweep(function, Sampler::Magnitude, 1_000_000, 0x5eed);

            assert_eq!(report.trials, 1_000_000);
            assert!(report.is_conformant(), "{report}: {:?}", report.examples);
        }
    }

    #[test]
    fn bits_and_scaled_sweeps() {
        let samplers = [Sampler::Bits, Sampler::Scaled];

        for (function, sampler) in Function::iter().cartesian_product(samplers) {
            let report = sweep(function, sampler, 200_000, 17);

            assert!(report.is_conformant(), "{report}: {:?}", report.examples);
        }
    }

    #[test]
    fn samplers() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..10_000 {
            let x = Sampler::Magnitude.sample(&mut rng);
            assert!(x.is_finite());

            let x = Sampler::Scaled.sample(&mut rng);
            assert!(x.abs() < 1024.0);
        }

        assert_eq!("scaled".parse::<Sampler>(), Ok(Sampler::Scaled));
        assert_eq!(Sampler::default().to_string(), "magnitude");
    }

    #[test]
    fn reports() {
        let mut report = Report::new(Function::Pow, Sampler::Bits);

        for i in 0..20 {
            report.record(Mismatch {
                function: Function::Pow,
                operands: [2.0, f64::from(i)],
                expected: 1.0,
                actual: 2.0,
            });
        }

        assert!(!report.is_conformant());
        assert_eq!(report.mismatches, 20);
        assert_eq!(report.examples.len(), MAX_EXAMPLES);
        assert_eq!(
            report.examples[1].to_string(),
            "pow(2e0, 1e0): expected 1e0 (0x3ff0000000000000), got 2e0 (0x4000000000000000)"
        );
    }

    #[test]
    fn sweeps_are_reproducible() {
        let first = sweep(Function::Atan2, Sampler::Scaled, 1000, 99);
        let second = sweep(Function::Atan2, Sampler::Scaled, 1000, 99);

        assert_eq!(first.trials, second.trials);
        assert_eq!(first.mismatches, second.mismatches);
    }
}
