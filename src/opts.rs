use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use argh::FromArgs;
use log::LevelFilter;

use crate::conformance::Sampler;
use crate::function::Function;

/// Deterministic libm, checked bit for bit against a reference.
#[derive(FromArgs)]
pub struct Opts {
    /// logging level
    #[argh(option, long = "log", default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,

    #[argh(subcommand)]
    pub command: Command,
}

impl Opts {
    /// Parse options from `env::args`.
    pub fn parse() -> Opts {
        argh::from_env()
    }
}

#[derive(FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Eval(EvalOpts),
    Sweep(SweepOpts),
    Bench(BenchOpts),
}

/// Evaluate a function and compare it with the reference. Negative operands
/// go after `--`.
#[derive(FromArgs)]
#[argh(subcommand, name = "eval")]
pub struct EvalOpts {
    /// function name
    #[argh(positional)]
    pub function: Function,

    /// operands, as floats or as 0x-prefixed 16-digit bit patterns
    #[argh(positional)]
    pub operands: Vec<Operand>,

    /// print the exact rational value of the result
    #[argh(switch)]
    pub exact: bool,
}

/// Compare functions with the reference on random operands.
#[derive(FromArgs)]
#[argh(subcommand, name = "sweep")]
pub struct SweepOpts {
    /// function to check (default: all)
    #[argh(option)]
    pub function: Option<Function>,

    /// operand distribution: magnitude, bits or scaled
    #[argh(option, default = "Sampler::Magnitude")]
    pub sampler: Sampler,

    /// samples per function
    #[argh(option, default = "1_000_000")]
    pub trials: u64,

    /// random seed
    #[argh(option, default = "0")]
    pub seed: u64,
}

/// Time log and pow against the reference.
#[derive(FromArgs)]
#[argh(subcommand, name = "bench")]
pub struct BenchOpts {
    /// operand pairs to evaluate
    #[argh(option, default = "1_000_000")]
    pub iterations: usize,

    /// random seed
    #[argh(option, default = "0")]
    pub seed: u64,
}

/// A command-line operand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Operand(pub f64);

impl FromStr for Operand {
    type Err = ParseOperandError;

    /// Parses a float literal (`1.5`, `-inf`, `NaN`) or a bit pattern written
    /// as `0x` and exactly 16 hex digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(digits) = s.strip_prefix("0x") else {
            return Ok(Operand(s.parse()?));
        };

        if digits.len() != 16 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseOperandError::BitPattern);
        }

        let bits = u64::from_str_radix(digits, 16)?;

        Ok(Operand(f64::from_bits(bits)))
    }
}

#[derive(Debug, PartialEq)]
pub enum ParseOperandError {
    Float(ParseFloatError),
    BitPattern,
}

impl From<ParseFloatError> for ParseOperandError {
    fn from(err: ParseFloatError) -> Self {
        ParseOperandError::Float(err)
    }
}

impl From<ParseIntError> for ParseOperandError {
    fn from(_: ParseIntError) -> Self {
        ParseOperandError::BitPattern
    }
}

impl fmt::Display for ParseOperandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseOperandError::Float(err) => write!(f, "invalid operand: {err}"),
            ParseOperandError::BitPattern => {
                write!(f, "bit patterns are `0x` followed by 16 hex digits")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operands() {
        assert_eq!("1.5".parse(), Ok(Operand(1.5)));
        assert_eq!("-inf".parse(), Ok(Operand(f64::NEG_INFINITY)));
        assert_eq!("0x3ff0000000000000".parse(), Ok(Operand(1.0)));

        let bits = |s: &str| s.parse::<Operand>().map(|x| x.0.to_bits());

        assert_eq!(bits("0x8000000000000000"), Ok(1 << 63));
        assert_eq!(bits("0x7ff0000000000001"), Ok(0x7ff0_0000_0000_0001));
        assert!("NaN".parse::<Operand>().is_ok_and(|x| x.0.is_nan()));
    }

    #[test]
    fn malformed_operands() {
        assert_eq!("0x3ff".parse::<Operand>(), Err(ParseOperandError::BitPattern));
        assert_eq!(
            "0x+ff0000000000000".parse::<Operand>(),
            Err(ParseOperandError::BitPattern)
        );
        assert!(matches!("one".parse::<Operand>(), Err(ParseOperandError::Float(_))));
    }

    #[test]
    fn subcommands() {
        let args = ["--log", "debug", "eval", "pow", "2", "0.5"];
        let opts = Opts::from_args(&["strictmath"], &args)
            .unwrap_or_else(|_| panic!("eval should parse"));

        assert_eq!(opts.log_level, LevelFilter::Debug);

        let Command::Eval(eval) = opts.command else {
            panic!("expected eval");
        };

        assert_eq!(eval.function, Function::Pow);
        assert_eq!(eval.operands, [Operand(2.0), Operand(0.5)]);

        let args = ["sweep", "--sampler", "bits", "--trials", "10"];
        let opts = Opts::from_args(&["strictmath"], &args)
            .unwrap_or_else(|_| panic!("sweep should parse"));

        let Command::Sweep(sweep) = opts.command else {
            panic!("expected sweep");
        };

        assert_eq!(sweep.function, None);
        assert_eq!(sweep.sampler, Sampler::Bits);
        assert_eq!(sweep.trials, 10);
    }
}
