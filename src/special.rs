//! Special-value rules checked before any reduction runs.
//!
//! Each function owns an ordered table of [`Rule`]s. The first rule whose
//! predicate holds decides the result, and the general pipeline only sees
//! inputs that no rule claims. Outcomes are written as the arithmetic that
//! produces them (`(x - x) / 0.0` rather than a NaN constant) so that the NaN
//! payloads and rounding of the result come out of the same operations every
//! time.

use crate::approx::{
    ATAN_HI, EXP_OVERFLOW, EXP_UNDERFLOW, HUGE, OVT, PI, PIO2_HI, TINY, X1P_120,
};
use crate::bits::{high_word, low_word};
use crate::function::Function;
use crate::reduce::Log2Product;

/// A boundary case: a predicate over the operands and the result it forces.
pub struct Rule<A> {
    pub name: &'static str,
    pub applies: fn(&A) -> bool,
    pub outcome: fn(&A) -> f64,
}

impl<A> Rule<A> {
    pub fn apply(&self, args: &A) -> f64 {
        (self.outcome)(args)
    }
}

/// Finds the first rule in `rules` that claims `args`.
pub fn first_match<'a, A>(rules: &'a [Rule<A>], args: &A) -> Option<&'a Rule<A>> {
    rules.iter().find(|rule| (rule.applies)(args))
}

/// Resolves `args` against `rules`, if any rule claims them.
pub fn resolve<A>(rules: &[Rule<A>], args: &A) -> Option<f64> {
    first_match(rules, args).map(|rule| rule.apply(args))
}

/// Names the rule that decides `function` at the given operands, if the
/// general computation does not.
///
/// Unary functions ignore `b`; `atan2` takes `y` as `a` and `x` as `b`.
pub fn explain(function: Function, a: f64, b: f64) -> Option<&'static str> {
    let rule = match function {
        Function::Exp => first_match(&EXP, &a)?.name,
        Function::Log | Function::Log10 => first_match(&LOG, &a)?.name,
        Function::Pow => first_match(&POW, &PowArgs::new(a, b))?.name,
        Function::Asin => first_match(&ASIN, &a)?.name,
        Function::Acos => first_match(&ACOS, &a)?.name,
        Function::Atan2 => first_match(&ATAN2, &Atan2Args::new(a, b))?.name,
    };

    Some(rule)
}

fn magnitude_word(x: f64) -> u32 {
    high_word(x) & 0x7fff_ffff
}

pub static EXP: [Rule<f64>; 4] = [
    Rule {
        name: "nan",
        applies: |x| x.is_nan(),
        outcome: |&x| x,
    },
    Rule {
        name: "overflow",
        applies: |&x| x > EXP_OVERFLOW,
        outcome: |&x| x * f64::from_bits(0x7fe0_0000_0000_0000),
    },
    Rule {
        name: "underflow",
        applies: |&x| x < EXP_UNDERFLOW,
        outcome: |_| 0.0,
    },
    Rule {
        name: "tiny",
        applies: |&x| magnitude_word(x) <= 0x3e30_0000,
        outcome: |&x| 1.0 + x,
    },
];

/// Shared by `log` and `log10`.
pub static LOG: [Rule<f64>; 4] = [
    Rule {
        name: "zero",
        applies: |x| x.to_bits() << 1 == 0,
        outcome: |&x| -1.0 / (x * x),
    },
    Rule {
        name: "negative",
        applies: |x| x.is_sign_negative(),
        outcome: |&x| (x - x) / 0.0,
    },
    Rule {
        name: "infinite or nan",
        applies: |&x| high_word(x) >= 0x7ff0_0000,
        outcome: |&x| x,
    },
    Rule {
        name: "one",
        applies: |&x| x.to_bits() == 1.0f64.to_bits(),
        outcome: |_| 0.0,
    },
];

pub static ASIN: [Rule<f64>; 3] = [
    Rule {
        name: "one",
        applies: |&x| x.abs().to_bits() == 1.0f64.to_bits(),
        outcome: |&x| x * PIO2_HI + X1P_120,
    },
    Rule {
        name: "out of domain",
        applies: |&x| magnitude_word(x) >= 0x3ff0_0000,
        outcome: |&x| 0.0 / (x - x),
    },
    Rule {
        name: "tiny",
        applies: |&x| (0x0010_0000..0x3e50_0000).contains(&magnitude_word(x)),
        outcome: |&x| x,
    },
];

pub static ACOS: [Rule<f64>; 4] = [
    Rule {
        name: "one",
        applies: |&x| x.to_bits() == 1.0f64.to_bits(),
        outcome: |_| 0.0,
    },
    Rule {
        name: "minus one",
        applies: |&x| x.to_bits() == (-1.0f64).to_bits(),
        outcome: |_| 2.0 * PIO2_HI + X1P_120,
    },
    Rule {
        name: "out of domain",
        applies: |&x| magnitude_word(x) >= 0x3ff0_0000,
        outcome: |&x| 0.0 / (x - x),
    },
    Rule {
        name: "tiny",
        applies: |&x| magnitude_word(x) <= 0x3c60_0000,
        outcome: |_| PIO2_HI + X1P_120,
    },
];

/// Used by `atan2` whenever `x` is exactly one.
pub static ATAN: [Rule<f64>; 3] = [
    Rule {
        name: "nan",
        applies: |x| x.is_nan(),
        outcome: |&x| x,
    },
    Rule {
        name: "huge",
        applies: |&x| magnitude_word(x) >= 0x4410_0000,
        outcome: |&x| {
            let z = ATAN_HI[3] + X1P_120;

            if x.is_sign_negative() {
                -z
            } else {
                z
            }
        },
    },
    Rule {
        name: "tiny",
        applies: |&x| magnitude_word(x) < 0x3e40_0000,
        outcome: |&x| x,
    },
];

/// Whether a `pow` exponent is an integer, and if so of which parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    NonInteger,
    Odd,
    Even,
}

impl Parity {
    /// Classifies `y` from its bits. Everything at or above `2^53` is even,
    /// infinities and NaNs included, so callers deal with those first.
    pub fn of(y: f64) -> Parity {
        let iy = magnitude_word(y) as i32;
        let ly = low_word(y);

        if iy >= 0x4340_0000 {
            return Parity::Even;
        }
        if iy < 0x3ff0_0000 {
            return Parity::NonInteger;
        }

        // unbiased exponent; the units bit lies in the low word when k > 20
        let k = (iy >> 20) - 0x3ff;

        let units = if k > 20 {
            let j = ly >> (52 - k);
            (j << (52 - k) == ly).then_some(j)
        } else if ly == 0 {
            let j = iy >> (20 - k);
            (j << (20 - k) == iy).then_some(j as u32)
        } else {
            None
        };

        match units {
            Some(j) if j & 1 == 1 => Parity::Odd,
            Some(_) => Parity::Even,
            None => Parity::NonInteger,
        }
    }
}

/// The operands of `pow` split into their words.
#[derive(Clone, Copy, Debug)]
pub struct PowArgs {
    pub x: f64,
    pub y: f64,
    pub hx: i32,
    pub lx: u32,
    pub hy: i32,
    pub ly: u32,
    pub ix: i32,
    pub iy: i32,
    pub parity: Parity,
}

impl PowArgs {
    pub fn new(x: f64, y: f64) -> PowArgs {
        let hx = high_word(x) as i32;
        let hy = high_word(y) as i32;

        PowArgs {
            x,
            y,
            hx,
            lx: low_word(x),
            hy,
            ly: low_word(y),
            ix: hx & 0x7fff_ffff,
            iy: hy & 0x7fff_ffff,
            parity: Parity::of(y),
        }
    }

    /// `-1` for a negative base raised to an odd integer, `1` otherwise.
    pub fn result_sign(&self) -> f64 {
        if self.hx < 0 && self.parity == Parity::Odd {
            -1.0
        } else {
            1.0
        }
    }

    fn is_nan(&self) -> bool {
        self.ix > 0x7ff0_0000
            || (self.ix == 0x7ff0_0000 && self.lx != 0)
            || self.iy > 0x7ff0_0000
            || (self.iy == 0x7ff0_0000 && self.ly != 0)
    }
}

pub static POW: [Rule<PowArgs>; 11] = [
    Rule {
        name: "y is zero",
        applies: |a| (a.iy as u32 | a.ly) == 0,
        outcome: |_| 1.0,
    },
    Rule {
        name: "x is one",
        applies: |a| a.hx == 0x3ff0_0000 && a.lx == 0,
        outcome: |_| 1.0,
    },
    Rule {
        name: "nan",
        applies: PowArgs::is_nan,
        outcome: |a| a.x + a.y,
    },
    Rule {
        name: "y is infinite",
        applies: |a| a.ly == 0 && a.iy == 0x7ff0_0000,
        outcome: |a| {
            if a.ix == 0x3ff0_0000 && a.lx == 0 {
                1.0
            } else if a.ix >= 0x3ff0_0000 {
                if a.hy >= 0 {
                    a.y
                } else {
                    0.0
                }
            } else if a.hy >= 0 {
                0.0
            } else {
                -a.y
            }
        },
    },
    Rule {
        name: "y is one",
        applies: |a| a.ly == 0 && a.iy == 0x3ff0_0000,
        outcome: |a| if a.hy >= 0 { a.x } else { 1.0 / a.x },
    },
    Rule {
        name: "y is two",
        applies: |a| a.ly == 0 && a.hy == 0x4000_0000,
        outcome: |a| a.x * a.x,
    },
    Rule {
        name: "y is one half",
        applies: |a| a.ly == 0 && a.hy == 0x3fe0_0000 && a.hx >= 0,
        outcome: |a| a.x.sqrt(),
    },
    Rule {
        name: "x is zero, one or infinite",
        applies: |a| a.lx == 0 && matches!(a.ix, 0 | 0x3ff0_0000 | 0x7ff0_0000),
        outcome: |a| {
            let mut z = a.x.abs();

            if a.hy < 0 {
                z = 1.0 / z;
            }

            if a.hx < 0 {
                if a.ix == 0x3ff0_0000 && a.parity == Parity::NonInteger {
                    z = (z - z) / (z - z);
                } else if a.parity == Parity::Odd {
                    z = -z;
                }
            }

            z
        },
    },
    Rule {
        name: "negative x, non-integer y",
        applies: |a| a.hx < 0 && a.parity == Parity::NonInteger,
        outcome: |a| (a.x - a.x) / (a.x - a.x),
    },
    Rule {
        name: "y beyond 2^64",
        applies: |a| a.iy > 0x43f0_0000,
        outcome: |a| {
            if a.ix <= 0x3fef_ffff {
                if a.hy < 0 {
                    HUGE * HUGE
                } else {
                    TINY * TINY
                }
            } else if a.hy > 0 {
                HUGE * HUGE
            } else {
                TINY * TINY
            }
        },
    },
    Rule {
        name: "y beyond 2^31, x away from one",
        applies: |a| a.iy > 0x41e0_0000 && (a.ix < 0x3fef_ffff || a.ix > 0x3ff0_0000),
        outcome: |a| {
            let s = a.result_sign();
            let overflows = if a.ix < 0x3fef_ffff {
                a.hy < 0
            } else {
                a.hy > 0
            };

            if overflows {
                s * HUGE * HUGE
            } else {
                s * TINY * TINY
            }
        },
    },
];

/// Catches `y*log2|x|` products whose power of two cannot be represented.
pub fn pow_limits(product: &Log2Product, sign: f64) -> Option<f64> {
    let j = product.high_word();
    let i = product.low_word();

    if j >= 0x4090_0000 {
        // z >= 1024
        if (j - 0x4090_0000) | i != 0 || product.p_l + OVT > product.z - product.p_h {
            return Some(sign * HUGE * HUGE);
        }
    } else if (j & 0x7fff_ffff) >= 0x4090_cc00 {
        // z <= -1075
        if ((j as u32).wrapping_sub(0xc090_cc00) | i as u32) != 0
            || product.p_l <= product.z - product.p_h
        {
            return Some(sign * TINY * TINY);
        }
    }

    None
}

/// The operands of `atan2` with the quadrant index `m = 2*sign(x) + sign(y)`.
#[derive(Clone, Copy, Debug)]
pub struct Atan2Args {
    pub y: f64,
    pub x: f64,
    pub ix: u32,
    pub lx: u32,
    pub iy: u32,
    pub ly: u32,
    pub m: u32,
}

impl Atan2Args {
    pub fn new(y: f64, x: f64) -> Atan2Args {
        let ix = high_word(x);
        let iy = high_word(y);

        Atan2Args {
            y,
            x,
            ix: ix & 0x7fff_ffff,
            lx: low_word(x),
            iy: iy & 0x7fff_ffff,
            ly: low_word(y),
            m: ((iy >> 31) & 1) | ((ix >> 30) & 2),
        }
    }

    fn right_angle(&self) -> f64 {
        if self.m & 1 != 0 {
            -PI / 2.0
        } else {
            PI / 2.0
        }
    }
}

pub static ATAN2: [Rule<Atan2Args>; 7] = [
    Rule {
        name: "nan",
        applies: |a| a.x.is_nan() || a.y.is_nan(),
        outcome: |a| a.x + a.y,
    },
    Rule {
        name: "x is one",
        applies: |a| a.x.to_bits() == 1.0f64.to_bits(),
        outcome: |a| crate::functions::atan(a.y),
    },
    Rule {
        name: "y is zero",
        applies: |a| (a.iy | a.ly) == 0,
        outcome: |a| match a.m {
            0 | 1 => a.y,
            2 => PI,
            _ => -PI,
        },
    },
    Rule {
        name: "x is zero",
        applies: |a| (a.ix | a.lx) == 0,
        outcome: Atan2Args::right_angle,
    },
    Rule {
        name: "both infinite",
        applies: |a| a.ix == 0x7ff0_0000 && a.iy == 0x7ff0_0000,
        outcome: |a| match a.m {
            0 => PI / 4.0,
            1 => -PI / 4.0,
            2 => 3.0 * PI / 4.0,
            _ => -3.0 * PI / 4.0,
        },
    },
    Rule {
        name: "x is infinite",
        applies: |a| a.ix == 0x7ff0_0000,
        outcome: |a| match a.m {
            0 => 0.0,
            1 => -0.0,
            2 => PI,
            _ => -PI,
        },
    },
    Rule {
        name: "ratio beyond 2^64",
        applies: |a| a.ix.wrapping_add(64 << 20) < a.iy || a.iy == 0x7ff0_0000,
        outcome: Atan2Args::right_angle,
    },
];
