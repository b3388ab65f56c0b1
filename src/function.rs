//! Names for the entry points, for tools that pick a function at run time.

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::functions;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Function {
    Exp,
    Log,
    Log10,
    Pow,
    Acos,
    Asin,
    Atan2,
}

impl Function {
    /// Number of operands the function takes.
    pub fn arity(self) -> usize {
        match self {
            Function::Pow | Function::Atan2 => 2,
            _ => 1,
        }
    }

    /// Applies the function. Unary functions ignore `b`, and `atan2` takes `y`
    /// as `a` and `x` as `b`.
    pub fn evaluate(self, a: f64, b: f64) -> f64 {
        match self {
            Function::Exp => functions::exp(a),
            Function::Log => functions::log(a),
            Function::Log10 => functions::log10(a),
            Function::Pow => functions::pow(a, b),
            Function::Acos => functions::acos(a),
            Function::Asin => functions::asin(a),
            Function::Atan2 => functions::atan2(a, b),
        }
    }
}
