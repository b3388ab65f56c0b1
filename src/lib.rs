//! Deterministic double-precision `exp`, `log`, `log10`, `pow`, `asin`, `acos`
//! and `atan2`.
//!
//! Every function returns the same 64-bit pattern as the `libm` crate for
//! every input, signed zeros and NaN propagation included, independent of the
//! platform's own math library.

pub mod approx;
pub mod assemble;
pub mod bits;
#[cfg(feature = "conformance")]
pub mod conformance;
pub mod function;
pub mod functions;
#[cfg(feature = "conformance")]
pub mod opts;
pub mod reduce;
pub mod special;

pub use function::Function;
pub use functions::{acos, asin, atan2, exp, log, log10, pow};
