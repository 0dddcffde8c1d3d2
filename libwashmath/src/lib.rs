//! Exact rational arithmetic and a few numeric helpers built on it.
//!
//! The core of the crate is [Fraction], an arbitrary-precision fraction that keeps itself in
//! lowest terms. The remaining modules are small consumers of it:
//!
//! - [series]: Taylor-series trigonometric and exponential functions.
//! - [euler]: the Euler method for first-order ODEs.
//! - [stats]: summary statistics, least-squares regression and correlation.
//! - [vector]: three-component vectors of fractions.

mod fraction;
pub use fraction::Fraction;
pub use fraction::FractionError;
pub use fraction::FractionOptions;
pub use fraction::Operand;

mod math;
pub use math::{combinations, factorial, permutations};

#[cfg(feature = "benchmark-internals")]
pub use math::*;

pub mod euler;
pub mod series;
pub mod stats;
pub mod vector;
