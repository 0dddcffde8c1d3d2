//! Integer and decimal algorithms the [Fraction][crate::Fraction] type is built on.
//!
//! Everything here works on plain integers (`BigInt` or primitives) and floats, never on
//! fractions, so that the fraction type can depend on it without a cycle:
//!
//! - [gcd] and [lcm] drive reduction and common-denominator comparison.
//! - [parse_decimal] and [decimal_ratio] turn decimal text and floats into exact integer ratios.
//! - [dec2frac] searches for the simplest fraction close to a float.
//! - [factorial], [permutations] and [combinations] supply series coefficients.

mod gcd;
pub use gcd::*;

mod decimal;
pub use decimal::*;

mod dec2frac;
pub use dec2frac::*;

mod combinatorics;
pub use combinatorics::*;
