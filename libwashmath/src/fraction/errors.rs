//! Errors produced while constructing or operating on fractions.

use crate::math::Dec2FracError;
use std::fmt;

/// Why a fraction could not be constructed or an operation could not be carried out.
#[derive(Debug, Clone, PartialEq)]
pub enum FractionError {
    /// An operand is not an integer, a finite float, or a fraction. Carries a description of the
    /// offending value.
    InvalidOperandKind(String),
    /// The denominator resolved to zero, at construction or through division.
    DivisionByZero,
    /// `0^0`, which is left undefined.
    ZeroPowerOfZero,
    /// A non-integral power of a negative fraction.
    NegativeRoot,
    /// A non-integral power whose result is not a fraction, such as `2^(1/2)`.
    IrrationalPower,
    /// No fraction equal to a decimal was found within the iteration budget.
    NonTerminatingReduction {
        /// Number of iterations tried.
        num_iter: u64,
        /// The error at the last iteration.
        decimal_error: f64,
    },
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperandKind(what) => write!(
                f,
                "Expected an integer, a finite float, or a fraction, found {}.",
                what
            ),
            Self::DivisionByZero => write!(f, "0 cannot be the denominator of a fraction."),
            Self::ZeroPowerOfZero => write!(f, "Cannot raise 0 to the zeroth power."),
            Self::NegativeRoot => write!(f, "Cannot take a root of a negative fraction."),
            Self::IrrationalPower => write!(f, "The power has no exact fractional value."),
            Self::NonTerminatingReduction {
                num_iter,
                decimal_error,
            } => write!(
                f,
                "Failed to find an exact fraction representation after {} iterations. \
                The error at this precision is {}.",
                num_iter, decimal_error
            ),
        }
    }
}

impl std::error::Error for FractionError {}

impl From<Dec2FracError> for FractionError {
    fn from(err: Dec2FracError) -> Self {
        Self::NonTerminatingReduction {
            num_iter: err.num_iter,
            decimal_error: err.decimal_error,
        }
    }
}
