//! Trigonometric and exponential functions by Taylor series.
//!
//! Each series is summed exactly in [Fraction]s over a fixed number of terms, then converted to
//! `f64` by the caller if needed. Angles are in radians; [to_radians] converts from degrees.
//! Before summing, trigonometric arguments are wrapped into `[-2π, 2π]` with [wrap_angle] so the
//! default term counts converge.

use crate::math::factorial;
use crate::{Fraction, FractionError};
use num_traits::{One, Zero};
use std::fmt;
use std::str::FromStr;

/// Terms summed for the trigonometric series.
pub const DEFAULT_TERMS: u32 = 33;
/// Terms summed for the exponential series, counting the constant term.
pub const DEFAULT_EXP_TERMS: u32 = 50;

/// π to 15 decimal places, `3141592653589793 / 10^15`. Its `f64` value is [std::f64::consts::PI].
pub fn pi() -> Fraction {
    Fraction::from_integer(3_141_592_653_589_793i64) / 1_000_000_000_000_000i64
}

/// `degrees · π / 180`.
pub fn to_radians(degrees: &Fraction) -> Fraction {
    degrees * pi() / 180
}

/// `x` reduced by whole turns of `2π`, truncating toward zero, so the result has the sign of `x`
/// and magnitude at most `2π`.
pub fn wrap_angle(x: &Fraction) -> Fraction {
    let turn: Fraction = pi() * 2;
    if x.abs() <= turn {
        return x.clone();
    }
    let turns = (x / &turn).trunc();
    x - turn * turns
}

/// `Σ (±1)^n · x^k / k!` for `k = first, first + stride, …`, over `terms` terms.
fn taylor(x: &Fraction, terms: u32, first: u32, stride: u32, alternate: bool) -> Fraction {
    let mut power = Fraction::one();
    for _ in 0..first {
        power *= x;
    }
    let mut step = Fraction::one();
    for _ in 0..stride {
        step *= x;
    }

    let mut sum = Fraction::zero();
    let mut k = first;
    for n in 0..terms {
        let term = &power / factorial(k);
        if alternate && n % 2 == 1 {
            sum -= term;
        } else {
            sum += term;
        }
        power *= &step;
        k += stride;
    }
    sum
}

/// `sin x = Σ (-1)^n x^(2n+1) / (2n+1)!`.
pub fn sin(x: &Fraction, terms: u32) -> Fraction {
    log::debug!("sin({}) over {} terms", x, terms);
    taylor(&wrap_angle(x), terms, 1, 2, true)
}

/// `cos x = Σ (-1)^n x^(2n) / (2n)!`.
pub fn cos(x: &Fraction, terms: u32) -> Fraction {
    log::debug!("cos({}) over {} terms", x, terms);
    taylor(&wrap_angle(x), terms, 0, 2, true)
}

/// `sin x / cos x`. Fails only if the cosine series sums to exactly zero.
pub fn tan(x: &Fraction, terms: u32) -> Result<Fraction, FractionError> {
    sin(x, terms).checked_div(cos(x, terms))
}

/// `1 / cos x`.
pub fn sec(x: &Fraction, terms: u32) -> Result<Fraction, FractionError> {
    cos(x, terms).inverse()
}

/// `1 / sin x`. Fails at `x = 0`.
pub fn csc(x: &Fraction, terms: u32) -> Result<Fraction, FractionError> {
    sin(x, terms).inverse()
}

/// `e^x = Σ x^n / n!`. The argument is not wrapped.
pub fn exp(x: &Fraction, terms: u32) -> Fraction {
    log::debug!("exp({}) over {} terms", x, terms);
    taylor(x, terms, 0, 1, false)
}

/// A function computed by series, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
    Sec,
    Csc,
    Exp,
}

impl TrigFunction {
    /// Whether the argument is an angle, and so may be given in degrees.
    pub fn takes_angle(self) -> bool {
        self != TrigFunction::Exp
    }

    /// The term count the function is usually summed over.
    pub fn default_terms(self) -> u32 {
        match self {
            TrigFunction::Exp => DEFAULT_EXP_TERMS,
            _ => DEFAULT_TERMS,
        }
    }

    pub fn evaluate(self, x: &Fraction, terms: u32) -> Result<Fraction, FractionError> {
        match self {
            TrigFunction::Sin => Ok(sin(x, terms)),
            TrigFunction::Cos => Ok(cos(x, terms)),
            TrigFunction::Tan => tan(x, terms),
            TrigFunction::Sec => sec(x, terms),
            TrigFunction::Csc => csc(x, terms),
            TrigFunction::Exp => Ok(exp(x, terms)),
        }
    }
}

impl fmt::Display for TrigFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrigFunction::Sin => "sin",
            TrigFunction::Cos => "cos",
            TrigFunction::Tan => "tan",
            TrigFunction::Sec => "sec",
            TrigFunction::Csc => "csc",
            TrigFunction::Exp => "exp",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TrigFunction {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sin" => Ok(TrigFunction::Sin),
            "cos" => Ok(TrigFunction::Cos),
            "tan" => Ok(TrigFunction::Tan),
            "sec" => Ok(TrigFunction::Sec),
            "csc" => Ok(TrigFunction::Csc),
            "exp" => Ok(TrigFunction::Exp),
            other => Err(format!("unknown function \"{}\"", other)),
        }
    }
}
