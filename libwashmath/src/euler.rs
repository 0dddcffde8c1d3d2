//! The Euler method for first-order ODEs `dy/dx = f(x, y)`.
//!
//! Starting from `(x0, y0)`, each step moves `x` by the step size `h` and `y` by `h · f(x, y)`,
//! all in exact fractions.

use crate::{Fraction, FractionError};
use num_traits::Zero;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// When [euler] stops stepping.
#[derive(Clone, Debug, PartialEq)]
pub enum Stop {
    /// After exactly this many steps.
    Steps(usize),
    /// Once `y >= target`. Gives up with [EulerError::StepLimit] after `max_steps` steps.
    Until { target: Fraction, max_steps: usize },
}

/// One row of the Euler table. Row 0 is the initial value.
#[derive(Clone, Debug, PartialEq)]
pub struct EulerStep {
    pub index: usize,
    pub x: Fraction,
    pub y: Fraction,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EulerError {
    /// `y` did not reach the target of a [Stop::Until] within its step budget.
    StepLimit { steps: usize },
    Fraction(FractionError),
}

impl fmt::Display for EulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EulerError::StepLimit { steps } => {
                write!(f, "Target was not reached after {} steps.", steps)
            }
            EulerError::Fraction(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for EulerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EulerError::Fraction(err) => Some(err),
            EulerError::StepLimit { .. } => None,
        }
    }
}

impl From<FractionError> for EulerError {
    fn from(err: FractionError) -> Self {
        EulerError::Fraction(err)
    }
}

/// Runs the Euler method and returns every row, starting with `(x0, y0)`.
///
/// `slope` is `f(x, y)`. Errors it returns abort the run.
pub fn euler<F>(
    step_size: &Fraction,
    x0: Fraction,
    y0: Fraction,
    stop: &Stop,
    mut slope: F,
) -> Result<Vec<EulerStep>, EulerError>
where
    F: FnMut(&Fraction, &Fraction) -> Result<Fraction, FractionError>,
{
    let mut rows = vec![EulerStep {
        index: 0,
        x: x0,
        y: y0,
    }];
    loop {
        let last = &rows[rows.len() - 1];
        let steps = last.index;
        match stop {
            Stop::Steps(limit) if steps >= *limit => break,
            Stop::Until { target, .. } if last.y >= *target => break,
            Stop::Until { max_steps, .. } if steps >= *max_steps => {
                return Err(EulerError::StepLimit { steps })
            }
            _ => {}
        }

        let dy = slope(&last.x, &last.y)? * step_size;
        let next = EulerStep {
            index: steps + 1,
            x: &last.x + step_size,
            y: &last.y + dy,
        };
        log::trace!("euler step {}: ({}, {})", next.index, next.x, next.y);
        rows.push(next);
    }
    Ok(rows)
}

/// Like [euler], returning only the final `y`.
pub fn euler_final<F>(
    step_size: &Fraction,
    x0: Fraction,
    y0: Fraction,
    stop: &Stop,
    slope: F,
) -> Result<Fraction, EulerError>
where
    F: FnMut(&Fraction, &Fraction) -> Result<Fraction, FractionError>,
{
    let mut rows = euler(step_size, x0, y0, stop, slope)?;
    Ok(rows.pop().map(|row| row.y).unwrap_or_else(Fraction::zero))
}

/// The slope field `dy/dx = a·x + b·y + c`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSlope {
    pub a: Fraction,
    pub b: Fraction,
    pub c: Fraction,
}

impl LinearSlope {
    pub fn slope(&self, x: &Fraction, y: &Fraction) -> Fraction {
        &self.a * x + &self.b * y + &self.c
    }
}

impl fmt::Display for LinearSlope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dy/dx = ({})x + ({})y + ({})", self.a, self.b, self.c)
    }
}

impl FromStr for LinearSlope {
    type Err = FractionError;

    /// Parses the coefficients `"a,b,c"`, each a fraction such as `1/2` or `-0.5`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let coefficients = text
            .split(',')
            .map(str::parse::<Fraction>)
            .collect::<Result<Vec<_>, _>>()?;
        match <[Fraction; 3]>::try_from(coefficients) {
            Ok([a, b, c]) => Ok(LinearSlope { a, b, c }),
            Err(_) => Err(FractionError::InvalidOperandKind(format!(
                "the slope \"{}\", which needs exactly three coefficients",
                text.trim()
            ))),
        }
    }
}
