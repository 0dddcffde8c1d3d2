//! Descriptive statistics, least-squares regression and correlation over exact fractions.
//!
//! Everything that has an exact rational value (sum, mean, median, quartiles, variance, the
//! regression coefficients) is computed as a [Fraction]. Quantities that need a square root
//! (standard deviation, standard error, the correlation coefficient) are `f64`.

use crate::{Fraction, FractionError, Operand};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// A sample needs at least one value.
    Empty,
    /// Paired samples have different lengths.
    LengthMismatch { x: usize, y: usize },
    Fraction(FractionError),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::Empty => write!(f, "A sample must contain at least one value."),
            StatsError::LengthMismatch { x, y } => write!(
                f,
                "Paired samples must have the same length, found {} and {}.",
                x, y
            ),
            StatsError::Fraction(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Fraction(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FractionError> for StatsError {
    fn from(err: FractionError) -> Self {
        StatsError::Fraction(err)
    }
}

/// The median of an already sorted, non-empty slice.
fn median_of(sorted: &[Fraction]) -> Fraction {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (&sorted[mid - 1] + &sorted[mid]) / 2
    } else {
        sorted[mid].clone()
    }
}

/// A non-empty, immutable sample of values.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    values: Vec<Fraction>,
    sorted: Vec<Fraction>,
}

impl Sample {
    /// Collects a sample. Every value is resolved to a fraction; floats keep the decimal they
    /// print as.
    pub fn new<I, T>(values: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        let values = values
            .into_iter()
            .map(|value| value.into().into_fraction())
            .collect::<Result<Vec<_>, _>>()?;
        if values.is_empty() {
            return Err(StatsError::Empty);
        }
        let mut sorted = values.clone();
        sorted.sort();
        Ok(Sample { values, sorted })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values in the order they were given.
    pub fn values(&self) -> &[Fraction] {
        &self.values
    }

    pub fn sum(&self) -> Fraction {
        self.values.iter().sum()
    }

    pub fn mean(&self) -> Fraction {
        self.sum() / self.len() as u64
    }

    pub fn median(&self) -> Fraction {
        median_of(&self.sorted)
    }

    /// The most frequent value, the smallest one among ties.
    pub fn mode(&self) -> &Fraction {
        let mut counts = BTreeMap::new();
        for value in &self.sorted {
            *counts.entry(value).or_insert(0usize) += 1;
        }
        let mut mode = &self.sorted[0];
        let mut times = 0;
        for (value, count) in counts {
            if count > times {
                mode = value;
                times = count;
            }
        }
        mode
    }

    pub fn min(&self) -> &Fraction {
        &self.sorted[0]
    }

    pub fn max(&self) -> &Fraction {
        &self.sorted[self.sorted.len() - 1]
    }

    /// `max - min`.
    pub fn range(&self) -> Fraction {
        self.max() - self.min()
    }

    /// The median of the lower half of the sorted values, excluding the middle value of an odd
    /// count. A single value is its own quartile.
    pub fn q1(&self) -> Fraction {
        let half = &self.sorted[..self.len() / 2];
        if half.is_empty() {
            return self.median();
        }
        median_of(half)
    }

    /// The median of the upper half of the sorted values; see [q1](Self::q1).
    pub fn q3(&self) -> Fraction {
        let n = self.len();
        let half = &self.sorted[(n + 1) / 2..];
        if half.is_empty() {
            return self.median();
        }
        median_of(half)
    }

    /// The interquartile range, `q3 - q1`.
    pub fn iqr(&self) -> Fraction {
        self.q3() - self.q1()
    }

    /// `(q1 - 1.5 · iqr, q3 + 1.5 · iqr)`. Values strictly outside are outliers.
    pub fn outlier_bounds(&self) -> (Fraction, Fraction) {
        let fence = self.iqr() * 3 / 2;
        (self.q1() - &fence, self.q3() + fence)
    }

    pub fn is_outlier(&self, value: &Fraction) -> bool {
        let (low, high) = self.outlier_bounds();
        *value < low || *value > high
    }

    /// The outliers, in the order they were given.
    pub fn outliers(&self) -> Vec<&Fraction> {
        let (low, high) = self.outlier_bounds();
        self.values
            .iter()
            .filter(|value| **value < low || **value > high)
            .collect()
    }

    /// The mean absolute deviation from the mean.
    pub fn average_deviation(&self) -> Fraction {
        let mean = self.mean();
        let total: Fraction = self.values.iter().map(|value| (value - &mean).abs()).sum();
        total / self.len() as u64
    }

    /// The sum of squared deviations from the mean.
    fn sum_of_squares(&self) -> Fraction {
        let mean = self.mean();
        self.values
            .iter()
            .map(|value| {
                let deviation = value - &mean;
                &deviation * &deviation
            })
            .sum()
    }

    /// The sample variance, with `n - 1` in the denominator. Zero for a single value.
    pub fn variance(&self) -> Fraction {
        if self.len() == 1 {
            return Fraction::from(0);
        }
        self.sum_of_squares() / (self.len() as u64 - 1)
    }

    pub fn standard_deviation(&self) -> f64 {
        self.variance().to_f64().sqrt()
    }

    /// `standard_deviation / sqrt(n)`.
    pub fn standard_error(&self) -> f64 {
        self.standard_deviation() / (self.len() as f64).sqrt()
    }

    /// The population covariance with a paired sample, `Σ (x - x̄)(y - ȳ) / n`.
    pub fn covariance(&self, other: &Sample) -> Result<Fraction, StatsError> {
        Ok(co_deviation(self, other)? / self.len() as u64)
    }
}

/// `Σ (x - x̄)(y - ȳ)` over paired values.
fn co_deviation(x: &Sample, y: &Sample) -> Result<Fraction, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    let (x_mean, y_mean) = (x.mean(), y.mean());
    Ok(x.values
        .iter()
        .zip(y.values.iter())
        .map(|(a, b)| (a - &x_mean) * (b - &y_mean))
        .sum())
}

/// Pearson's correlation coefficient of paired samples.
///
/// # Errors
///
/// - [LengthMismatch](StatsError::LengthMismatch) if the samples differ in length.
/// - [DivisionByZero](FractionError::DivisionByZero) if either sample is constant.
pub fn correlation(x: &Sample, y: &Sample) -> Result<f64, StatsError> {
    let s_xy = co_deviation(x, y)?;
    let spread = x.sum_of_squares() * y.sum_of_squares();
    if spread == Fraction::from(0) {
        return Err(FractionError::DivisionByZero.into());
    }
    Ok(s_xy.to_f64() / spread.to_f64().sqrt())
}

/// How strong a correlation is, by `|r|`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strength {
    /// `|r| >= 0.8`
    Strong,
    /// `0.4 <= |r| < 0.8`
    Medium,
    /// `|r| < 0.4`
    Weak,
}

impl Strength {
    pub fn of(r: f64) -> Strength {
        let r = r.abs();
        if r >= 0.8 {
            Strength::Strong
        } else if r >= 0.4 {
            Strength::Medium
        } else {
            Strength::Weak
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strength::Strong => "STRONG",
            Strength::Medium => "MEDIUM",
            Strength::Weak => "WEAK",
        };
        write!(f, "{}", name)
    }
}

/// The least-squares line `y = slope · x + y_intercept` through paired samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Regression {
    slope: Fraction,
    y_intercept: Fraction,
    r: f64,
    len: usize,
}

impl Regression {
    /// Fits `y` against `x`.
    ///
    /// # Errors
    ///
    /// As [correlation]: the samples must have the same length and neither may be constant.
    pub fn new(x: &Sample, y: &Sample) -> Result<Self, StatsError> {
        let r = correlation(x, y)?;
        let slope = co_deviation(x, y)?.checked_div(x.sum_of_squares())?;
        let y_intercept = y.mean() - &slope * x.mean();
        log::debug!("fitted y = {}x + {}, r = {}", slope, y_intercept, r);
        Ok(Regression {
            slope,
            y_intercept,
            r,
            len: x.len(),
        })
    }

    pub fn slope(&self) -> &Fraction {
        &self.slope
    }

    pub fn y_intercept(&self) -> &Fraction {
        &self.y_intercept
    }

    /// Number of points the line was fitted to.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The predicted `y` at `x`.
    pub fn predict<X: Into<Operand>>(&self, x: X) -> Result<Fraction, FractionError> {
        Ok(self.slope.checked_mul(x)? + &self.y_intercept)
    }

    /// The `x` at which the line reaches `y`. Fails for a flat line.
    pub fn inverse<Y: Into<Operand>>(&self, y: Y) -> Result<Fraction, FractionError> {
        let y = y.into().into_fraction()?;
        (y - &self.y_intercept).checked_div(&self.slope)
    }

    /// The correlation coefficient of the fitted samples.
    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn r_squared(&self) -> f64 {
        self.r * self.r
    }

    pub fn strength(&self) -> Strength {
        Strength::of(self.r)
    }
}

impl fmt::Display for Regression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4}x + {:.4}",
            self.slope.to_f64(),
            self.y_intercept.to_f64()
        )
    }
}
