use super::{Fraction, FractionError, FractionOptions, Operand};
use num_traits::{One, Zero};
use std::fmt;
use std::str::FromStr;

impl fmt::Display for Fraction {
    /// `0` for zero, the bare numerator for whole fractions, and `numerator/denominator`
    /// otherwise. Unreduced fractions print as stored, so `2/4` prints as `2/4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numerator.is_zero() {
            return write!(f, "0");
        }
        if self.denominator.is_one() {
            return write!(f, "{}", self.numerator);
        }
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Fraction {
    /// Parses `"n"` or `"n/d"` into a fraction with the given options. Each side is an integer or
    /// a decimal and may be surrounded by whitespace: `"3"`, `"-3/4"`, `"3.08 / 4"`.
    ///
    /// With [persistent_denominator](FractionOptions::persistent_denominator), `"0/18"` keeps its
    /// denominator.
    pub fn parse_with_options(text: &str, options: FractionOptions) -> Result<Self, FractionError> {
        let mut sides = text.split('/');
        let numerator = sides.next().unwrap_or_default().parse::<Operand>()?;
        let denominator = match sides.next() {
            Some(side) => side.parse::<Operand>()?,
            None => Operand::from(1),
        };
        if sides.next().is_some() {
            return Err(FractionError::InvalidOperandKind(format!(
                "the text \"{}\" with more than one '/'",
                text.trim()
            )));
        }
        Fraction::with_options(numerator, denominator, options)
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parses with default options. See [parse_with_options](Fraction::parse_with_options).
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Fraction::parse_with_options(text, FractionOptions::default())
    }
}
