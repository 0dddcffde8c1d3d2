use super::{Fraction, FractionError, FractionOptions};
use crate::math::{decimal_ratio, parse_decimal};
use num_bigint::BigInt;
use num_traits::One;
use std::str::FromStr;

/// Anything accepted where a fraction is expected.
///
/// Arithmetic and construction take `impl Into<Operand>`, so integers, floats and fractions can be
/// mixed freely; each is resolved to an exact integer ratio before use:
///
/// - [Integer](Operand::Integer) `v` is `v / 1`.
/// - [Float](Operand::Float) `v` is the decimal `v` prints as, `digits / 10^k`. NaN and infinities
///   are rejected with [InvalidOperandKind](FractionError::InvalidOperandKind).
/// - [Fraction](Operand::Fraction) is taken as is, reduced or not.
#[derive(Clone, Debug)]
pub enum Operand {
    Integer(BigInt),
    Float(f64),
    Fraction(Fraction),
}

impl Operand {
    /// Resolves the operand to an exact, possibly unreduced, `(numerator, denominator)` pair.
    pub(crate) fn into_ratio(self) -> Result<(BigInt, BigInt), FractionError> {
        match self {
            Operand::Integer(n) => Ok((n, BigInt::one())),
            Operand::Float(v) => decimal_ratio(v).ok_or_else(|| {
                FractionError::InvalidOperandKind(format!("the non-finite float {}", v))
            }),
            Operand::Fraction(f) => Ok((f.numerator, f.denominator)),
        }
    }

    /// Resolves the operand to a fraction with default options.
    pub fn into_fraction(self) -> Result<Fraction, FractionError> {
        match self {
            Operand::Fraction(f) => Ok(f),
            other => {
                let (numerator, denominator) = other.into_ratio()?;
                Fraction::from_parts(numerator, denominator, FractionOptions::default())
            }
        }
    }
}

macro_rules! operand_from_integer {
    ($($int:ty),*) => {$(
        impl From<$int> for Operand {
            fn from(n: $int) -> Self {
                Operand::Integer(BigInt::from(n))
            }
        }
    )*};
}

operand_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Operand {
    fn from(n: BigInt) -> Self {
        Operand::Integer(n)
    }
}

impl From<&BigInt> for Operand {
    fn from(n: &BigInt) -> Self {
        Operand::Integer(n.clone())
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Float(v)
    }
}

impl From<f32> for Operand {
    /// Widens through the decimal the `f32` prints as, so `0.1f32` stays `1/10`.
    fn from(v: f32) -> Self {
        Operand::Float(v.to_string().parse().unwrap_or(std::f64::NAN))
    }
}

impl From<Fraction> for Operand {
    fn from(f: Fraction) -> Self {
        Operand::Fraction(f)
    }
}

impl From<&Fraction> for Operand {
    fn from(f: &Fraction) -> Self {
        Operand::Fraction(f.clone())
    }
}

impl FromStr for Operand {
    type Err = FractionError;

    /// Parses a single integer or decimal. Decimals are read exactly, so `"0.1"` is `1/10` even
    /// though `0.1` has no exact `f64` form.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (numerator, denominator) = parse_decimal(text).ok_or_else(|| {
            FractionError::InvalidOperandKind(format!("the text \"{}\"", text.trim()))
        })?;
        if denominator.is_one() {
            return Ok(Operand::Integer(numerator));
        }
        Fraction::from_parts(numerator, denominator, FractionOptions::default())
            .map(Operand::Fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_resolve_over_one() {
        let (n, d) = Operand::from(-7i8).into_ratio().unwrap();
        assert_eq!((n, d), (BigInt::from(-7), BigInt::one()));
        let (n, _) = Operand::from(u128::max_value()).into_ratio().unwrap();
        assert_eq!(n, BigInt::from(u128::max_value()));
    }

    #[test]
    fn floats_resolve_to_decimals() {
        let (n, d) = Operand::from(0.1).into_ratio().unwrap();
        assert_eq!((n, d), (BigInt::from(1), BigInt::from(10)));
        let (n, d) = Operand::from(0.1f32).into_ratio().unwrap();
        assert_eq!((n, d), (BigInt::from(1), BigInt::from(10)));
    }

    #[test]
    fn non_finite_floats_are_invalid() {
        for v in [std::f64::NAN, std::f64::INFINITY, std::f64::NEG_INFINITY].iter() {
            assert!(matches!(
                Operand::from(*v).into_ratio(),
                Err(FractionError::InvalidOperandKind(_))
            ));
        }
        assert!(Operand::from(std::f32::NAN).into_fraction().is_err());
    }

    #[test]
    fn fractions_keep_their_representation() {
        let f = Fraction::with_options(2, 4, FractionOptions::unreduced()).unwrap();
        let (n, d) = Operand::from(&f).into_ratio().unwrap();
        assert_eq!((n, d), (BigInt::from(2), BigInt::from(4)));
    }

    #[test]
    fn parse() {
        assert!(matches!("12".parse::<Operand>(), Ok(Operand::Integer(_))));
        let parsed = "-0.25".parse::<Operand>().unwrap().into_fraction().unwrap();
        assert_eq!(parsed, Fraction::new(-1, 4).unwrap());
        assert!(matches!(
            "x".parse::<Operand>(),
            Err(FractionError::InvalidOperandKind(_))
        ));
        assert!(matches!(
            "1e-200000000".parse::<Operand>(),
            Err(FractionError::InvalidOperandKind(_))
        ));
    }
}
