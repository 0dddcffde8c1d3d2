use super::{Fraction, FractionError, FractionOptions};
use crate::math::{binary_ratio, dec2frac};
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};
use std::convert::TryFrom;

/// Bit length past which numerator and denominator are scaled down before conversion to `f64`,
/// so that each side stays finite.
const MAX_F64_BITS: u64 = 1000;

impl Fraction {
    /// The nearest `f64` to `numerator / denominator`.
    ///
    /// Parts too large for an `f64` are shifted down together first, so `10^400 / 10^399` is
    /// `10.0` rather than `inf / inf`.
    pub fn to_f64(&self) -> f64 {
        let bits = self.numerator.bits().max(self.denominator.bits());
        let (n, d) = if bits > MAX_F64_BITS {
            let shift = bits - MAX_F64_BITS;
            (&self.numerator >> shift, &self.denominator >> shift)
        } else {
            (self.numerator.clone(), self.denominator.clone())
        };
        let n = n.to_f64().unwrap_or(std::f64::NAN);
        let d = d.to_f64().unwrap_or(std::f64::NAN);
        n / d
    }

    /// The integer part, truncated toward zero.
    pub fn trunc(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// The floating-point value rounded to `ndigits` decimal places, halves away from zero.
    /// Negative `ndigits` round to tens, hundreds, and so on.
    pub fn round(&self, ndigits: i32) -> f64 {
        let value = self.to_f64();
        if ndigits < 0 {
            let scale = 10f64.powi(-ndigits);
            return (value / scale).round() * scale;
        }
        let scale = 10f64.powi(ndigits);
        (value * scale).round() / scale
    }

    /// The simplest fraction equal to `num` at `f64` precision, found by walking at most
    /// `max_iter` steps of the Stern-Brocot tree. `0.3333333333333333` becomes `1/3`, where
    /// [TryFrom] would give `3333333333333333/10000000000000000`.
    ///
    /// # Errors
    ///
    /// - [InvalidOperandKind](FractionError::InvalidOperandKind) for NaN and infinities.
    /// - [NonTerminatingReduction](FractionError::NonTerminatingReduction) if no match is found in
    ///   `max_iter` steps.
    pub fn approximate(num: f64, max_iter: u64) -> Result<Fraction, FractionError> {
        if !num.is_finite() {
            return Err(FractionError::InvalidOperandKind(format!(
                "the non-finite float {}",
                num
            )));
        }
        let (numerator, denominator) = dec2frac(num, max_iter)?;
        Fraction::from_parts(numerator, denominator, FractionOptions::default())
    }

    /// The exact binary value of `num`: `0.1` becomes `3602879701896397/36028797018963968`.
    pub fn from_f64_exact(num: f64) -> Result<Fraction, FractionError> {
        let (numerator, denominator) = binary_ratio(num).ok_or_else(|| {
            FractionError::InvalidOperandKind(format!("the non-finite float {}", num))
        })?;
        Fraction::from_parts(numerator, denominator, FractionOptions::default())
    }
}

impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        self.trunc().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.trunc().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Fraction::to_f64(self))
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from_integer(0)
    }

    /// A fraction is "falsy" exactly when its numerator is zero.
    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from_integer(1)
    }
}

macro_rules! fraction_from_integer {
    ($($int:ty),*) => {$(
        impl From<$int> for Fraction {
            fn from(n: $int) -> Self {
                Fraction::from_integer(n)
            }
        }
    )*};
}

fraction_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(num: f64) -> Result<Self, Self::Error> {
        Fraction::new(num, 1)
    }
}

impl TryFrom<f32> for Fraction {
    type Error = FractionError;

    fn try_from(num: f32) -> Result<Self, Self::Error> {
        Fraction::new(num, 1)
    }
}
