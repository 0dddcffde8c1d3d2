use super::{Fraction, FractionError};
use num_traits::{Signed, Zero};
use std::ops::Neg;

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(mut self) -> Fraction {
        self.numerator = -self.numerator;
        self
    }
}

impl<'a> Neg for &'a Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        -self.clone()
    }
}

impl Fraction {
    /// `|self|`.
    pub fn abs(&self) -> Fraction {
        let mut abs = self.clone();
        abs.numerator = abs.numerator.abs();
        abs
    }

    /// `1 / self`, swapping numerator and denominator.
    pub fn inverse(&self) -> Result<Fraction, FractionError> {
        if self.numerator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Fraction::from_nonzero_parts(
            self.denominator.clone(),
            self.numerator.clone(),
            self.options,
        ))
    }

    /// `-1`, `0` or `1`, matching the sign of `self`.
    pub fn signum(&self) -> Fraction {
        Fraction::from_integer(self.numerator.signum())
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }
}
