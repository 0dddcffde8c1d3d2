use super::{Fraction, FractionError, Operand};
use num_bigint::BigInt;
use std::iter::Product;

impl Fraction {
    /// `a/b · c/d = (a·c) / (b·d)`.
    fn mul_ratio(&self, numerator: &BigInt, denominator: &BigInt) -> Fraction {
        Fraction::from_nonzero_parts(
            &self.numerator * numerator,
            &self.denominator * denominator,
            self.options,
        )
    }

    fn mul_ratio_assign(&mut self, numerator: &BigInt, denominator: &BigInt) {
        self.numerator *= numerator;
        self.denominator *= denominator;
        self.normalize();
    }

    /// `self · rhs` for any [Operand].
    pub fn checked_mul<R: Into<Operand>>(&self, rhs: R) -> Result<Fraction, FractionError> {
        let (n, d) = rhs.into().into_ratio()?;
        Ok(self.mul_ratio(&n, &d))
    }

    /// `self *= rhs` for any [Operand]. `self` is unchanged on error.
    pub fn try_mul_assign<R: Into<Operand>>(&mut self, rhs: R) -> Result<(), FractionError> {
        let (n, d) = rhs.into().into_ratio()?;
        self.mul_ratio_assign(&n, &d);
        Ok(())
    }
}

forward_binop!(impl Mul, mul => mul_ratio);
forward_assign_op!(impl MulAssign, mul_assign => mul_ratio_assign);

impl Product for Fraction {
    fn product<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::from_integer(1), |mut acc, f| {
            acc *= f;
            acc
        })
    }
}

impl<'a> Product<&'a Fraction> for Fraction {
    fn product<I: Iterator<Item = &'a Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::from_integer(1), |mut acc, f| {
            acc *= f;
            acc
        })
    }
}
