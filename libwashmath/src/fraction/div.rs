use super::{Fraction, FractionError, Operand};
use num_bigint::BigInt;
use num_traits::{One, Zero};

impl Fraction {
    /// `a/b ÷ c/d = (a·d) / (b·c)`.
    ///
    /// A whole divisor that divides the numerator exactly divides only the numerator, so an
    /// unreduced `6/4 ÷ 3` is `2/4`.
    fn div_ratio(
        &self,
        numerator: &BigInt,
        denominator: &BigInt,
    ) -> Result<Fraction, FractionError> {
        if numerator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        let (n, d) = if denominator.is_one() && (&self.numerator % numerator).is_zero() {
            (&self.numerator / numerator, self.denominator.clone())
        } else {
            (&self.numerator * denominator, &self.denominator * numerator)
        };
        Ok(Fraction::from_nonzero_parts(n, d, self.options))
    }

    fn div_ratio_assign(
        &mut self,
        numerator: &BigInt,
        denominator: &BigInt,
    ) -> Result<(), FractionError> {
        if numerator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        if denominator.is_one() && (&self.numerator % numerator).is_zero() {
            self.numerator /= numerator;
        } else {
            self.numerator *= denominator;
            self.denominator *= numerator;
        }
        self.normalize();
        Ok(())
    }

    fn div_ratio_or_panic(&self, numerator: &BigInt, denominator: &BigInt) -> Fraction {
        match self.div_ratio(numerator, denominator) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }

    fn div_ratio_assign_or_panic(&mut self, numerator: &BigInt, denominator: &BigInt) {
        if let Err(err) = self.div_ratio_assign(numerator, denominator) {
            panic!("{}", err);
        }
    }

    /// `self ÷ rhs` for any [Operand].
    ///
    /// # Errors
    ///
    /// [DivisionByZero](FractionError::DivisionByZero) if `rhs` is zero, or
    /// [InvalidOperandKind](FractionError::InvalidOperandKind) if it is not a valid operand.
    pub fn checked_div<R: Into<Operand>>(&self, rhs: R) -> Result<Fraction, FractionError> {
        let (n, d) = rhs.into().into_ratio()?;
        self.div_ratio(&n, &d)
    }

    /// `self /= rhs` for any [Operand]. `self` is unchanged on error.
    pub fn try_div_assign<R: Into<Operand>>(&mut self, rhs: R) -> Result<(), FractionError> {
        let (n, d) = rhs.into().into_ratio()?;
        self.div_ratio_assign(&n, &d)
    }
}

// Like integer division, `/` and `/=` panic on a zero divisor; `checked_div` and
// `try_div_assign` report it instead.
forward_binop!(impl Div, div => div_ratio_or_panic);
forward_assign_op!(impl DivAssign, div_assign => div_ratio_assign_or_panic);
