use super::{Fraction, FractionError, Operand};
use num_bigint::BigInt;
use std::iter::Sum;

impl Fraction {
    /// `a/b ± c/d`. Equal denominators combine numerators directly; otherwise both sides are
    /// cross-multiplied to `(a·d ± c·b) / (b·d)`. The result takes the options of `self`.
    fn combine_ratio(&self, numerator: &BigInt, denominator: &BigInt, subtract: bool) -> Fraction {
        let (n, d) = if self.denominator == *denominator {
            let n = if subtract {
                &self.numerator - numerator
            } else {
                &self.numerator + numerator
            };
            (n, self.denominator.clone())
        } else {
            let lhs = &self.numerator * denominator;
            let rhs = numerator * &self.denominator;
            let n = if subtract { lhs - rhs } else { lhs + rhs };
            (n, &self.denominator * denominator)
        };
        Fraction::from_nonzero_parts(n, d, self.options)
    }

    fn combine_ratio_assign(&mut self, numerator: &BigInt, denominator: &BigInt, subtract: bool) {
        if self.denominator != *denominator {
            let rhs = numerator * &self.denominator;
            self.numerator *= denominator;
            self.denominator *= denominator;
            if subtract {
                self.numerator -= rhs;
            } else {
                self.numerator += rhs;
            }
        } else if subtract {
            self.numerator -= numerator;
        } else {
            self.numerator += numerator;
        }
        self.normalize();
    }

    fn add_ratio(&self, numerator: &BigInt, denominator: &BigInt) -> Fraction {
        self.combine_ratio(numerator, denominator, false)
    }

    fn sub_ratio(&self, numerator: &BigInt, denominator: &BigInt) -> Fraction {
        self.combine_ratio(numerator, denominator, true)
    }

    fn add_ratio_assign(&mut self, numerator: &BigInt, denominator: &BigInt) {
        self.combine_ratio_assign(numerator, denominator, false)
    }

    fn sub_ratio_assign(&mut self, numerator: &BigInt, denominator: &BigInt) {
        self.combine_ratio_assign(numerator, denominator, true)
    }

    /// `self + rhs` for any [Operand], failing only if `rhs` is not a valid operand.
    pub fn checked_add<R: Into<Operand>>(&self, rhs: R) -> Result<Fraction, FractionError> {
        let (n, d) = rhs.into().into_ratio()?;
        Ok(self.add_ratio(&n, &d))
    }

    /// `self - rhs` for any [Operand].
    pub fn checked_sub<R: Into<Operand>>(&self, rhs: R) -> Result<Fraction, FractionError> {
        let (n, d) = rhs.into().into_ratio()?;
        Ok(self.sub_ratio(&n, &d))
    }

    /// `self += rhs` for any [Operand]. `self` is unchanged on error.
    pub fn try_add_assign<R: Into<Operand>>(&mut self, rhs: R) -> Result<(), FractionError> {
        let (n, d) = rhs.into().into_ratio()?;
        self.add_ratio_assign(&n, &d);
        Ok(())
    }

    /// `self -= rhs` for any [Operand]. `self` is unchanged on error.
    pub fn try_sub_assign<R: Into<Operand>>(&mut self, rhs: R) -> Result<(), FractionError> {
        let (n, d) = rhs.into().into_ratio()?;
        self.sub_ratio_assign(&n, &d);
        Ok(())
    }
}

forward_binop!(impl Add, add => add_ratio);
forward_binop!(impl Sub, sub => sub_ratio);
forward_assign_op!(impl AddAssign, add_assign => add_ratio_assign);
forward_assign_op!(impl SubAssign, sub_assign => sub_ratio_assign);

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::from_integer(0), |mut acc, f| {
            acc += f;
            acc
        })
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::from_integer(0), |mut acc, f| {
            acc += f;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FractionOptions;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn add() {
        assert_eq!(frac(1, 2) + frac(1, 3), frac(5, 6));
        assert_eq!(frac(1, 4) + frac(1, 4), frac(1, 2));
        assert_eq!(&frac(1, 2) + &frac(-1, 2), frac(0, 1));
        assert_eq!(frac(1, 2) + 1, frac(3, 2));
        assert_eq!(frac(1, 2) + num_bigint::BigInt::from(2), frac(5, 2));
    }

    #[test]
    fn sub() {
        assert_eq!(frac(1, 2) - frac(1, 3), frac(1, 6));
        assert_eq!(frac(1, 3) - frac(1, 2), frac(-1, 6));
        assert_eq!(frac(3, 4) - frac(1, 4), frac(1, 2));
        assert_eq!(frac(1, 2) - 1, frac(-1, 2));
        assert_eq!(&frac(1, 2) - 2i64, frac(-3, 2));
    }

    #[test]
    fn checked_with_floats() {
        assert_eq!(frac(1, 2).checked_add(0.25).unwrap(), frac(3, 4));
        assert_eq!(frac(1, 2).checked_sub(0.75).unwrap(), frac(-1, 4));
        assert!(frac(1, 2).checked_add(std::f64::NAN).is_err());
    }

    #[test]
    fn assign() {
        let mut f = frac(1, 6);
        f += frac(1, 3);
        assert_eq!(f, frac(1, 2));
        f -= &frac(1, 2);
        assert_eq!(f, frac(0, 1));
        assert_eq!(f.denominator(), &num_bigint::BigInt::from(1));
        f += 3;
        assert_eq!(f, frac(3, 1));
        f.try_sub_assign(0.5).unwrap();
        assert_eq!(f, frac(5, 2));
        assert!(f.try_add_assign(std::f64::INFINITY).is_err());
        assert_eq!(f, frac(5, 2));
    }

    #[test]
    fn result_keeps_left_options() {
        let unreduced = Fraction::with_options(1, 4, FractionOptions::unreduced()).unwrap();
        let sum = &unreduced + &frac(1, 4);
        assert!(!sum.auto_reduce());
        assert_eq!(sum.numerator(), &num_bigint::BigInt::from(2));
        assert_eq!(sum.denominator(), &num_bigint::BigInt::from(4));

        let reduced = frac(1, 4) + unreduced;
        assert!(reduced.auto_reduce());
        assert_eq!(reduced.denominator(), &num_bigint::BigInt::from(2));
    }

    #[test]
    fn sum() {
        let values = vec![frac(1, 2), frac(1, 3), frac(1, 6)];
        assert_eq!(values.iter().sum::<Fraction>(), frac(1, 1));
        assert_eq!(values.into_iter().sum::<Fraction>(), frac(1, 1));
        assert_eq!(Vec::<Fraction>::new().into_iter().sum::<Fraction>(), frac(0, 1));
    }
}
