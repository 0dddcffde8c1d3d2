use super::{Fraction, FractionError, Operand};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

impl Fraction {
    /// Raises the fraction to an integral power.
    ///
    /// - `power = 0` yields `1`, except that `0^0` is
    ///   [ZeroPowerOfZero](FractionError::ZeroPowerOfZero).
    /// - `power > 0` raises numerator and denominator independently.
    /// - `power < 0` inverts first, so a zero fraction fails with
    ///   [DivisionByZero](FractionError::DivisionByZero).
    ///
    /// The result takes the options of `self`.
    pub fn pow(&self, power: i32) -> Result<Fraction, FractionError> {
        match power {
            0 if self.numerator.is_zero() => Err(FractionError::ZeroPowerOfZero),
            0 => Ok(Fraction::from_nonzero_parts(
                BigInt::one(),
                BigInt::one(),
                self.options,
            )),
            1 => Ok(self.clone()),
            p if p > 1 => Ok(self.raise(p as u32)),
            p => Ok(self.inverse()?.raise(p.unsigned_abs())),
        }
    }

    /// `self = self^power`. `self` is unchanged on error.
    pub fn pow_assign(&mut self, power: i32) -> Result<(), FractionError> {
        let result = self.pow(power)?;
        self.numerator = result.numerator;
        self.denominator = result.denominator;
        Ok(())
    }

    /// Raises the fraction to a possibly non-integral power.
    ///
    /// Whole exponents defer to [pow](Self::pow). For an exponent `p/q` in lowest terms, the
    /// result is exact only when the numerator and denominator of `self` are both perfect `q`-th
    /// powers, as in `(4/9)^(1/2) = 2/3`.
    ///
    /// # Errors
    ///
    /// - [NegativeRoot](FractionError::NegativeRoot) for a non-integral power of a negative
    ///   fraction.
    /// - [IrrationalPower](FractionError::IrrationalPower) when the result is not a fraction. Go
    ///   through [to_f64](Self::to_f64) for approximate roots.
    pub fn pow_ratio<E: Into<Operand>>(&self, exponent: E) -> Result<Fraction, FractionError> {
        let exponent = exponent.into().into_fraction()?.reduced();
        let power = exponent.numerator.to_i32().ok_or_else(|| {
            FractionError::InvalidOperandKind(format!("the out of range exponent {}", exponent))
        })?;
        if exponent.denominator.is_one() {
            return self.pow(power);
        }
        if self.numerator.is_negative() {
            return Err(FractionError::NegativeRoot);
        }

        let degree = exponent
            .denominator
            .to_u32()
            .ok_or(FractionError::IrrationalPower)?;
        let exact_root = |n: &BigInt| {
            let root = n.nth_root(degree);
            if root.pow(degree) == *n {
                Some(root)
            } else {
                None
            }
        };

        let (numerator, denominator) = self.canonical_parts();
        match (exact_root(&numerator), exact_root(&denominator)) {
            (Some(n), Some(d)) => Fraction::from_nonzero_parts(n, d, self.options).pow(power),
            _ => Err(FractionError::IrrationalPower),
        }
    }

    fn raise(&self, exponent: u32) -> Fraction {
        Fraction::from_nonzero_parts(
            self.numerator.pow(exponent),
            self.denominator.pow(exponent),
            self.options,
        )
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
    fn integral_powers() {
        assert_eq!(frac(2, 3).pow(0).unwrap(), frac(1, 1));
        assert_eq!(frac(2, 3).pow(1).unwrap(), frac(2, 3));
        assert_eq!(frac(2, 3).pow(3).unwrap(), frac(8, 27));
        assert_eq!(frac(-2, 3).pow(2).unwrap(), frac(4, 9));
        assert_eq!(frac(2, 3).pow(-2).unwrap(), frac(9, 4));
        assert_eq!(frac(-2, 3).pow(-3).unwrap(), frac(-27, 8));
    }

    #[test]
    fn zero_to_the_zero() {
        assert_eq!(frac(0, 1).pow(0), Err(FractionError::ZeroPowerOfZero));
        assert_eq!(frac(0, 1).pow(-1), Err(FractionError::DivisionByZero));
        assert_eq!(frac(0, 1).pow(5).unwrap(), frac(0, 1));
    }

    #[test]
    fn pow_keeps_options() {
        let f = Fraction::with_options(2, 4, FractionOptions::unreduced()).unwrap();
        let squared = f.pow(2).unwrap();
        assert_eq!(squared.numerator(), &BigInt::from(4));
        assert_eq!(squared.denominator(), &BigInt::from(16));
    }

    #[test]
    fn pow_assign() {
        let mut f = frac(3, 2);
        f.pow_assign(2).unwrap();
        assert_eq!(f, frac(9, 4));
        f.pow_assign(-1).unwrap();
        assert_eq!(f, frac(4, 9));

        let mut zero = frac(0, 1);
        assert_eq!(zero.pow_assign(0), Err(FractionError::ZeroPowerOfZero));
        assert_eq!(zero, frac(0, 1));
    }

    #[test]
    fn ratio_powers() {
        assert_eq!(frac(4, 9).pow_ratio(0.5).unwrap(), frac(2, 3));
        assert_eq!(frac(8, 27).pow_ratio(frac(2, 3)).unwrap(), frac(4, 9));
        assert_eq!(frac(4, 9).pow_ratio(frac(-1, 2)).unwrap(), frac(3, 2));
        assert_eq!(frac(4, 9).pow_ratio(2).unwrap(), frac(16, 81));
        assert_eq!(frac(0, 1).pow_ratio(0.5).unwrap(), frac(0, 1));
    }

    #[test]
    fn ratio_power_errors() {
        assert_eq!(frac(-4, 9).pow_ratio(0.5), Err(FractionError::NegativeRoot));
        assert_eq!(frac(2, 1).pow_ratio(0.5), Err(FractionError::IrrationalPower));
        // Negative bases are fine for whole exponents.
        assert_eq!(frac(-4, 9).pow_ratio(2.0).unwrap(), frac(16, 81));
    }
}
