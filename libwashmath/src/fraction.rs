//! An exact, arbitrary-precision fraction with eager normalization.
//!
//! A [Fraction] is a `BigInt` numerator over a positive `BigInt` denominator. Unless told
//! otherwise, every constructor and every arithmetic operation leaves it in lowest terms, so two
//! fractions with the same value have the same representation. Two per-instance options relax
//! that:
//!
//! - `auto_reduce: false` skips the GCD step after each operation. Results still have a positive,
//!   non-zero denominator, but may not be in lowest terms until [reduce](Fraction::reduce) is
//!   called. Useful when multiplying many times in a row.
//! - `persistent_denominator: true` keeps the denominator of a zero fraction instead of collapsing
//!   it to `0/1`, so `0/18 * 1/10` is `0/180`.
//!
//! Operands can be integers, floats or other fractions (see [Operand]). Floats are read as the
//! decimal they print as, so `Fraction::new(3.08, 4)` is `77/100`.
//!
//! Fractions are plain values: clone one to get an independent copy. In-place operators need
//! `&mut`, so concurrent mutation of one instance is ruled out by the borrow checker rather than
//! by locking.

#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]

/// Implements a binary operator for owned and borrowed fractions, `BigInt`s and primitive integers
/// on the right-hand side, in terms of an inherent `fn(&self, &BigInt, &BigInt) -> Fraction` that
/// takes the right-hand side as a `(numerator, denominator)` pair.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident => $ratio:ident) => {
        impl std::ops::$imp<$crate::Fraction> for $crate::Fraction {
            type Output = $crate::Fraction;

            fn $method(self, rhs: $crate::Fraction) -> $crate::Fraction {
                self.$ratio(&rhs.numerator, &rhs.denominator)
            }
        }

        impl<'a> std::ops::$imp<&'a $crate::Fraction> for $crate::Fraction {
            type Output = $crate::Fraction;

            fn $method(self, rhs: &'a $crate::Fraction) -> $crate::Fraction {
                self.$ratio(&rhs.numerator, &rhs.denominator)
            }
        }

        impl<'a> std::ops::$imp<$crate::Fraction> for &'a $crate::Fraction {
            type Output = $crate::Fraction;

            fn $method(self, rhs: $crate::Fraction) -> $crate::Fraction {
                self.$ratio(&rhs.numerator, &rhs.denominator)
            }
        }

        impl<'a, 'b> std::ops::$imp<&'b $crate::Fraction> for &'a $crate::Fraction {
            type Output = $crate::Fraction;

            fn $method(self, rhs: &'b $crate::Fraction) -> $crate::Fraction {
                self.$ratio(&rhs.numerator, &rhs.denominator)
            }
        }

        forward_binop!(@scalar $imp, $method => $ratio; num_bigint::BigInt, i32, i64, u32, u64);
    };
    (@scalar $imp:ident, $method:ident => $ratio:ident; $($int:ty),*) => {$(
        impl std::ops::$imp<$int> for $crate::Fraction {
            type Output = $crate::Fraction;

            fn $method(self, rhs: $int) -> $crate::Fraction {
                let one = <num_bigint::BigInt as num_traits::One>::one();
                self.$ratio(&num_bigint::BigInt::from(rhs), &one)
            }
        }

        impl<'a> std::ops::$imp<$int> for &'a $crate::Fraction {
            type Output = $crate::Fraction;

            fn $method(self, rhs: $int) -> $crate::Fraction {
                let one = <num_bigint::BigInt as num_traits::One>::one();
                self.$ratio(&num_bigint::BigInt::from(rhs), &one)
            }
        }
    )*};
}

/// Like [forward_binop], for compound assignment through an inherent
/// `fn(&mut self, &BigInt, &BigInt)`.
macro_rules! forward_assign_op {
    (impl $imp:ident, $method:ident => $ratio:ident) => {
        impl std::ops::$imp<$crate::Fraction> for $crate::Fraction {
            fn $method(&mut self, rhs: $crate::Fraction) {
                self.$ratio(&rhs.numerator, &rhs.denominator)
            }
        }

        impl<'a> std::ops::$imp<&'a $crate::Fraction> for $crate::Fraction {
            fn $method(&mut self, rhs: &'a $crate::Fraction) {
                self.$ratio(&rhs.numerator, &rhs.denominator)
            }
        }

        forward_assign_op!(@scalar $imp, $method => $ratio; num_bigint::BigInt, i32, i64, u32, u64);
    };
    (@scalar $imp:ident, $method:ident => $ratio:ident; $($int:ty),*) => {$(
        impl std::ops::$imp<$int> for $crate::Fraction {
            fn $method(&mut self, rhs: $int) {
                let one = <num_bigint::BigInt as num_traits::One>::one();
                self.$ratio(&num_bigint::BigInt::from(rhs), &one)
            }
        }
    )*};
}

mod add;
mod compare;
mod convert;
mod div;
mod errors;
mod fmt;
mod mul;
mod negate;
mod operand;
mod pow;

pub use errors::FractionError;
pub use operand::Operand;

use crate::math::gcd;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Per-instance normalization settings of a [Fraction].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FractionOptions {
    /// Reduce to lowest terms after construction and after every operation.
    pub auto_reduce: bool,
    /// Keep the denominator of a zero fraction instead of collapsing it to `0/1`.
    pub persistent_denominator: bool,
}

impl Default for FractionOptions {
    fn default() -> Self {
        Self {
            auto_reduce: true,
            persistent_denominator: false,
        }
    }
}

impl FractionOptions {
    /// Options with automatic reduction turned off.
    pub fn unreduced() -> Self {
        Self {
            auto_reduce: false,
            ..Self::default()
        }
    }

    /// Options that keep the denominator of zero fractions.
    pub fn persistent_denominator() -> Self {
        Self {
            persistent_denominator: true,
            ..Self::default()
        }
    }
}

/// A rational number `numerator / denominator`. See the [module documentation](self).
#[derive(Clone, Debug)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
    options: FractionOptions,
}

impl Fraction {
    /// Creates `numerator / denominator` with default options.
    ///
    /// Either side may be an integer, a float, or another fraction. A fraction in the denominator
    /// divides through, so `Fraction::new(2, Fraction::new(1, 3)?)` is `6`.
    ///
    /// # Errors
    ///
    /// - [DivisionByZero](FractionError::DivisionByZero) if the denominator is zero.
    /// - [InvalidOperandKind](FractionError::InvalidOperandKind) if either side is a NaN or
    ///   infinite float.
    pub fn new<N, D>(numerator: N, denominator: D) -> Result<Self, FractionError>
    where
        N: Into<Operand>,
        D: Into<Operand>,
    {
        Self::with_options(numerator, denominator, FractionOptions::default())
    }

    /// Creates `numerator / denominator` with the given options. See [new](Self::new).
    pub fn with_options<N, D>(
        numerator: N,
        denominator: D,
        options: FractionOptions,
    ) -> Result<Self, FractionError>
    where
        N: Into<Operand>,
        D: Into<Operand>,
    {
        let numerator = numerator.into().into_ratio()?;
        let denominator = denominator.into().into_ratio()?;
        Self::from_ratios(numerator, denominator, options)
    }

    /// Creates the whole number `n / 1`.
    pub fn from_integer<I: Into<BigInt>>(n: I) -> Self {
        Self::from_nonzero_parts(n.into(), BigInt::one(), FractionOptions::default())
    }

    /// `(a / b) / (c / d) = (a · d) / (b · c)`.
    fn from_ratios(
        (a, b): (BigInt, BigInt),
        (c, d): (BigInt, BigInt),
        options: FractionOptions,
    ) -> Result<Self, FractionError> {
        if c.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Self::from_nonzero_parts(a * d, b * c, options))
    }

    /// Creates `numerator / denominator`, normalizing sign and reducing per `options`.
    pub(crate) fn from_parts(
        numerator: BigInt,
        denominator: BigInt,
        options: FractionOptions,
    ) -> Result<Self, FractionError> {
        if denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Self::from_nonzero_parts(numerator, denominator, options))
    }

    /// Like [from_parts](Self::from_parts), for callers that already know the denominator is not
    /// zero.
    fn from_nonzero_parts(numerator: BigInt, denominator: BigInt, options: FractionOptions) -> Self {
        debug_assert!(!denominator.is_zero());
        let mut fraction = Self {
            numerator,
            denominator,
            options,
        };
        fraction.normalize();
        fraction
    }

    /// The numerator. Carries the sign of the fraction.
    #[inline]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The denominator. Always positive.
    #[inline]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Current normalization options.
    #[inline]
    pub fn options(&self) -> FractionOptions {
        self.options
    }

    /// Whether results are reduced automatically.
    #[inline]
    pub fn auto_reduce(&self) -> bool {
        self.options.auto_reduce
    }

    /// Turns automatic reduction on or off. Turning it on does not reduce the current value; call
    /// [reduce](Self::reduce) for that.
    pub fn set_auto_reduce(&mut self, auto_reduce: bool) {
        self.options.auto_reduce = auto_reduce;
    }

    /// Whether a zero numerator keeps its denominator.
    #[inline]
    pub fn persistent_denominator(&self) -> bool {
        self.options.persistent_denominator
    }

    /// Sets whether a zero numerator keeps its denominator. The current parts are left as they are
    /// until the next reduction.
    pub fn set_persistent_denominator(&mut self, persistent: bool) {
        self.options.persistent_denominator = persistent;
    }

    /// Replaces both parts at once, then normalizes once. Options are kept.
    ///
    /// On error the fraction is left unchanged.
    pub fn assign<N, D>(&mut self, numerator: N, denominator: D) -> Result<(), FractionError>
    where
        N: Into<Operand>,
        D: Into<Operand>,
    {
        let replacement = Self::with_options(numerator, denominator, self.options)?;
        self.numerator = replacement.numerator;
        self.denominator = replacement.denominator;
        Ok(())
    }

    /// Reduces to lowest terms in place, regardless of `auto_reduce`.
    ///
    /// A zero numerator reduces to `0/1`, unless `persistent_denominator` is set, in which case the
    /// denominator is left as is.
    pub fn reduce(&mut self) -> &mut Self {
        if self.options.persistent_denominator && self.numerator.is_zero() {
            return self;
        }
        let factor = gcd(&self.numerator, &self.denominator);
        if !factor.is_zero() && !factor.is_one() {
            log::trace!("reducing {}/{} by {}", self.numerator, self.denominator, factor);
            self.numerator /= &factor;
            self.denominator /= &factor;
        }
        self
    }

    /// A reduced copy of `self`.
    pub fn reduced(&self) -> Self {
        let mut copy = self.clone();
        copy.reduce();
        copy
    }

    /// Whether `gcd(|numerator|, denominator) = 1`, or the numerator is zero.
    pub fn is_reduced(&self) -> bool {
        self.numerator.is_zero() || gcd(&self.numerator, &self.denominator).is_one()
    }

    /// Whether the value is an integer, whatever the representation: `8/4` is whole even when
    /// unreduced.
    pub fn is_whole(&self) -> bool {
        (&self.numerator % &self.denominator).is_zero()
    }

    /// The canonical `(numerator, denominator)` pair of the value, ignoring both options.
    pub(crate) fn canonical_parts(&self) -> (BigInt, BigInt) {
        if self.numerator.is_zero() {
            return (BigInt::zero(), BigInt::one());
        }
        let factor = gcd(&self.numerator, &self.denominator);
        (&self.numerator / &factor, &self.denominator / &factor)
    }

    /// Restores the invariants after the fields were written: positive denominator, then lowest
    /// terms if `auto_reduce` is set.
    fn normalize(&mut self) {
        if self.denominator.is_negative() {
            self.numerator = -std::mem::take(&mut self.numerator);
            self.denominator = -std::mem::take(&mut self.denominator);
        }
        if self.options.auto_reduce {
            self.reduce();
        }
    }
}
