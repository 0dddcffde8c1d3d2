use super::Fraction;
use crate::math::lcm;
use num_bigint::BigInt;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl Fraction {
    /// Both numerators scaled to the least common multiple of the denominators, so they can be
    /// compared directly.
    fn scaled_numerators(&self, other: &Fraction) -> (BigInt, BigInt) {
        if self.denominator == other.denominator {
            return (self.numerator.clone(), other.numerator.clone());
        }
        let common = lcm(&self.denominator, &other.denominator);
        (
            &self.numerator * (&common / &self.denominator),
            &other.numerator * (&common / &other.denominator),
        )
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Fraction) -> bool {
        let (lhs, rhs) = self.scaled_numerators(other);
        lhs == rhs
    }
}

impl Eq for Fraction {}

impl Ord for Fraction {
    fn cmp(&self, other: &Fraction) -> Ordering {
        let (lhs, rhs) = self.scaled_numerators(other);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hashes the value, not the representation: `2/4` unreduced hashes like `1/2`, and a persistent
/// `0/18` hashes like `0/1`.
impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_parts().hash(state);
    }
}

impl PartialEq<Option<Fraction>> for Fraction {
    /// An absent value never equals a fraction.
    fn eq(&self, other: &Option<Fraction>) -> bool {
        match other {
            Some(other) => self == other,
            None => false,
        }
    }
}

// Plain numbers compare against the floating-point value of the fraction.
macro_rules! compare_as_float {
    ($($num:ty),*) => {$(
        impl PartialEq<$num> for Fraction {
            fn eq(&self, other: &$num) -> bool {
                self.to_f64() == *other as f64
            }
        }

        impl PartialOrd<$num> for Fraction {
            fn partial_cmp(&self, other: &$num) -> Option<Ordering> {
                self.to_f64().partial_cmp(&(*other as f64))
            }
        }
    )*};
}

compare_as_float!(i32, i64, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FractionOptions;
    use std::collections::HashSet;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn equality() {
        assert_eq!(frac(1, 8), frac(20, 160));
        assert_ne!(frac(1, 9), frac(3, 28));
        assert_eq!(frac(-1, 2), frac(2, -4));
    }

    #[test]
    fn equality_ignores_representation() {
        let unreduced = Fraction::with_options(20, 160, FractionOptions::unreduced()).unwrap();
        assert_eq!(unreduced, frac(1, 8));
        let zero = Fraction::with_options(0, 18, FractionOptions::persistent_denominator()).unwrap();
        assert_eq!(zero, frac(0, 1));
    }

    #[test]
    fn equality_with_plain_numbers() {
        assert!(frac(4, 2) == 2);
        assert!(frac(4, 2) == 2i64);
        assert!(frac(1, 4) == 0.25);
        assert!(frac(1, 3) != 0.3);
    }

    #[test]
    fn equality_with_absent_values() {
        assert!(frac(1, 2) != None);
        assert!(frac(1, 2) == Some(frac(2, 4)));
    }

    #[test]
    fn ordering() {
        assert!(frac(1, 3) < frac(1, 2));
        assert!(frac(-1, 2) < frac(-1, 3));
        assert!(frac(2, 4) <= frac(1, 2));
        assert!(frac(5, 6) > frac(4, 5));
        assert!(frac(7, 3) >= frac(7, 3));
        assert_eq!(frac(1, 2).max(frac(2, 3)), frac(2, 3));
    }

    #[test]
    fn ordering_with_plain_numbers() {
        assert!(frac(1, 2) < 1);
        assert!(frac(3, 2) > 1.25);
        assert!(frac(-1, 2) <= -0.5);
    }

    #[test]
    fn equal_values_hash_alike() {
        let mut set = HashSet::new();
        set.insert(frac(1, 2));
        set.insert(Fraction::with_options(2, 4, FractionOptions::unreduced()).unwrap());
        set.insert(frac(3, 6));
        assert_eq!(set.len(), 1);

        set.insert(frac(0, 1));
        set.insert(Fraction::with_options(0, 18, FractionOptions::persistent_denominator()).unwrap());
        assert_eq!(set.len(), 2);
    }
}
