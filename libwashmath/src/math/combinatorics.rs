use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Computes `n!`.
pub fn factorial(n: u32) -> BigInt {
    falling_factorial(n, n)
}

/// Number of ordered arrangements of `r` items drawn from `n`, `n! / (n - r)!`. Zero when `r > n`.
pub fn permutations(n: u32, r: u32) -> BigInt {
    if r > n {
        return BigInt::zero();
    }
    falling_factorial(n, r)
}

/// Number of unordered selections of `r` items drawn from `n`, `n! / (r! (n - r)!)`. Zero when
/// `r > n`.
pub fn combinations(n: u32, r: u32) -> BigInt {
    if r > n {
        return BigInt::zero();
    }
    let r = r.min(n - r);
    falling_factorial(n, r) / factorial(r)
}

/// `n · (n - 1) · … · (n - k + 1)`, the product of the top `k` factors of `n!`.
fn falling_factorial(n: u32, k: u32) -> BigInt {
    ((n - k + 1)..=n).fold(BigInt::one(), |acc, i| acc * i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), BigInt::from(1));
        assert_eq!(factorial(1), BigInt::from(1));
        assert_eq!(factorial(5), BigInt::from(120));
        assert_eq!(factorial(20), BigInt::from(2_432_902_008_176_640_000u64));
        assert_eq!(
            factorial(25),
            "15511210043330985984000000".parse::<BigInt>().unwrap()
        );
    }

    #[test]
    fn test_permutations() {
        assert_eq!(permutations(5, 2), BigInt::from(20));
        assert_eq!(permutations(5, 0), BigInt::from(1));
        assert_eq!(permutations(2, 5), BigInt::from(0));
    }

    #[test]
    fn test_combinations() {
        assert_eq!(combinations(5, 2), BigInt::from(10));
        assert_eq!(combinations(52, 5), BigInt::from(2_598_960));
        assert_eq!(combinations(6, 6), BigInt::from(1));
        assert_eq!(combinations(2, 5), BigInt::from(0));
    }
}
