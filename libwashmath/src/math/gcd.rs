use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Calculates the GCD for (u, v) ∈ (Z, Z).
///
/// The result is always non-negative, and `gcd(0, 0) = 0`. Signs of the inputs are ignored, so
/// `gcd(-4, 6) = 2`.
pub fn gcd<N: Integer + Signed + Clone>(u: &N, v: &N) -> N {
    euclidean_gcd(u.abs(), v.abs())
}

/// Calculates the LCM for (u, v) ∈ (Z, Z). Like [gcd], the result is non-negative; if either
/// input is zero the LCM is zero.
pub fn lcm<N: Integer + Signed + Clone>(u: &N, v: &N) -> N {
    if u.is_zero() || v.is_zero() {
        return N::zero();
    }
    (u.abs() / gcd(u, v)) * v.abs()
}

/// The [Euclidean GCD] algorithm.
/// Implemented ∀ (u, v) ∈ (N, N).
///
/// [Euclidean GCD]: https://en.wikipedia.org/wiki/Euclidean_algorithm
fn euclidean_gcd<N: Integer + Clone>(mut u: N, mut v: N) -> N {
    let mut t;
    while !v.is_zero() {
        t = v.clone();
        v = u % v;
        u = t;
    }
    u
}
