use num_bigint::BigInt;
use num_traits::FromPrimitive;

/// Failure to find a fraction matching a decimal within an iteration budget.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Dec2FracError {
    /// Number of mediants tried before giving up.
    pub num_iter: u64,
    /// Distance between the decimal and the last mediant tried.
    pub decimal_error: f64,
}

/// Converts a decimal number to the simplest irreducible fraction that equals it at `f64`
/// precision, by walking the [Stern-Brocot tree].
///
/// The whole part is split off first. The remaining decimal `t ∈ [0, 1)` is bracketed by
/// `lo = 0/1` and `hi = 1/1`; each step takes the mediant `(a + c) / (b + d)` of the bracket and
/// keeps whichever half still contains `t`. Mediants of Stern-Brocot neighbours are already in
/// lowest terms, so the result never needs reducing.
///
/// ```text
///                        * ~ t
/// 0/1 -------------------|-------------------- 1/1
///                       1/2 ~ mediant, t < 1/2 so hi := 1/2
/// ```
///
/// Decimals with no short fractional form (`π`, `√2`, or the result of a lossy float division)
/// make the walk arbitrarily long, so it stops after `max_iter` mediants and reports how far off
/// the last one was.
///
/// Returns the fraction as `(numerator, denominator)`. The whole part is kept as a [BigInt], so
/// floats past `i64::MAX` such as `1e30` come back exactly. NaN and infinities have no fractional
/// form and fail immediately with `num_iter = 0`.
pub fn dec2frac(num: f64, max_iter: u64) -> Result<(BigInt, BigInt), Dec2FracError> {
    let non_finite = Dec2FracError {
        num_iter: 0,
        decimal_error: std::f64::NAN,
    };
    let abs = num.abs();
    let whole = match BigInt::from_f64(abs.floor()) {
        Some(whole) if num.is_finite() => whole,
        _ => return Err(non_finite),
    };
    let decimal = abs - abs.floor();

    let (top, bottom) = if decimal == 0. {
        (0, 1)
    } else {
        walk_stern_brocot(decimal, max_iter)?
    };

    let bottom = BigInt::from(bottom);
    let mut top = BigInt::from(top) + whole * &bottom;
    if num < 0. {
        top = -top;
    }
    Ok((top, bottom))
}

fn walk_stern_brocot(decimal: f64, max_iter: u64) -> Result<(u64, u64), Dec2FracError> {
    let mut lo = (0u64, 1u64);
    let mut hi = (1u64, 1u64);
    let mut last_error = std::f64::NAN;

    for _ in 0..max_iter {
        let mediant = (lo.0 + hi.0, lo.1 + hi.1);
        let value = mediant.0 as f64 / mediant.1 as f64;
        last_error = (decimal - value).abs();

        if last_error <= std::f64::EPSILON {
            return Ok(mediant);
        }
        if decimal < value {
            hi = mediant;
        } else {
            lo = mediant;
        }
    }

    log::debug!(
        "no fraction matches {} after {} mediants (error {})",
        decimal,
        max_iter,
        last_error
    );
    Err(Dec2FracError {
        num_iter: max_iter,
        decimal_error: last_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    type Dec2FracCase = (f64, Result<(i64, u64), Dec2FracError>);
    #[allow(clippy::excessive_precision)]
    const CASES: [Dec2FracCase; 8] = [
        (0.,  Ok((0 , 1))),
        (1.,  Ok((1 , 1))),
        (0.5, Ok((1 , 2))),
        (-2.75, Ok((-11 , 4))),
        (0.318181818181818181818, Ok((7 , 22))),
        (3.142857142857142857142, Ok((22 , 7))),
        (3.141592653589793238462, Ok((245_850_922, 78_256_779))),
        (-3.141592653589793238462, Ok((-245_850_922, 78_256_779))),
    ];

    #[test]
    fn test_dec2frac() {
        for (dec, frac) in CASES.iter() {
            let expected = frac.map(|(n, d)| (BigInt::from(n), BigInt::from(d)));
            assert_eq!(dec2frac(*dec, 1_000_000), expected, "{} != {:?}", dec, frac);
        }
    }

    #[test]
    fn whole_part_past_i64() {
        let (n, d) = dec2frac(1e30, 1_000).unwrap();
        assert_eq!(n, "1000000000000000019884624838656".parse::<BigInt>().unwrap());
        assert_eq!(d, BigInt::from(1));

        let (n, _) = dec2frac(-1e19, 1_000).unwrap();
        assert_eq!(n, "-10000000000000000000".parse::<BigInt>().unwrap());
    }

    #[test]
    fn gives_up_after_budget() {
        let err = dec2frac(std::f64::consts::PI, 10).unwrap_err();
        assert_eq!(err.num_iter, 10);
        assert!(err.decimal_error > 0.);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(dec2frac(std::f64::NAN, 10).is_err());
        assert!(dec2frac(std::f64::INFINITY, 10).is_err());
    }
}
