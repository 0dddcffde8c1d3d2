use num_bigint::BigInt;
use num_traits::float::FloatCore;
use num_traits::{pow, One};

/// Largest exponent magnitude accepted in decimal text. `"1e-200000000"` would otherwise build a
/// power of ten with millions of digits.
pub const MAX_DECIMAL_EXPONENT: i32 = 10_000;

/// Parses decimal text into an exact `(numerator, denominator)` pair of integers.
///
/// Accepted forms are an optional sign, digits with at most one decimal point, and an optional
/// exponent: `"12"`, `"-3.08"`, `".5"`, `"6.02e23"`. The decimal point is shifted right one place
/// at a time by scaling both sides by ten, so `"3.08"` becomes `308 / 100`. The pair is not
/// reduced.
///
/// Returns [None] if the text is not a decimal number, or if its exponent is larger in magnitude
/// than [MAX_DECIMAL_EXPONENT].
pub fn parse_decimal(text: &str) -> Option<(BigInt, BigInt)> {
    let text = text.trim();
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&unsigned[..i], unsigned[i + 1..].parse::<i32>().ok()?),
        None => (unsigned, 0),
    };
    if exponent.checked_abs()? > MAX_DECIMAL_EXPONENT {
        return None;
    }
    let (whole, decimal) = match mantissa.find('.') {
        Some(i) => (&mantissa[..i], &mantissa[i + 1..]),
        None => (mantissa, ""),
    };
    if whole.is_empty() && decimal.is_empty() {
        return None;
    }
    if !whole.bytes().chain(decimal.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut digits = String::with_capacity(whole.len() + decimal.len());
    digits.push_str(whole);
    digits.push_str(decimal);
    let digits = BigInt::parse_bytes(digits.as_bytes(), 10)?;

    let shift = i64::from(exponent) - decimal.len() as i64;
    let ten = BigInt::from(10u8);
    let (mut numerator, denominator) = if shift >= 0 {
        (digits * pow(ten, shift as usize), BigInt::one())
    } else {
        (digits, pow(ten, (-shift) as usize))
    };
    if negative {
        numerator = -numerator;
    }
    Some((numerator, denominator))
}

/// Decomposes a finite float into the exact ratio of its shortest round-trip decimal form.
///
/// `3.08` is stored in binary as `3.0800000000000000710542735760100185871124267578125`, but its
/// shortest decimal form is `3.08`, so this returns `308 / 100`. This is what repeatedly shifting
/// the decimal point until both sides are whole would produce for a terminating decimal, and it
/// always terminates because the shortest form of an `f64` has at most 17 significant digits.
///
/// Returns [None] for NaN and infinities.
pub fn decimal_ratio(num: f64) -> Option<(BigInt, BigInt)> {
    if !num.is_finite() {
        return None;
    }
    // `{:e}` renders the shortest digits that round-trip, e.g. "3.08e0" or "-1e-7".
    parse_decimal(&format!("{:e}", num))
}

/// Decomposes a finite float into the exact ratio of its binary value, `mantissa · 2^exponent`.
///
/// Unlike [decimal_ratio], this keeps every bit of the float: `0.1` becomes
/// `3602879701896397 / 36028797018963968`. The pair is not reduced.
///
/// Returns [None] for NaN and infinities.
pub fn binary_ratio(num: f64) -> Option<(BigInt, BigInt)> {
    if !num.is_finite() {
        return None;
    }
    let (mantissa, exponent, sign) = FloatCore::integer_decode(num);
    let two = BigInt::from(2u8);
    let mut numerator = BigInt::from(mantissa);
    let mut denominator = BigInt::one();
    if exponent >= 0 {
        numerator *= pow(two, exponent as usize);
    } else {
        denominator = pow(two, (-i32::from(exponent)) as usize);
    }
    if sign < 0 {
        numerator = -numerator;
    }
    Some((numerator, denominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(n: i64, d: i64) -> Option<(BigInt, BigInt)> {
        Some((BigInt::from(n), BigInt::from(d)))
    }

    #[test]
    fn parse() {
        assert_eq!(parse_decimal("12"), ratio(12, 1));
        assert_eq!(parse_decimal("-3.08"), ratio(-308, 100));
        assert_eq!(parse_decimal("+.5"), ratio(5, 10));
        assert_eq!(parse_decimal("5."), ratio(5, 1));
        assert_eq!(parse_decimal(" 2.5e2 "), ratio(250, 1));
        assert_eq!(parse_decimal("1e-3"), ratio(1, 1000));
        assert_eq!(
            parse_decimal("1e-10000").map(|(_, d)| d),
            Some(pow(BigInt::from(10), 10_000))
        );
    }

    #[test]
    fn parse_rejects_huge_exponents() {
        for text in ["1e-200000000", "1e10001", "-2.5E-10001", "1e-2147483648"].iter() {
            assert_eq!(parse_decimal(text), None, "{:?}", text);
        }
    }

    #[test]
    fn parse_rejects() {
        for text in ["", "-", ".", "1.2.3", "abc", "1/2", "1e", "--1"].iter() {
            assert_eq!(parse_decimal(text), None, "{:?}", text);
        }
    }

    #[test]
    fn decimal() {
        assert_eq!(decimal_ratio(3.08), ratio(308, 100));
        assert_eq!(decimal_ratio(-0.25), ratio(-25, 100));
        assert_eq!(decimal_ratio(0.), ratio(0, 1));
        assert_eq!(
            decimal_ratio(1e20),
            Some(("100000000000000000000".parse().unwrap(), BigInt::one()))
        );
        assert_eq!(decimal_ratio(std::f64::NAN), None);
        assert_eq!(decimal_ratio(std::f64::INFINITY), None);
    }

    #[test]
    fn binary() {
        assert_eq!(binary_ratio(0.5), ratio(1 << 52, 1 << 53));
        assert_eq!(binary_ratio(-2.), ratio(-(1 << 52), 1 << 51));
        assert_eq!(binary_ratio(0.).map(|(n, _)| n), Some(BigInt::from(0)));
        assert_eq!(binary_ratio(std::f64::NEG_INFINITY), None);
    }
}
