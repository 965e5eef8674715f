//! Functions to construct [`Integer`]s, [`Rational`]s, and [`Float`]s from various types.

use rug::{Assign, Float, Integer, Rational};

/// The number of bits of precision to use when computing values.
pub const PRECISION: u32 = 1 << 9;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates an [`Integer`] from a string slice of decimal digits.
pub fn int_from_str(s: &str) -> Integer {
    Integer::from_str_radix(s, 10).unwrap()
}

/// Creates a [`Rational`] with the given value.
pub fn rational<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Creates a [`Rational`] from the digits of a decimal literal, such as `0.001`. The result is
/// exact; `0.001` becomes `1/1000`.
pub fn rational_from_decimal(s: &str) -> Rational {
    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
    let mut numerator = int_from_str(whole);
    let mut denominator = int(1);
    for c in frac.chars() {
        numerator *= 10;
        numerator += c.to_digit(10).unwrap();
        denominator *= 10;
    }
    Rational::from((numerator, denominator))
}

/// Creates a [`Float`] with the given value.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}

/// Creates a [`Float`] from a string slice.
pub fn float_from_str(s: &str) -> Float {
    Float::with_val(PRECISION, Float::parse(s).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_to_rational() {
        assert_eq!(rational_from_decimal("0.001"), Rational::from((1, 1000)));
        assert_eq!(rational_from_decimal("2.5"), Rational::from((5, 2)));
        assert_eq!(rational_from_decimal("12"), Rational::from(12));
    }
}
