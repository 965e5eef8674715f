//! Factorials.

use rug::{Complete, Integer};
use crate::error::MathError;
use crate::number::Number;
use crate::primitive::int;
use super::undefined;

/// Returns the argument as a non-negative integer, or the domain failure for the given operator.
fn nonnegative_integer<'a>(
    name: &'static str,
    value: &'a Number,
) -> Result<&'a Integer, MathError> {
    match value.as_integer() {
        Some(n) if !n.is_negative() => Ok(n),
        _ => Err(undefined(name, &[value])),
    }
}

/// The factorial, defined for non-negative integers only.
pub fn factorial(value: &Number) -> Result<Number, MathError> {
    let n = nonnegative_integer("!", value)?;
    let n = n.to_u32().ok_or_else(|| undefined("!", &[value]))?;
    Ok(Number::Integer(Integer::factorial(n).complete()))
}

/// The double factorial `n!! = n * (n - 2) * (n - 4) * ...`, defined for non-negative integers.
pub fn double_factorial(value: &Number) -> Result<Number, MathError> {
    let n = nonnegative_integer("!!", value)?;

    let mut result = int(1);
    let mut k = n.clone();
    while k > 1 {
        result *= &k;
        k -= 2;
    }
    Ok(Number::Integer(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn small_factorials() {
        assert_eq!(factorial(&Number::Integer(int(5))).unwrap(), Number::Integer(int(120)));
        assert_eq!(factorial(&Number::Integer(int(0))).unwrap(), Number::Integer(int(1)));
    }

    #[test]
    fn double_factorials() {
        assert_eq!(double_factorial(&Number::Integer(int(5))).unwrap(), Number::Integer(int(15)));
        assert_eq!(double_factorial(&Number::Integer(int(6))).unwrap(), Number::Integer(int(48)));
        assert_eq!(double_factorial(&Number::Integer(int(0))).unwrap(), Number::Integer(int(1)));
    }

    #[test]
    fn non_integer_arguments_are_undefined() {
        assert!(factorial(&Number::Integer(int(-1))).is_err());
        assert!(factorial(&Number::Real(crate::consts::E.clone())).is_err());
    }
}
