//! Logarithms in arbitrary, natural, binary, and decimal bases.

use rug::Integer;
use crate::error::MathError;
use crate::number::Number;
use crate::primitive::int;
use super::undefined;

/// Returns `k` such that `base^k == value`, if such a non-negative integer exists.
fn exact_int_log(base: &Integer, value: &Number) -> Option<Integer> {
    let value = value.as_integer()?;
    if *base < 2 || value.is_negative() || value.is_zero() {
        return None;
    }

    let mut power = int(1);
    let mut k = int(0);
    while power < *value {
        power *= base;
        k += 1;
    }
    (power == *value).then_some(k)
}

/// Checks the shared domain of all logarithms: the argument must be positive.
fn check_argument(name: &'static str, value: &Number) -> Result<(), MathError> {
    if value.is_zero() || value.is_negative() {
        Err(undefined(name, &[value]))
    } else {
        Ok(())
    }
}

/// The logarithm of `value` in the given base. The base must be positive and not 1, and the
/// argument must be positive. Integer powers of the base are exact, as in `log(2, 256) = 8`.
pub fn log(base: &Number, value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if base.is_zero() || base.is_negative() || base.is_one()
        || value.is_zero() || value.is_negative()
    {
        return Err(MathError::UndefinedFunction {
            name: "log",
            args: vec![base.to_string(), value.to_string()],
        });
    }

    if value.is_one() {
        return Ok(Some(Number::Integer(int(0))));
    }
    if let Some(base) = base.as_integer() {
        if let Some(k) = exact_int_log(base, value) {
            return Ok(Some(Number::Integer(k)));
        }
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(value.to_float().ln() / base.to_float().ln())))
    }
}

/// The natural logarithm. `ln(1)` is exactly 0.
pub fn ln(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    check_argument("ln", value)?;

    if value.is_one() {
        return Ok(Some(Number::Integer(int(0))));
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(value.to_float().ln())))
    }
}

/// The binary logarithm.
pub fn lb(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    check_argument("lb", value)?;

    if value.is_one() {
        return Ok(Some(Number::Integer(int(0))));
    }
    if let Some(k) = exact_int_log(&int(2), value) {
        return Ok(Some(Number::Integer(k)));
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(value.to_float().log2())))
    }
}

/// The decimal logarithm.
pub fn lg(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    check_argument("lg", value)?;

    if value.is_one() {
        return Ok(Some(Number::Integer(int(0))));
    }
    if let Some(k) = exact_int_log(&int(10), value) {
        return Ok(Some(Number::Integer(k)));
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(value.to_float().log10())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_integer_log() {
        let result = log(&Number::Integer(int(2)), &Number::Integer(int(256)), true).unwrap();
        assert_eq!(result, Some(Number::Integer(int(8))));
    }

    #[test]
    fn log_domain() {
        assert!(ln(&Number::Integer(int(0)), false).is_err());
        assert!(lb(&Number::Integer(int(-1)), false).is_err());
        assert!(lg(&Number::Integer(int(-1)), false).is_err());
        assert!(log(&Number::Integer(int(1)), &Number::Integer(int(5)), false).is_err());
    }

    #[test]
    fn ln_of_one() {
        assert_eq!(ln(&Number::Integer(int(1)), true).unwrap(), Some(Number::Integer(int(0))));
    }

    #[test]
    fn inexact_log_stays_symbolic_when_precise() {
        assert_eq!(lb(&Number::Integer(int(3)), true).unwrap(), None);
    }
}
