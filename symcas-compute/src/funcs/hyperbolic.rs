//! Hyperbolic functions.

use crate::error::MathError;
use crate::number::Number;
use crate::primitive::int;
use super::undefined;

/// The hyperbolic sine. `sinh(0)` is exactly 0.
pub fn sinh(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if value.is_zero() {
        return Ok(Some(Number::Integer(int(0))));
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(value.to_float().sinh())))
    }
}

/// The hyperbolic cosine. `cosh(0)` is exactly 1.
pub fn cosh(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if value.is_zero() {
        return Ok(Some(Number::Integer(int(1))));
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(value.to_float().cosh())))
    }
}

/// The hyperbolic tangent. `tanh(0)` is exactly 0.
pub fn tanh(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if value.is_zero() {
        return Ok(Some(Number::Integer(int(0))));
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(value.to_float().tanh())))
    }
}

/// The hyperbolic cotangent, undefined at 0.
pub fn coth(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if value.is_zero() {
        return Err(undefined("coth", &[value]));
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(value.to_float().coth())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_values_at_zero() {
        assert_eq!(sinh(&Number::Integer(int(0)), true).unwrap(), Some(Number::Integer(int(0))));
        assert_eq!(cosh(&Number::Integer(int(0)), true).unwrap(), Some(Number::Integer(int(1))));
        assert_eq!(tanh(&Number::Integer(int(0)), true).unwrap(), Some(Number::Integer(int(0))));
    }

    #[test]
    fn coth_pole() {
        assert!(coth(&Number::Integer(int(0)), false).is_err());
    }
}
