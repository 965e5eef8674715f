//! Trigonometric functions and their inverses.
//!
//! The quotient functions evaluate through sine and cosine so that poles are detected reliably:
//! `tan(pi/2)` computes `cos(pi/2)`, which snaps to exact zero and turns the quotient into a
//! domain failure instead of a huge finite number.

use std::cmp::Ordering;
use crate::error::MathError;
use crate::number::Number;
use crate::primitive::{float, int};
use super::{snap, undefined};

/// Returns the ordering of `|value|` against 1, for the domain checks of `asin` and `acos`.
fn cmp_magnitude_one(value: &Number) -> Ordering {
    value.clone().abs().cmp_value(&Number::Integer(int(1)))
}

/// The sine. `sin(0)` is exactly 0.
pub fn sin(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if value.is_zero() {
        return Ok(Some(Number::Integer(int(0))));
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(snap(value.to_float().sin()))))
    }
}

/// The cosine. `cos(0)` is exactly 1.
pub fn cos(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if value.is_zero() {
        return Ok(Some(Number::Integer(int(1))));
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(snap(value.to_float().cos()))))
    }
}

/// The tangent, undefined at odd multiples of `pi/2`.
pub fn tan(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if value.is_zero() {
        return Ok(Some(Number::Integer(int(0))));
    }

    if precise {
        return Ok(None);
    }

    let cosine = snap(value.to_float().cos());
    if cosine.is_zero() {
        return Err(undefined("tan", &[value]));
    }
    Ok(Some(Number::Real(snap(value.to_float().sin()) / cosine)))
}

/// The cotangent, undefined at multiples of `pi`.
pub fn cot(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if value.is_zero() {
        return Err(undefined("cot", &[value]));
    }

    if precise {
        return Ok(None);
    }

    let sine = snap(value.to_float().sin());
    if sine.is_zero() {
        return Err(undefined("cot", &[value]));
    }
    Ok(Some(Number::Real(snap(value.to_float().cos()) / sine)))
}

/// The inverse sine, defined on `[-1, 1]`. `asin(0)` is exactly 0.
pub fn asin(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if cmp_magnitude_one(value) == Ordering::Greater {
        return Err(undefined("asin", &[value]));
    }
    if value.is_zero() {
        return Ok(Some(Number::Integer(int(0))));
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(value.to_float().asin())))
    }
}

/// The inverse cosine, defined on `[-1, 1]`.
pub fn acos(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if cmp_magnitude_one(value) == Ordering::Greater {
        return Err(undefined("acos", &[value]));
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(value.to_float().acos())))
    }
}

/// The inverse tangent. `atan(0)` is exactly 0.
pub fn atan(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if value.is_zero() {
        return Ok(Some(Number::Integer(int(0))));
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(value.to_float().atan())))
    }
}

/// The inverse cotangent, with `acot(0) = pi/2`.
pub fn acot(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if precise {
        return Ok(None);
    }

    if value.is_zero() {
        Ok(Some(Number::Real(float(-1).acos() / 2)))
    } else {
        Ok(Some(Number::Real((float(1) / value.to_float()).atan())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PI;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_values_at_zero() {
        assert_eq!(sin(&Number::Integer(int(0)), true).unwrap(), Some(Number::Integer(int(0))));
        assert_eq!(cos(&Number::Integer(int(0)), true).unwrap(), Some(Number::Integer(int(1))));
        assert_eq!(tan(&Number::Integer(int(0)), true).unwrap(), Some(Number::Integer(int(0))));
    }

    #[test]
    fn sin_of_pi_snaps_to_zero() {
        let result = sin(&Number::Real(PI.clone()), false).unwrap().unwrap();
        assert!(result.is_zero());
    }

    #[test]
    fn tan_pole() {
        let half_pi = Number::Real(PI.clone() / 2);
        assert!(tan(&half_pi, false).is_err());
    }

    #[test]
    fn cot_poles() {
        assert!(cot(&Number::Integer(int(0)), false).is_err());
        assert!(cot(&Number::Real(PI.clone() * 2), false).is_err());
    }

    #[test]
    fn inverse_domain() {
        assert!(asin(&Number::Integer(int(2)), false).is_err());
        assert!(acos(&Number::Integer(int(-2)), false).is_err());
    }
}
