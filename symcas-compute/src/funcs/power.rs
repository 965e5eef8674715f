//! Exponentiation, square roots, and the natural exponential.

use rug::{ops::Pow, Integer, Rational};
use crate::error::MathError;
use crate::number::Number;
use crate::primitive::int;
use super::undefined;

/// Returns the `k`-th root of a non-negative integer if it is exact.
fn perfect_root(n: &Integer, k: u32) -> Option<Integer> {
    let root = n.clone().root(k);
    if Integer::from((&root).pow(k)) == *n {
        Some(root)
    } else {
        None
    }
}

/// Views an exact number as a rational. Reals have no exact rational form.
fn as_rational(value: &Number) -> Option<Rational> {
    match value {
        Number::Integer(n) => Some(Rational::from(n)),
        Number::Rational(n) => Some(n.clone()),
        Number::Real(_) => None,
    }
}

/// Raises `base` to the power `exp`.
///
/// `0^0`, `0` to a negative power, and a negative base with a non-integer exponent are all
/// undefined. Integer exponents are always exact over exact bases; rational exponents are exact
/// when the root happens to be rational.
pub fn pow(base: &Number, exp: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    let undefined_op = || MathError::UndefinedBinaryOperator {
        op: "^",
        lhs: base.to_string(),
        rhs: exp.to_string(),
    };

    if base.is_zero() {
        if exp.is_zero() || exp.is_negative() {
            return Err(undefined_op());
        }
        return Ok(Some(Number::Integer(int(0))));
    }

    match exp {
        Number::Integer(n) => match base {
            Number::Real(f) => Ok(Some(Number::Real(f.clone().pow(n)))),
            // a negative integer exponent takes the base into the rationals
            _ => {
                // exponents beyond `i32` would not fit in memory anyway
                let Some(exp) = n.to_i32() else {
                    return Ok(None);
                };
                let rational = as_rational(base).unwrap();
                Ok(Some(Number::from(rational.pow(exp))))
            },
        },
        Number::Rational(r) => {
            if base.is_negative() {
                return Err(undefined_op());
            }

            if let (Some(rational), Some(power), Some(degree)) =
                (as_rational(base), r.numer().to_i32(), r.denom().to_u32())
            {
                let raised = rational.pow(power);
                let (numer, denom) = raised.into_numer_denom();
                if let (Some(n), Some(d)) = (perfect_root(&numer, degree), perfect_root(&denom, degree)) {
                    return Ok(Some(Number::from(Rational::from((n, d)))));
                }
            }

            if precise {
                Ok(None)
            } else {
                Ok(Some(Number::Real(base.to_float().pow(exp.to_float()))))
            }
        },
        Number::Real(_) => {
            if base.is_negative() {
                return Err(undefined_op());
            }

            if precise {
                Ok(None)
            } else {
                Ok(Some(Number::Real(base.to_float().pow(exp.to_float()))))
            }
        },
    }
}

/// The square root. Negative arguments are undefined; perfect squares are exact.
pub fn sqrt(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if value.is_negative() {
        return Err(undefined("sqrt", &[value]));
    }

    if let Some(rational) = as_rational(value) {
        let (numer, denom) = rational.into_numer_denom();
        if let (Some(n), Some(d)) = (perfect_root(&numer, 2), perfect_root(&denom, 2)) {
            return Ok(Some(Number::from(Rational::from((n, d)))));
        }
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(value.to_float().sqrt())))
    }
}

/// The natural exponential. `exp(0)` is exactly 1.
pub fn exp(value: &Number, precise: bool) -> Result<Option<Number>, MathError> {
    if value.is_zero() {
        return Ok(Some(Number::Integer(int(1))));
    }

    if precise {
        Ok(None)
    } else {
        Ok(Some(Number::Real(value.to_float().exp())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::rational;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_base_edge_cases() {
        let zero = Number::Integer(int(0));
        assert!(pow(&zero, &zero, false).is_err());
        assert!(pow(&zero, &Number::Integer(int(-1)), false).is_err());
        assert_eq!(pow(&zero, &Number::Integer(int(3)), false).unwrap(), Some(zero));
    }

    #[test]
    fn negative_integer_exponent_is_exact() {
        let result = pow(&Number::Integer(int(2)), &Number::Integer(int(-3)), true).unwrap();
        assert_eq!(result, Some(Number::Rational(rational((1, 8)))));
    }

    #[test]
    fn negative_base_with_fractional_exponent() {
        let base = Number::Integer(int(-1));
        let exp = Number::Rational(rational((2, 3)));
        assert!(pow(&base, &exp, false).is_err());
    }

    #[test]
    fn exact_rational_root() {
        let result = pow(&Number::Integer(int(8)), &Number::Rational(rational((2, 3))), true).unwrap();
        assert_eq!(result, Some(Number::Integer(int(4))));
    }

    #[test]
    fn inexact_root_stays_symbolic_when_precise() {
        let result = pow(&Number::Integer(int(2)), &Number::Rational(rational((1, 2))), true).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn sqrt_of_perfect_square() {
        let result = sqrt(&Number::Integer(int(144)), true).unwrap();
        assert_eq!(result, Some(Number::Integer(int(12))));
    }

    #[test]
    fn sqrt_of_negative() {
        assert!(sqrt(&Number::Integer(int(-1)), false).is_err());
    }
}
