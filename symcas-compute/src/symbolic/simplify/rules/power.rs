//! Simplification rules for expressions involving exponentiation.

use crate::funcs;
use crate::number::Number;
use crate::primitive::int;
use crate::symbolic::Expr;
use super::do_power;

/// Evaluates a power of two numbers.
///
/// `2^10 = 1024`
/// `2^(-3) = 1/8`
/// `0^0` is undefined
pub fn eval(expr: &Expr, precise: bool) -> Option<Expr> {
    do_power(expr, |base, exp| {
        let base = base.as_number()?;
        let exp = exp.as_number()?;
        match funcs::power::pow(base, exp, precise) {
            Ok(Some(result)) => Some(Expr::Num(result)),
            Ok(None) => None,
            Err(err) => Some(Expr::Undefined(err)),
        }
    })
}

/// Eliminates trivial exponents and bases over symbolic operands.
///
/// `a^0 = 1`
/// `a^1 = a`
/// `1^a = 1`
pub fn trivial(expr: &Expr) -> Option<Expr> {
    do_power(expr, |base, exp| {
        if let Some(num) = exp.as_number() {
            if num.is_zero() {
                return Some(Expr::Num(Number::Integer(int(1))));
            }
            if num.is_one() {
                return Some(base.clone());
            }
        }
        if let Some(num) = base.as_number() {
            if num.is_one() {
                return Some(Expr::Num(Number::Integer(int(1))));
            }
        }
        None
    })
}

/// Peels one factor off a sum raised to a positive integer power, so that `distribute` can expand
/// the product.
///
/// `(a+b)^3 = (a+b)*(a+b)^2`
pub fn expand_sum(expr: &Expr) -> Option<Expr> {
    do_power(expr, |base, exp| {
        if !matches!(base, Expr::Add(_)) {
            return None;
        }
        let exp = expr_integer(exp)?;
        if exp < 2 {
            return None;
        }

        Some(Expr::Mul(vec![
            base.clone(),
            Expr::Pow(
                Box::new(base.clone()),
                Box::new(Expr::Num(Number::Integer(exp - 1))),
            ),
        ]))
    })
}

/// Distributes an integer power over the factors of a product.
///
/// `(a*b)^2 = a^2*b^2`
pub fn expand_product(expr: &Expr) -> Option<Expr> {
    do_power(expr, |base, exp| {
        let Expr::Mul(factors) = base else {
            return None;
        };
        expr_integer(exp)?;

        Some(Expr::Mul(
            factors.iter()
                .map(|factor| Expr::Pow(Box::new(factor.clone()), Box::new(exp.clone())))
                .collect(),
        ))
    })
}

/// Multiplies the exponents of an integer power of an integer power.
///
/// `(a^2)^3 = a^6`
pub fn merge_nested(expr: &Expr) -> Option<Expr> {
    do_power(expr, |base, exp| {
        let Expr::Pow(inner_base, inner_exp) = base else {
            return None;
        };
        let outer = expr_integer(exp)?;
        let inner = expr_integer(inner_exp)?;

        Some(Expr::Pow(
            Box::new((**inner_base).clone()),
            Box::new(Expr::Num(Number::Integer(inner * outer))),
        ))
    })
}

/// If the expression is an integer number, returns the contained integer.
fn expr_integer(expr: &Expr) -> Option<rug::Integer> {
    expr.as_integer().cloned()
}

/// Applies all exponentiation rules.
pub fn all(expr: &Expr, precise: bool) -> Option<Expr> {
    eval(expr, precise)
        .or_else(|| trivial(expr))
        .or_else(|| expand_sum(expr))
        .or_else(|| expand_product(expr))
        .or_else(|| merge_nested(expr))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::primitive::rational;
    use super::*;

    fn num(value: i32) -> Expr {
        Expr::Num(Number::from(value))
    }

    fn sym(name: &str) -> Expr {
        Expr::Symbol(String::from(name))
    }

    fn pow(base: Expr, exp: Expr) -> Expr {
        Expr::Pow(Box::new(base), Box::new(exp))
    }

    #[test]
    fn numeric_powers_evaluate() {
        assert_eq!(eval(&pow(num(2), num(10)), true), Some(num(1024)));
        assert_eq!(
            eval(&pow(num(2), num(-3)), true),
            Some(Expr::Num(Number::Rational(rational((1, 8))))),
        );
    }

    #[test]
    fn zero_to_the_zero_is_undefined() {
        assert!(eval(&pow(num(0), num(0)), false).unwrap().is_undefined());
    }

    #[test]
    fn trivial_exponents() {
        assert_eq!(trivial(&pow(sym("a"), num(0))), Some(num(1)));
        assert_eq!(trivial(&pow(sym("a"), num(1))), Some(sym("a")));
        assert_eq!(trivial(&pow(num(1), sym("a"))), Some(num(1)));
    }

    #[test]
    fn negative_symbolic_exponents_are_kept() {
        assert_eq!(all(&pow(sym("a"), num(-3)), false), None);
    }

    #[test]
    fn sums_peel_one_factor() {
        let base = Expr::Add(vec![sym("a"), sym("b")]);
        assert_eq!(
            expand_sum(&pow(base.clone(), num(3))),
            Some(Expr::Mul(vec![base.clone(), pow(base, num(2))])),
        );
    }

    #[test]
    fn nested_integer_powers_merge() {
        assert_eq!(
            merge_nested(&pow(pow(sym("a"), num(2)), num(3))),
            Some(pow(sym("a"), num(6))),
        );
    }
}
