//! Simplification rules for comparisons.
//!
//! Comparisons are normalized by moving everything to the left-hand side, so `x = 1` becomes
//! `x-1 = 0`. Once the left-hand side reduces to a number, the comparison itself evaluates to 1
//! (true) or 0 (false).

use std::ops::Neg;
use crate::number::Number;
use crate::symbolic::Expr;

/// Moves a non-zero right-hand side over to the left.
///
/// `x = 1` becomes `x-1 = 0`
pub fn normalize(expr: &Expr) -> Option<Expr> {
    let Expr::Cmp(op, lhs, rhs) = expr else {
        return None;
    };
    if rhs.as_number().map(Number::is_zero).unwrap_or(false) {
        return None;
    }

    Some(Expr::Cmp(
        *op,
        Box::new((**lhs).clone() + (**rhs).clone().neg()),
        Box::new(Expr::Num(Number::from(0))),
    ))
}

/// Evaluates a comparison whose left-hand side has reduced to a number.
///
/// `1 = 1` becomes `1`
/// `2 < 1` becomes `0`
pub fn eval(expr: &Expr) -> Option<Expr> {
    let Expr::Cmp(op, lhs, rhs) = expr else {
        return None;
    };
    let lhs = lhs.as_number()?;
    let rhs = rhs.as_number()?;

    let holds = op.test(lhs.cmp_value(rhs));
    Some(Expr::Num(Number::from(i32::from(holds))))
}

/// Applies all comparison rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    normalize(expr)
        .or_else(|| eval(expr))
}
