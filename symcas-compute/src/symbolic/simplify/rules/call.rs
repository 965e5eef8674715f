//! Simplification rules for function calls and named constants.

use crate::consts;
use crate::funcs;
use crate::number::Number;
use crate::symbolic::Expr;

/// Replaces a named constant by its numeric approximation. Only applies when approximation is
/// allowed; an exact simplification keeps `e` and `pi` symbolic.
pub fn approx_const(expr: &Expr, precise: bool) -> Option<Expr> {
    if precise {
        return None;
    }

    use symcas_parser::parser::registry::ConstKind;
    match expr {
        Expr::Const(ConstKind::E) => Some(Expr::Num(Number::Real(consts::E.clone()))),
        Expr::Const(ConstKind::Pi) => Some(Expr::Num(Number::Real(consts::PI.clone()))),
        _ => None,
    }
}

/// Evaluates a function call whose arguments are all numbers.
///
/// `sqrt(144) = 12`
/// `sqrt(-1)` is undefined
pub fn eval(expr: &Expr, precise: bool) -> Option<Expr> {
    let Expr::Call(kind, args) = expr else {
        return None;
    };
    let args = args.iter()
        .map(|arg| arg.as_number().cloned())
        .collect::<Option<Vec<_>>>()?;

    match funcs::eval(*kind, &args, precise) {
        Ok(Some(result)) => Some(Expr::Num(result)),
        Ok(None) => None,
        Err(err) => Some(Expr::Undefined(err)),
    }
}

/// Applies all call rules.
pub fn all(expr: &Expr, precise: bool) -> Option<Expr> {
    approx_const(expr, precise)
        .or_else(|| eval(expr, precise))
}
