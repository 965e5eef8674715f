//! Canonical ordering of terms and factors.
//!
//! After the rewrite rules reach a fixed point, the lists inside [`Expr::Add`] and [`Expr::Mul`]
//! nodes are sorted so that equal expressions always render identically. Terms of a sum are
//! ordered by falling degree with the numeric term last, which prints polynomials the familiar
//! way: `x^2-3*x+2`. Factors of a product put the numeric coefficient first and order the rest
//! by falling exponent, then alphabetically: `3*a^2*b`.

use std::cmp::Ordering;
use crate::number::Number;
use crate::symbolic::Expr;

/// The base of a factor: `a^2` has base `a`, anything that is not a power is its own base.
fn base(factor: &Expr) -> &Expr {
    match factor {
        Expr::Pow(base, _) => base,
        _ => factor,
    }
}

/// The numeric exponent of a factor. A power with a non-numeric exponent counts as 1, like any
/// other non-power factor.
fn exponent(factor: &Expr) -> Number {
    match factor {
        Expr::Num(_) => Number::from(0),
        Expr::Pow(_, exp) => match exp.as_number() {
            Some(num) => num.clone(),
            None => Number::from(1),
        },
        _ => Number::from(1),
    }
}

/// The factors of a term. A term that is not a product is its own single factor.
fn factors(term: &Expr) -> &[Expr] {
    match term {
        Expr::Mul(factors) => factors,
        _ => std::slice::from_ref(term),
    }
}

/// An arbitrary but stable structural ordering of expressions, used to break ties. Symbols
/// compare alphabetically.
fn structural_cmp(lhs: &Expr, rhs: &Expr) -> Ordering {
    fn rank(expr: &Expr) -> u8 {
        match expr {
            Expr::Symbol(_) => 0,
            Expr::Const(_) => 1,
            Expr::Call(..) => 2,
            Expr::Pow(..) => 3,
            Expr::Mul(_) => 4,
            Expr::Add(_) => 5,
            Expr::Num(_) => 6,
            Expr::Cmp(..) => 7,
            Expr::Undefined(_) => 8,
        }
    }

    fn list_cmp(lhs: &[Expr], rhs: &[Expr]) -> Ordering {
        for (lhs, rhs) in lhs.iter().zip(rhs) {
            let ordering = structural_cmp(lhs, rhs);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        lhs.len().cmp(&rhs.len())
    }

    match (lhs, rhs) {
        (Expr::Symbol(lhs), Expr::Symbol(rhs)) => lhs.cmp(rhs),
        (Expr::Const(lhs), Expr::Const(rhs)) => lhs.name().cmp(rhs.name()),
        (Expr::Num(lhs), Expr::Num(rhs)) => lhs.cmp_value(rhs),
        (Expr::Call(lhs_func, lhs_args), Expr::Call(rhs_func, rhs_args)) => {
            lhs_func.name().cmp(rhs_func.name()).then_with(|| list_cmp(lhs_args, rhs_args))
        },
        (Expr::Pow(lhs_base, lhs_exp), Expr::Pow(rhs_base, rhs_exp)) => {
            structural_cmp(lhs_base, rhs_base).then_with(|| structural_cmp(lhs_exp, rhs_exp))
        },
        (Expr::Add(lhs), Expr::Add(rhs)) | (Expr::Mul(lhs), Expr::Mul(rhs)) => {
            list_cmp(lhs, rhs)
        },
        _ => rank(lhs).cmp(&rank(rhs)),
    }
}

/// Orders the factors of a product: the numeric coefficient first, then falling exponent, then
/// the structural order of the bases.
pub fn factor_cmp(lhs: &Expr, rhs: &Expr) -> Ordering {
    match (lhs.is_number(), rhs.is_number()) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (true, true) => return lhs.as_number().unwrap().cmp_value(rhs.as_number().unwrap()),
        (false, false) => {},
    }

    exponent(rhs).cmp_value(&exponent(lhs))
        .then_with(|| structural_cmp(base(lhs), base(rhs)))
}

/// The degree of a term and the factor that holds it, i.e. the largest exponent among the term's
/// non-numeric factors.
fn max_exponent(term: &Expr) -> (Number, &Expr) {
    let mut best: Option<(Number, &Expr)> = None;
    for factor in factors(term) {
        if factor.is_number() {
            continue;
        }
        let exp = exponent(factor);
        match &best {
            Some((max, _)) if exp.cmp_value(max) != Ordering::Greater => {},
            _ => best = Some((exp, factor)),
        }
    }
    best.unwrap_or((Number::from(0), term))
}

/// The numeric coefficient of a term, 1 when none is written.
fn coefficient(term: &Expr) -> Number {
    factors(term)
        .iter()
        .filter_map(Expr::as_number)
        .fold(Number::from(1), |acc, num| acc * num.clone())
}

/// The number of non-numeric factors in a term.
fn symbolic_factor_count(term: &Expr) -> usize {
    factors(term).iter().filter(|factor| !factor.is_number()).count()
}

/// Orders the terms of a sum: non-numeric terms before the constant term, falling degree, fewer
/// symbolic factors first, then structural order on the factor carrying the degree and on the
/// whole factor lists, and finally the coefficient.
pub fn term_cmp(lhs: &Expr, rhs: &Expr) -> Ordering {
    match (lhs.is_number(), rhs.is_number()) {
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (true, true) => return rhs.as_number().unwrap().cmp_value(lhs.as_number().unwrap()),
        (false, false) => {},
    }

    let (lhs_degree, lhs_leader) = max_exponent(lhs);
    let (rhs_degree, rhs_leader) = max_exponent(rhs);

    rhs_degree.cmp_value(&lhs_degree)
        .then_with(|| symbolic_factor_count(lhs).cmp(&symbolic_factor_count(rhs)))
        .then_with(|| structural_cmp(base(lhs_leader), base(rhs_leader)))
        .then_with(|| {
            let lhs_factors = factors(lhs);
            let rhs_factors = factors(rhs);
            for (lhs, rhs) in lhs_factors.iter().zip(rhs_factors) {
                let ordering = structural_cmp(lhs, rhs);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            lhs_factors.len().cmp(&rhs_factors.len())
        })
        .then_with(|| coefficient(rhs).cmp_value(&coefficient(lhs)))
}

/// Recursively sorts every sum and product in the expression into canonical order.
pub fn sort(expr: Expr) -> Expr {
    match expr {
        Expr::Add(terms) => {
            let mut terms = terms.into_iter().map(sort).collect::<Vec<_>>();
            terms.sort_by(term_cmp);
            Expr::Add(terms)
        },
        Expr::Mul(factors) => {
            let mut factors = factors.into_iter().map(sort).collect::<Vec<_>>();
            factors.sort_by(factor_cmp);
            Expr::Mul(factors)
        },
        Expr::Pow(base, exp) => Expr::Pow(Box::new(sort(*base)), Box::new(sort(*exp))),
        Expr::Call(kind, args) => {
            Expr::Call(kind, args.into_iter().map(sort).collect())
        },
        Expr::Cmp(op, lhs, rhs) => {
            Expr::Cmp(op, Box::new(sort(*lhs)), Box::new(sort(*rhs)))
        },
        expr => expr,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::number::Number;
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
    fn polynomial_order() {
        let expr = sort(Expr::Add(vec![
            num(2),
            Expr::Mul(vec![num(-3), sym("x")]),
            pow(sym("x"), num(2)),
        ]));
        assert_eq!(expr.to_string(), "x^2-3*x+2");
    }

    #[test]
    fn binomial_square_order() {
        // a^2, b^2, and 2ab in arbitrary order
        let expr = sort(Expr::Add(vec![
            Expr::Mul(vec![sym("b"), num(2), sym("a")]),
            pow(sym("b"), num(2)),
            pow(sym("a"), num(2)),
        ]));
        assert_eq!(expr.to_string(), "a^2+b^2+2*a*b");
    }

    #[test]
    fn mixed_degree_order() {
        // terms of (a+b)^3
        let expr = sort(Expr::Add(vec![
            Expr::Mul(vec![num(3), pow(sym("b"), num(2)), sym("a")]),
            pow(sym("b"), num(3)),
            Expr::Mul(vec![num(3), sym("b"), pow(sym("a"), num(2))]),
            pow(sym("a"), num(3)),
        ]));
        assert_eq!(expr.to_string(), "a^3+b^3+3*a^2*b+3*b^2*a");
    }

    #[test]
    fn factor_order_puts_coefficient_first() {
        let expr = sort(Expr::Mul(vec![sym("b"), pow(sym("a"), num(2)), num(4)]));
        assert_eq!(expr.to_string(), "4*a^2*b");
    }
}
