//! Solving single-variable polynomial equations of degree two or less.
//!
//! The solver operates on the canonical form produced by [`simplify`](super::simplify): an
//! equation with everything moved to the left-hand side and zero on the right. When the
//! left-hand side is a polynomial of degree one or two in a single variable, the roots are
//! computed numerically and rendered as `x in {r1,r2}`. Anything else, including equations with
//! no real roots, renders unchanged.

use std::cmp::Ordering;
use crate::funcs;
use crate::number::{fmt::format_precision, Number};
use super::expr::{fmt::render, CmpOp, Expr};

/// Solves the equation, or renders it unchanged when it cannot be solved.
pub fn solve(expr: &Expr, digits: Option<usize>) -> String {
    if let Some((variable, roots)) = roots(expr) {
        if !roots.is_empty() {
            let rendered = roots.iter()
                .map(|root| match digits {
                    Some(digits) => format_precision(root, digits),
                    None => root.to_string(),
                })
                .collect::<Vec<_>>();
            return format!("{} in {{{}}}", variable, rendered.join(","));
        }
    }

    render(expr, digits)
}

/// The coefficient and degree of one polynomial term in `variable`.
fn term_coefficient(term: &Expr, variable: &str) -> Option<(Number, usize)> {
    fn power_degree(base: &Expr, exp: &Expr, variable: &str) -> Option<usize> {
        let Expr::Symbol(name) = base else {
            return None;
        };
        if name != variable {
            return None;
        }
        let degree = exp.as_integer()?.to_usize()?;
        (degree <= 2).then_some(degree)
    }

    match term {
        Expr::Num(num) => Some((num.clone(), 0)),
        Expr::Symbol(name) if name == variable => Some((Number::from(1), 1)),
        Expr::Pow(base, exp) => {
            Some((Number::from(1), power_degree(base, exp, variable)?))
        },
        Expr::Mul(factors) => {
            let mut coeff = Number::from(1);
            let mut degree = None;
            for factor in factors {
                match factor {
                    Expr::Num(num) => coeff = coeff * num.clone(),
                    Expr::Symbol(name) if name == variable && degree.is_none() => {
                        degree = Some(1);
                    },
                    Expr::Pow(base, exp) if degree.is_none() => {
                        degree = Some(power_degree(base, exp, variable)?);
                    },
                    _ => return None,
                }
            }
            Some((coeff, degree?))
        },
        _ => None,
    }
}

/// Extracts the variable and the real roots of the equation. `None` means the expression is not
/// an equation the solver understands; an empty root list means the equation is understood but
/// has no real roots.
fn roots(expr: &Expr) -> Option<(String, Vec<Number>)> {
    let Expr::Cmp(CmpOp::Eq, lhs, rhs) = expr else {
        return None;
    };
    if !rhs.as_number()?.is_zero() {
        return None;
    }

    let variables = lhs.variables();
    if variables.len() != 1 {
        return None;
    }
    let variable = variables.into_iter().next()?.to_string();

    let terms = match &**lhs {
        Expr::Add(terms) => terms.as_slice(),
        term => std::slice::from_ref(term),
    };
    let mut coeffs = [Number::from(0), Number::from(0), Number::from(0)];
    for term in terms {
        let (coeff, degree) = term_coefficient(term, &variable)?;
        coeffs[degree] = coeffs[degree].clone() + coeff;
    }
    let [c0, c1, c2] = coeffs;

    let roots = if !c2.is_zero() {
        quadratic_roots(c0, c1, c2)?
    } else if !c1.is_zero() {
        vec![(-c0).checked_div(c1)?]
    } else {
        return None;
    };
    Some((variable, roots))
}

/// The real roots of `c2*x^2 + c1*x + c0 = 0`, ascending. An empty list means the discriminant
/// is negative.
fn quadratic_roots(c0: Number, c1: Number, c2: Number) -> Option<Vec<Number>> {
    let discriminant = c1.clone() * c1.clone() - Number::from(4) * c0 * c2.clone();
    if discriminant.is_negative() {
        return Some(Vec::new());
    }

    // non-negative, so the square root always evaluates; it is exact for perfect squares
    let sqrt = funcs::power::sqrt(&discriminant, false).ok()??;
    let denominator = Number::from(2) * c2;

    let low = ((-c1.clone()) - sqrt.clone()).checked_div(denominator.clone())?;
    let high = ((-c1) + sqrt).checked_div(denominator)?;

    let mut roots = match low.cmp_value(&high) {
        Ordering::Less => vec![low, high],
        Ordering::Greater => vec![high, low],
        Ordering::Equal => vec![low],
    };
    roots.dedup_by(|lhs, rhs| lhs.cmp_value(rhs) == Ordering::Equal);
    Some(roots)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symcas_parser::parser::{expr::Expr as AstExpr, registry::Registry, Parser};
    use crate::symbolic::simplify;
    use super::*;

    /// Parses, simplifies, and solves the given equation.
    fn solved(source: &str) -> String {
        let registry = Registry::default();
        let mut parser = Parser::new(source, &registry);
        let ast = parser.try_parse_full::<AstExpr>().unwrap();
        solve(&simplify(&Expr::from(ast), false), None)
    }

    #[test]
    fn linear() {
        assert_eq!(solved("x = 1"), "x in {1}");
        assert_eq!(solved("2*x+4 = 0"), "x in {-2}");
        assert_eq!(solved("3*x = 1"), "x in {1/3}");
    }

    #[test]
    fn quadratic_with_integer_roots() {
        assert_eq!(solved("x^2 = 4"), "x in {-2,2}");
        assert_eq!(solved("x^2-3*x+2 = 0"), "x in {1,2}");
    }

    #[test]
    fn repeated_root() {
        assert_eq!(solved("x^2-2*x+1 = 0"), "x in {1}");
    }

    #[test]
    fn negative_discriminant_echoes() {
        assert_eq!(solved("x^2+1 = 0"), "x^2+1 = 0");
    }

    #[test]
    fn unsupported_equations_echo() {
        assert_eq!(solved("x^3 = 1"), "x^3-1 = 0");
        assert_eq!(solved("x+y = 1"), "x+y-1 = 0");
        assert_eq!(solved("sin(x) = 0"), "sin(x) = 0");
    }

    #[test]
    fn inequalities_echo() {
        assert_eq!(solved("x < 1"), "x-1 < 0");
    }
}
