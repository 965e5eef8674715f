//! Simplification rules for expressions involving addition, including combining like terms.

use crate::number::Number;
use crate::symbolic::Expr;
use super::do_add;

/// Splices the terms of nested sums into the outer sum.
///
/// `a+(b+c) = a+b+c`
pub fn flatten(expr: &Expr) -> Option<Expr> {
    do_add(expr, |terms| {
        if !terms.iter().any(|term| matches!(term, Expr::Add(_))) {
            return None;
        }

        let mut new_terms = Vec::with_capacity(terms.len());
        for term in terms {
            match term {
                Expr::Add(inner) => new_terms.extend(inner.iter().cloned()),
                term => new_terms.push(term.clone()),
            }
        }
        Some(Expr::Add(new_terms))
    })
}

/// Folds all numeric terms into a single number, dropping it entirely when the sum is zero.
///
/// `1+a+2 = 3+a`
/// `0+a = a`
pub fn combine_numbers(expr: &Expr) -> Option<Expr> {
    do_add(expr, |terms| {
        let numbers = terms.iter().filter(|term| term.is_number()).count();
        let has_zero = terms.iter().any(|term| {
            term.as_number().map(Number::is_zero).unwrap_or(false)
        });
        if numbers < 2 && !has_zero {
            return None;
        }

        let mut sum = Number::from(0);
        let mut new_terms = Vec::with_capacity(terms.len());
        for term in terms {
            match term.as_number() {
                Some(num) => sum = sum + num.clone(),
                None => new_terms.push(term.clone()),
            }
        }
        if !sum.is_zero() {
            new_terms.push(Expr::Num(sum));
        }
        Some(Expr::Add(new_terms).downgrade())
    })
}

/// Extracts the numeric coefficient and the remaining factors of a term.
///
/// - `5` -> `(5, nothing)`
/// - `3*a` -> `(3, a)`
/// - `a` -> `(1, a)`
fn split_coefficient(term: &Expr) -> (Number, Vec<Expr>) {
    match term {
        Expr::Num(num) => (num.clone(), Vec::new()),
        Expr::Mul(factors) => {
            let mut coeff = Number::from(1);
            let mut rest = Vec::new();
            for factor in factors {
                match factor.as_number() {
                    Some(num) => coeff = coeff * num.clone(),
                    None => rest.push(factor.clone()),
                }
            }
            (coeff, rest)
        },
        _ => (Number::from(1), vec![term.clone()]),
    }
}

/// Rebuilds a term from its coefficient and factors.
fn join_coefficient(coeff: Number, mut factors: Vec<Expr>) -> Expr {
    if factors.is_empty() {
        return Expr::Num(coeff);
    }
    if coeff.is_one() {
        return Expr::Mul(factors).downgrade();
    }
    factors.insert(0, Expr::Num(coeff));
    Expr::Mul(factors)
}

/// True if two factor lists contain strictly equal factors, in any order.
fn same_factors(lhs: &[Expr], rhs: &[Expr]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().all(|factor| rhs.contains(factor))
}

/// Combines like terms.
///
/// `a+a = 2*a`
/// `2*a+3*a = 5*a`
/// `a*b+b*a = 2*a*b`
pub fn combine_like_terms(expr: &Expr) -> Option<Expr> {
    do_add(expr, |terms| {
        let mut split = terms.iter().map(split_coefficient).collect::<Vec<_>>();
        let mut changed = false;

        let mut current = 0;
        while current < split.len() {
            if split[current].1.is_empty() {
                // plain numbers are handled by `combine_numbers`
                current += 1;
                continue;
            }

            let mut next = current + 1;
            while next < split.len() {
                if same_factors(&split[current].1, &split[next].1) {
                    let (coeff, _) = split.swap_remove(next);
                    split[current].0 = split[current].0.clone() + coeff;
                    changed = true;
                } else {
                    next += 1;
                }
            }

            if split[current].0.is_zero() {
                split.remove(current);
                changed = true;
            } else {
                current += 1;
            }
        }

        if !changed {
            return None;
        }

        let new_terms = split.into_iter()
            .map(|(coeff, factors)| join_coefficient(coeff, factors))
            .collect::<Vec<_>>();
        Some(Expr::Add(new_terms).downgrade())
    })
}

/// Applies all addition rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    flatten(expr)
        .or_else(|| combine_numbers(expr))
        .or_else(|| combine_like_terms(expr))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn num(value: i32) -> Expr {
        Expr::Num(Number::from(value))
    }

    fn sym(name: &str) -> Expr {
        Expr::Symbol(String::from(name))
    }

    #[test]
    fn numbers_fold_into_one_term() {
        let expr = Expr::Add(vec![num(1), sym("a"), num(2)]);
        assert_eq!(combine_numbers(&expr), Some(Expr::Add(vec![sym("a"), num(3)])));
    }

    #[test]
    fn zero_terms_disappear() {
        let expr = Expr::Add(vec![num(0), sym("a")]);
        assert_eq!(combine_numbers(&expr), Some(sym("a")));
    }

    #[test]
    fn like_terms_merge() {
        let expr = Expr::Add(vec![
            Expr::Mul(vec![num(2), sym("a")]),
            Expr::Mul(vec![num(3), sym("a")]),
        ]);
        assert_eq!(
            combine_like_terms(&expr),
            Some(Expr::Mul(vec![num(5), sym("a")])),
        );
    }

    #[test]
    fn bare_symbols_count_as_coefficient_one() {
        let expr = Expr::Add(vec![sym("a"), sym("a")]);
        assert_eq!(
            combine_like_terms(&expr),
            Some(Expr::Mul(vec![num(2), sym("a")])),
        );
    }

    #[test]
    fn cancelling_terms_vanish() {
        let expr = Expr::Add(vec![
            sym("a"),
            Expr::Mul(vec![num(-1), sym("a")]),
        ]);
        assert_eq!(combine_like_terms(&expr), Some(num(0)));
    }

    #[test]
    fn unrelated_terms_are_untouched() {
        let expr = Expr::Add(vec![sym("a"), sym("b")]);
        assert_eq!(combine_like_terms(&expr), None);
    }
}
