//! Simplification rules for expressions involving multiplication, including distribution over
//! sums.

use crate::number::Number;
use crate::symbolic::Expr;
use super::do_multiply;

/// Splices the factors of nested products into the outer product.
///
/// `a*(b*c) = a*b*c`
pub fn flatten(expr: &Expr) -> Option<Expr> {
    do_multiply(expr, |factors| {
        if !factors.iter().any(|factor| matches!(factor, Expr::Mul(_))) {
            return None;
        }

        let mut new_factors = Vec::with_capacity(factors.len());
        for factor in factors {
            match factor {
                Expr::Mul(inner) => new_factors.extend(inner.iter().cloned()),
                factor => new_factors.push(factor.clone()),
            }
        }
        Some(Expr::Mul(new_factors))
    })
}

/// Folds all numeric factors into a single coefficient. A zero factor annihilates the whole
/// product; a coefficient of one is dropped.
///
/// `2*a*3 = 6*a`
/// `0*a = 0`
/// `1*a = a`
pub fn combine_numbers(expr: &Expr) -> Option<Expr> {
    do_multiply(expr, |factors| {
        if factors.iter().any(|factor| {
            factor.as_number().map(Number::is_zero).unwrap_or(false)
        }) {
            return Some(Expr::Num(Number::from(0)));
        }

        let numbers = factors.iter().filter(|factor| factor.is_number()).count();
        let has_one = factors.iter().any(|factor| {
            factor.as_number().map(Number::is_one).unwrap_or(false)
        });
        if numbers < 2 && !has_one {
            return None;
        }

        let mut product = Number::from(1);
        let mut new_factors = Vec::with_capacity(factors.len());
        for factor in factors {
            match factor.as_number() {
                Some(num) => product = product * num.clone(),
                None => new_factors.push(factor.clone()),
            }
        }
        if !product.is_one() {
            new_factors.insert(0, Expr::Num(product));
        }
        Some(Expr::Mul(new_factors).downgrade())
    })
}

/// Splits a factor into its base and exponent. A factor that is not a power has exponent 1.
fn split_power(factor: &Expr) -> (Expr, Expr) {
    match factor {
        Expr::Pow(base, exp) => ((**base).clone(), (**exp).clone()),
        _ => (factor.clone(), Expr::Num(Number::from(1))),
    }
}

/// True if the exponent is a concrete negative number.
fn negative_exponent(exp: &Expr) -> bool {
    exp.as_number().map(Number::is_negative).unwrap_or(false)
}

/// Combines factors sharing a base by adding their exponents.
///
/// `a*a = a^2`
/// `a*a^2 = a^3`
/// `a^x*a^y = a^(x+y)`
/// `(a+b)*(a+b)^(-1) = (a+b)^0`
///
/// Factors whose base is a sum only merge when one of the exponents is negative: merging two
/// positive powers of a sum would rebuild the power that `expand_sum` peels apart, while an
/// opposite-sign merge strictly shrinks the product.
pub fn combine_like_factors(expr: &Expr) -> Option<Expr> {
    do_multiply(expr, |factors| {
        let mut split = factors.iter()
            .map(|factor| {
                let (base, exp) = split_power(factor);
                // numeric coefficients are handled by `combine_numbers`
                (factor.is_number(), base, exp)
            })
            .collect::<Vec<_>>();
        let mut changed = false;

        let mut current = 0;
        while current < split.len() {
            if split[current].0 {
                current += 1;
                continue;
            }

            let mut next = current + 1;
            while next < split.len() {
                let mergeable = !split[next].0
                    && split[current].1 == split[next].1
                    && (!matches!(split[current].1, Expr::Add(_))
                        || negative_exponent(&split[current].2)
                        || negative_exponent(&split[next].2));
                if mergeable {
                    let (_, _, exp) = split.swap_remove(next);
                    let current_exp = std::mem::replace(
                        &mut split[current].2,
                        Expr::Num(Number::from(0)),
                    );
                    split[current].2 = current_exp + exp;
                    changed = true;
                } else {
                    next += 1;
                }
            }

            current += 1;
        }

        if !changed {
            return None;
        }

        let new_factors = split.into_iter()
            .map(|(_, base, exp)| match exp.as_number() {
                Some(num) if num.is_one() => base,
                _ => Expr::Pow(Box::new(base), Box::new(exp)),
            })
            .collect::<Vec<_>>();
        Some(Expr::Mul(new_factors).downgrade())
    })
}

/// True if the factor belongs to the denominator of the product, i.e. is a power with a negative
/// numeric exponent. Sums are never distributed into denominators, which keeps fractions like
/// `(a+3)/(b+2)` intact.
fn is_denominator(factor: &Expr) -> bool {
    if let Expr::Pow(_, exp) = factor {
        if let Some(num) = exp.as_number() {
            return num.is_negative();
        }
    }
    false
}

/// Distributes a sum over the other factors of a product.
///
/// `2*(a+b) = 2*a+2*b`
/// `(a+b)*(c+d) = a*(c+d)+b*(c+d)`
pub fn distribute(expr: &Expr) -> Option<Expr> {
    do_multiply(expr, |factors| {
        let position = factors.iter().position(|factor| matches!(factor, Expr::Add(_)))?;

        let mut distributed = Vec::new();
        let mut kept = Vec::new();
        for (index, factor) in factors.iter().enumerate() {
            if index == position {
                continue;
            }
            if is_denominator(factor) {
                kept.push(factor.clone());
            } else {
                distributed.push(factor.clone());
            }
        }
        let multiplier = distributed.into_iter().reduce(|lhs, rhs| lhs * rhs)?;

        let Expr::Add(terms) = &factors[position] else {
            unreachable!("the factor at `position` is a sum");
        };
        let sum = Expr::Add(
            terms.iter()
                .map(|term| term.clone() * multiplier.clone())
                .collect(),
        );
        Some(kept.into_iter().fold(sum, |acc, factor| acc * factor))
    })
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    flatten(expr)
        .or_else(|| combine_numbers(expr))
        .or_else(|| combine_like_factors(expr))
        .or_else(|| distribute(expr))
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

    fn pow(base: Expr, exp: Expr) -> Expr {
        Expr::Pow(Box::new(base), Box::new(exp))
    }

    #[test]
    fn zero_annihilates() {
        let expr = Expr::Mul(vec![num(0), sym("a")]);
        assert_eq!(combine_numbers(&expr), Some(num(0)));
    }

    #[test]
    fn unit_coefficient_is_dropped() {
        let expr = Expr::Mul(vec![num(1), sym("a")]);
        assert_eq!(combine_numbers(&expr), Some(sym("a")));
    }

    #[test]
    fn like_factors_merge_exponents() {
        let expr = Expr::Mul(vec![sym("a"), sym("a")]);
        assert_eq!(combine_like_factors(&expr), Some(pow(sym("a"), num(2))));
    }

    #[test]
    fn powers_of_the_same_base_merge() {
        let expr = Expr::Mul(vec![sym("a"), pow(sym("a"), num(2))]);
        assert_eq!(combine_like_factors(&expr), Some(pow(sym("a"), num(3))));
    }

    #[test]
    fn symbolic_exponents_merge_into_a_sum() {
        let expr = Expr::Mul(vec![pow(sym("a"), sym("x")), pow(sym("a"), sym("y"))]);
        assert_eq!(
            combine_like_factors(&expr),
            Some(pow(sym("a"), Expr::Add(vec![sym("x"), sym("y")]))),
        );
    }

    #[test]
    fn opposite_powers_of_a_sum_cancel() {
        let sum = Expr::Add(vec![sym("a"), sym("b")]);
        let expr = Expr::Mul(vec![sum.clone(), sum.clone(), pow(sum.clone(), num(-1))]);
        assert_eq!(
            combine_like_factors(&expr),
            Some(Expr::Mul(vec![pow(sum.clone(), num(0)), sum])),
        );
    }

    #[test]
    fn positive_powers_of_a_sum_do_not_merge() {
        let sum = Expr::Add(vec![sym("a"), sym("b")]);
        let expr = Expr::Mul(vec![sum.clone(), sum]);
        assert_eq!(combine_like_factors(&expr), None);
    }

    #[test]
    fn duplicate_denominators_merge() {
        let sum = Expr::Add(vec![sym("a"), sym("b")]);
        let expr = Expr::Mul(vec![
            pow(sum.clone(), num(-1)),
            pow(sum.clone(), num(-1)),
        ]);
        assert_eq!(combine_like_factors(&expr), Some(pow(sum, num(-2))));
    }

    #[test]
    fn sums_distribute_over_coefficients() {
        let expr = Expr::Mul(vec![num(2), Expr::Add(vec![sym("a"), sym("b")])]);
        assert_eq!(
            distribute(&expr),
            Some(Expr::Add(vec![
                Expr::Mul(vec![sym("a"), num(2)]),
                Expr::Mul(vec![sym("b"), num(2)]),
            ])),
        );
    }

    #[test]
    fn sums_stay_out_of_denominators() {
        // (a+3) * (b+2)^(-1) must not distribute
        let expr = Expr::Mul(vec![
            Expr::Add(vec![sym("a"), num(3)]),
            pow(Expr::Add(vec![sym("b"), num(2)]), num(-1)),
        ]);
        assert_eq!(distribute(&expr), None);
    }
}
