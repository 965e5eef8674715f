//! Rendering of [`Expr`]s as strings.
//!
//! The output format matches the way the input is written: `+` and `*` are printed without
//! surrounding spaces, comparisons with them. A [`Expr::Mul`] containing factors with negative
//! exponents is printed as a fraction, so `(a+3) * (b+2)^(-1)` renders as `(a+3)/(b+2)`.

use std::fmt::{self, Display, Formatter};
use crate::number::{fmt::format_precision, Number};
use super::Expr;

/// Renders an expression, approximating numbers to `digits` significant digits if given.
pub fn render(expr: &Expr, digits: Option<usize>) -> String {
    fmt_expr(expr, digits)
}

fn fmt_number(num: &Number, digits: Option<usize>) -> String {
    match digits {
        Some(digits) => format_precision(num, digits),
        None => num.to_string(),
    }
}

/// True if the expression renders as a single token that never needs parentheses.
fn is_atom(expr: &Expr) -> bool {
    match expr {
        Expr::Symbol(_) | Expr::Const(_) | Expr::Call(..) => true,
        Expr::Num(num) => num.is_integer() && !num.is_negative(),
        _ => false,
    }
}

/// Renders a factor of a product, parenthesizing sums.
fn fmt_factor(expr: &Expr, digits: Option<usize>) -> String {
    match expr {
        Expr::Add(_) | Expr::Cmp(..) => format!("({})", fmt_expr(expr, digits)),
        _ => fmt_expr(expr, digits),
    }
}

/// Renders the base or operand position of a power or factorial.
fn fmt_tight(expr: &Expr, digits: Option<usize>) -> String {
    if is_atom(expr) {
        fmt_expr(expr, digits)
    } else {
        format!("({})", fmt_expr(expr, digits))
    }
}

fn fmt_pow(base: &Expr, exp: &Expr, digits: Option<usize>) -> String {
    let exp_str = match exp {
        Expr::Num(num) if num.is_integer() && !num.is_negative() => fmt_number(num, digits),
        Expr::Symbol(_) | Expr::Const(_) | Expr::Call(..) => fmt_expr(exp, digits),
        _ => format!("({})", fmt_expr(exp, digits)),
    };
    format!("{}^{}", fmt_tight(base, digits), exp_str)
}

/// If the factor is a power with a negative numeric exponent, returns its rendering as a
/// denominator entry.
fn as_denominator(factor: &Expr, digits: Option<usize>) -> Option<String> {
    let Expr::Pow(base, exp) = factor else {
        return None;
    };
    let Expr::Num(num) = &**exp else {
        return None;
    };
    if !num.is_negative() {
        return None;
    }

    let flipped = -num.clone();
    Some(if flipped.is_one() {
        fmt_factor(base, digits)
    } else {
        fmt_pow(base, &Expr::Num(flipped), digits)
    })
}

fn fmt_mul(factors: &[Expr], digits: Option<usize>) -> String {
    let mut negated = false;
    let mut numerator = Vec::new();
    let mut denominator = Vec::new();

    for factor in factors {
        if let Some(entry) = as_denominator(factor, digits) {
            denominator.push(entry);
            continue;
        }
        match factor.as_number() {
            // fold a coefficient of -1 into a leading sign
            Some(num) if factors.len() > 1 && num.is_integer() && (-num.clone()).is_one() => {
                negated = true;
            },
            _ => numerator.push(fmt_factor(factor, digits)),
        }
    }

    let mut out = String::new();
    if negated {
        out.push('-');
    }
    if numerator.is_empty() {
        out.push('1');
    } else {
        out.push_str(&numerator.join("*"));
    }

    if !denominator.is_empty() {
        out.push('/');
        if denominator.len() == 1 {
            out.push_str(&denominator[0]);
        } else {
            out.push('(');
            out.push_str(&denominator.join("*"));
            out.push(')');
        }
    }

    out
}

fn fmt_add(terms: &[Expr], digits: Option<usize>) -> String {
    let mut out = String::new();
    for term in terms {
        let rendered = fmt_expr(term, digits);
        if !out.is_empty() && !rendered.starts_with('-') {
            out.push('+');
        }
        out.push_str(&rendered);
    }
    out
}

fn fmt_expr(expr: &Expr, digits: Option<usize>) -> String {
    match expr {
        Expr::Num(num) => fmt_number(num, digits),
        Expr::Symbol(name) => name.clone(),
        Expr::Const(kind) => String::from(kind.name()),
        Expr::Call(kind, args) => {
            use symcas_parser::parser::registry::FuncKind;
            match kind {
                FuncKind::Factorial | FuncKind::DoubleFactorial => {
                    format!("{}{}", fmt_tight(&args[0], digits), kind.name())
                },
                _ => {
                    let args = args.iter()
                        .map(|arg| fmt_expr(arg, digits))
                        .collect::<Vec<_>>();
                    format!("{}({})", kind.name(), args.join(", "))
                },
            }
        },
        Expr::Add(terms) => fmt_add(terms, digits),
        Expr::Mul(factors) => fmt_mul(factors, digits),
        Expr::Pow(base, exp) => fmt_pow(base, exp, digits),
        Expr::Cmp(op, lhs, rhs) => {
            format!("{} {} {}", fmt_expr(lhs, digits), op.symbol(), fmt_expr(rhs, digits))
        },
        Expr::Undefined(err) => err.to_string(),
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(self, None))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symcas_parser::parser::registry::FuncKind;
    use crate::number::Number;
    use crate::primitive::{int, rational};
    use super::super::{CmpOp, Expr};

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
    fn sums_fold_signs() {
        let expr = Expr::Add(vec![
            pow(sym("x"), num(2)),
            Expr::Mul(vec![num(-3), sym("x")]),
            num(2),
        ]);
        assert_eq!(expr.to_string(), "x^2-3*x+2");
    }

    #[test]
    fn negative_unit_coefficient() {
        let expr = Expr::Mul(vec![num(-1), sym("a")]);
        assert_eq!(expr.to_string(), "-a");
    }

    #[test]
    fn fractions() {
        let expr = Expr::Mul(vec![
            Expr::Add(vec![sym("a"), num(3)]),
            pow(Expr::Add(vec![sym("b"), num(2)]), num(-1)),
        ]);
        assert_eq!(expr.to_string(), "(a+3)/(b+2)");

        let expr = Expr::Mul(vec![sym("a"), pow(sym("b"), num(-1))]);
        assert_eq!(expr.to_string(), "a/b");
    }

    #[test]
    fn negative_exponents_outside_products() {
        let expr = pow(sym("a"), num(-3));
        assert_eq!(expr.to_string(), "a^(-3)");
    }

    #[test]
    fn rational_exponent_is_parenthesized() {
        let expr = pow(sym("x"), Expr::Num(Number::Rational(rational((1, 2)))));
        assert_eq!(expr.to_string(), "x^(1/2)");
    }

    #[test]
    fn factorials_are_postfix() {
        let expr = Expr::Call(FuncKind::Factorial, vec![num(5)]);
        assert_eq!(expr.to_string(), "5!");

        let expr = Expr::Call(FuncKind::DoubleFactorial, vec![sym("n")]);
        assert_eq!(expr.to_string(), "n!!");
    }

    #[test]
    fn comparisons_are_spaced() {
        let expr = Expr::Cmp(
            CmpOp::Eq,
            Box::new(Expr::Add(vec![sym("x"), Expr::Num(Number::Integer(int(-1)))])),
            Box::new(num(0)),
        );
        assert_eq!(expr.to_string(), "x-1 = 0");
    }

    #[test]
    fn calls_render_their_arguments() {
        let expr = Expr::Call(FuncKind::Log, vec![num(2), sym("x")]);
        assert_eq!(expr.to_string(), "log(2, x)");
    }
}
