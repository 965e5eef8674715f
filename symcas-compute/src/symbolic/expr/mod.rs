//! A flattened expression tree used during simplification.
//!
//! This type should be distinguished from the [`symcas_parser::parser::expr::Expr`] type, which
//! is produced by [`symcas_parser`]. The main difference is that this type **flattens** out the
//! tree structure. For example, the expression `x + (y + z)` is represented internally as a
//! single [`Expr::Add`] node with _three_ children, `x`, `y`, and `z`. Subtraction and division
//! disappear entirely: `a - b` becomes `a + (-1) * b`, and `a / b` becomes `a * b^(-1)`.
//!
//! Mathematically undefined results are represented in the tree itself by [`Expr::Undefined`].
//! The simplification engine bubbles this variant up through every parent node, so an undefined
//! subexpression poisons the whole expression.

pub mod fmt;

use std::collections::BTreeSet;
use std::ops::{Add, Mul, Neg};
use rug::Integer;
use symcas_parser::parser::{
    expr::Expr as AstExpr,
    literal::Literal,
    registry::{ConstKind, FuncKind},
    token::op::{BinOpKind, UnaryOpKind},
};
use crate::error::MathError;
use crate::number::Number;
use crate::primitive::{int, int_from_str, rational_from_decimal};

/// A comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl CmpOp {
    /// The symbol of the operator, as written in source input and rendered output.
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Less => "<",
            CmpOp::LessEq => "<=",
            CmpOp::Greater => ">",
            CmpOp::GreaterEq => ">=",
        }
    }

    /// Evaluates the comparison over an already-computed ordering of `lhs` against `rhs`.
    pub fn test(self, ordering: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::*;
        match self {
            CmpOp::Eq => ordering == Equal,
            CmpOp::Less => ordering == Less,
            CmpOp::LessEq => ordering != Greater,
            CmpOp::Greater => ordering == Greater,
            CmpOp::GreaterEq => ordering != Less,
        }
    }
}

/// A mathematical expression with information about its terms and factors.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone)]
pub enum Expr {
    /// A numeric value.
    Num(Number),

    /// A variable, such as `x`.
    Symbol(String),

    /// A named mathematical constant, such as `pi`.
    Const(ConstKind),

    /// A builtin function applied to arguments.
    Call(FuncKind, Vec<Expr>),

    /// Multiple terms added together.
    Add(Vec<Expr>),

    /// Multiple factors multiplied together.
    Mul(Vec<Expr>),

    /// An expression raised to a power.
    Pow(Box<Expr>, Box<Expr>),

    /// A comparison of two expressions.
    Cmp(CmpOp, Box<Expr>, Box<Expr>),

    /// A subexpression whose value is mathematically undefined.
    Undefined(MathError),
}

impl Expr {
    /// If the expression is a [`Number`], returns a reference to it.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Num(num) => Some(num),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Number`].
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Num(_))
    }

    /// If the expression is an integer [`Number`], returns a reference to the contained integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Num(num) => num.as_integer(),
            _ => None,
        }
    }

    /// Returns true if the expression is [`Expr::Undefined`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined(_))
    }

    /// Collects the names of all variables appearing in the expression.
    pub fn variables(&self) -> BTreeSet<&str> {
        fn collect<'a>(expr: &'a Expr, out: &mut BTreeSet<&'a str>) {
            match expr {
                Expr::Symbol(name) => {
                    out.insert(name.as_str());
                },
                Expr::Call(_, args) => args.iter().for_each(|arg| collect(arg, out)),
                Expr::Add(terms) => terms.iter().for_each(|term| collect(term, out)),
                Expr::Mul(factors) => factors.iter().for_each(|factor| collect(factor, out)),
                Expr::Pow(base, exp) => {
                    collect(base, out);
                    collect(exp, out);
                },
                Expr::Cmp(_, lhs, rhs) => {
                    collect(lhs, out);
                    collect(rhs, out);
                },
                Expr::Num(_) | Expr::Const(_) | Expr::Undefined(_) => {},
            }
        }

        let mut out = BTreeSet::new();
        collect(self, &mut out);
        out
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`Expr::Add`] with zero / one term, or an [`Expr::Mul`]
    /// with zero / one factor. This function checks for these cases and simplifies the expression
    /// into the single term / factor, or the number 0 or 1.
    pub(crate) fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => {
                if terms.is_empty() {
                    Self::Num(Number::Integer(int(0)))
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Add(terms)
                }
            },
            Self::Mul(mut factors) => {
                if factors.is_empty() {
                    Self::Num(Number::Integer(int(1)))
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Mul(factors)
                }
            },
            _ => self,
        }
    }
}

/// Multiset equality over unordered children: every element on the left consumes one strictly
/// equal element on the right, so repeated children must match with their multiplicity.
fn multiset_eq(lhs: &[Expr], rhs: &[Expr]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut remaining: Vec<&Expr> = rhs.iter().collect();
    for item in lhs {
        let Some(position) = remaining.iter().position(|other| item == *other) else {
            return false;
        };
        remaining.swap_remove(position);
    }
    true
}

/// Checks if two expressions are **strictly** equal.
///
/// Two expressions are strictly equal if:
/// - They are the same type of expression (i.e. both [`Expr::Num`], both [`Expr::Add`], etc.).
/// - If both are [`Expr::Num`], both must hold the same value at the same level of the numeric
///   ladder; the integer 2 and the real 2.0 are **not** strictly equal.
/// - If both are [`Expr::Add`] or [`Expr::Mul`], both expressions must have strictly equal terms
///   / factors, in any order, counted with multiplicity.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Num(lhs), Self::Num(rhs)) => lhs == rhs,
            (Self::Symbol(lhs), Self::Symbol(rhs)) => lhs == rhs,
            (Self::Const(lhs), Self::Const(rhs)) => lhs == rhs,
            (Self::Call(lhs_func, lhs_args), Self::Call(rhs_func, rhs_args)) => {
                lhs_func == rhs_func && lhs_args == rhs_args
            },
            (Self::Add(lhs), Self::Add(rhs)) | (Self::Mul(lhs), Self::Mul(rhs)) => {
                multiset_eq(lhs, rhs)
            },
            (Self::Pow(lhs_base, lhs_exp), Self::Pow(rhs_base, rhs_exp)) => {
                lhs_base == rhs_base && lhs_exp == rhs_exp
            },
            (Self::Cmp(lhs_op, lhs_l, lhs_r), Self::Cmp(rhs_op, rhs_l, rhs_r)) => {
                lhs_op == rhs_op && lhs_l == rhs_l && lhs_r == rhs_r
            },
            (Self::Undefined(lhs), Self::Undefined(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl From<AstExpr> for Expr {
    fn from(expr: AstExpr) -> Self {
        match expr {
            AstExpr::Literal(literal) => match literal {
                Literal::Num(num) => {
                    if num.is_float {
                        Self::Num(Number::from(rational_from_decimal(&num.value)))
                    } else {
                        Self::Num(Number::Integer(int_from_str(&num.value)))
                    }
                },
                Literal::Sym(sym) => Self::Symbol(sym.name),
                Literal::Const(constant) => Self::Const(constant.kind),
            },
            AstExpr::Paren(paren) => Self::from(*paren.expr),
            AstExpr::Call(call) => {
                let args = call.args.into_iter().map(Self::from).collect();
                Self::Call(call.kind, args)
            },
            AstExpr::Unary(unary) => match unary.op.kind {
                // treat negation as -1 * rhs
                UnaryOpKind::Neg => Self::from(*unary.operand).neg(),
                UnaryOpKind::Factorial => {
                    Self::Call(FuncKind::Factorial, vec![Self::from(*unary.operand)])
                },
                UnaryOpKind::DoubleFactorial => {
                    Self::Call(FuncKind::DoubleFactorial, vec![Self::from(*unary.operand)])
                },
            },
            AstExpr::Binary(bin) => match bin.op.kind {
                BinOpKind::Exp => {
                    Self::Pow(Box::new(Self::from(*bin.lhs)), Box::new(Self::from(*bin.rhs)))
                },
                BinOpKind::Mul => Self::from(*bin.lhs) * Self::from(*bin.rhs),
                // treat division as lhs * rhs^-1
                BinOpKind::Div => {
                    Self::from(*bin.lhs)
                        * Self::Pow(
                            Box::new(Self::from(*bin.rhs)),
                            Box::new(Self::Num(Number::Integer(int(-1)))),
                        )
                },
                BinOpKind::Add => Self::from(*bin.lhs) + Self::from(*bin.rhs),
                // treat subtraction as lhs + -1 * rhs
                BinOpKind::Sub => Self::from(*bin.lhs) + Self::from(*bin.rhs).neg(),
                BinOpKind::Eq
                | BinOpKind::Less
                | BinOpKind::LessEq
                | BinOpKind::Greater
                | BinOpKind::GreaterEq => {
                    let op = match bin.op.kind {
                        BinOpKind::Eq => CmpOp::Eq,
                        BinOpKind::Less => CmpOp::Less,
                        BinOpKind::LessEq => CmpOp::LessEq,
                        BinOpKind::Greater => CmpOp::Greater,
                        _ => CmpOp::GreaterEq,
                    };
                    let lhs = Self::from(*bin.lhs);
                    let rhs = Self::from(*bin.rhs);

                    // comparisons do not nest; `1 < x < 2` has no defined value
                    if matches!(lhs, Self::Cmp(..)) || matches!(rhs, Self::Cmp(..)) {
                        return Self::Undefined(MathError::UndefinedBinaryOperator {
                            op: op.symbol(),
                            lhs: lhs.to_string(),
                            rhs: rhs.to_string(),
                        });
                    }
                    Self::Cmp(op, Box::new(lhs), Box::new(rhs))
                },
            },
        }
    }
}

/// Adds two [`Expr`]s together. No simplification is done, except for the case where both
/// operands are numbers, in which case the numbers are added, and the case where the operands are
/// a mix of [`Expr::Add`] and other expressions, in which case both are combined in one list of
/// terms (flattening).
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Num(lhs), Self::Num(rhs)) => Self::Num(lhs + rhs),
            (Self::Add(mut terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
                Self::Add(terms)
            },
            (Self::Add(mut terms), other) | (other, Self::Add(mut terms)) => {
                terms.push(other);
                Self::Add(terms)
            },
            (lhs, rhs) => Self::Add(vec![lhs, rhs]),
        }
    }
}

/// Multiplies two [`Expr`]s together. No simplification is done, except for the case where both
/// operands are numbers, in which case the numbers are multiplied, and the case where the
/// operands are a mix of [`Expr::Mul`] and other expressions, in which case both are combined in
/// one list of factors (flattening).
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Num(lhs), Self::Num(rhs)) => Self::Num(lhs * rhs),
            (Self::Mul(mut factors), Self::Mul(rhs_factors)) => {
                factors.extend(rhs_factors);
                Self::Mul(factors)
            },
            (Self::Mul(mut factors), other) | (other, Self::Mul(mut factors)) => {
                factors.push(other);
                Self::Mul(factors)
            },
            (lhs, rhs) => Self::Mul(vec![lhs, rhs]),
        }
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is a number, in which case the number is negated.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Num(num) => Self::Num(-num),
            expr => Self::Num(Number::Integer(int(-1))) * expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symcas_parser::parser::{registry::Registry, Parser};
    use super::*;

    /// Parse the given source and return the [`Expr`] representation.
    fn convert(source: &str) -> Expr {
        let registry = Registry::default();
        let mut parser = Parser::new(source, &registry);
        let ast = parser.try_parse_full::<AstExpr>().unwrap();
        Expr::from(ast)
    }

    fn num(value: i32) -> Expr {
        Expr::Num(Number::from(value))
    }

    fn sym(name: &str) -> Expr {
        Expr::Symbol(String::from(name))
    }

    #[test]
    fn nested_sums_are_flattened() {
        assert_eq!(
            convert("x + (y + z)"),
            Expr::Add(vec![sym("x"), sym("y"), sym("z")]),
        );
    }

    #[test]
    fn strict_equality_ignores_order() {
        assert_eq!(convert("2 * x * y"), convert("y * x * 2"));
    }

    #[test]
    fn strict_equality_counts_multiplicity() {
        assert_ne!(convert("x * x * y"), convert("x * y * y"));
        assert_eq!(convert("x * x * y"), convert("y * x * x"));
    }

    #[test]
    fn subtraction_becomes_addition() {
        assert_eq!(
            convert("a - b"),
            Expr::Add(vec![sym("a"), Expr::Mul(vec![num(-1), sym("b")])]),
        );
    }

    #[test]
    fn division_becomes_negative_power() {
        assert_eq!(
            convert("a / b"),
            Expr::Mul(vec![
                sym("a"),
                Expr::Pow(Box::new(sym("b")), Box::new(num(-1))),
            ]),
        );
    }

    #[test]
    fn negation_becomes_multiplication() {
        assert_eq!(convert("-x"), Expr::Mul(vec![num(-1), sym("x")]));
        assert_eq!(convert("-3"), num(-3));
    }

    #[test]
    fn decimal_literals_are_exact() {
        assert_eq!(
            convert("0.001"),
            Expr::Num(Number::Rational(crate::primitive::rational((1, 1000)))),
        );
    }

    #[test]
    fn factorial_is_a_call() {
        assert_eq!(
            convert("5!"),
            Expr::Call(FuncKind::Factorial, vec![num(5)]),
        );
    }

    #[test]
    fn chained_comparisons_are_undefined() {
        assert!(convert("1 < x < 2").is_undefined());
    }

    #[test]
    fn variable_collection() {
        let expr = convert("x^2 + y * sin(z)");
        let vars = expr.variables();
        assert_eq!(vars.into_iter().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    }
}
