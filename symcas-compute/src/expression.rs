//! The high-level entry point: parse, simplify, render, solve.

use std::fmt::{self, Display, Formatter};
use symcas_parser::parser::{expr::Expr as AstExpr, registry::Registry, Parser};
use crate::error::Error;
use crate::symbolic::{expr::fmt::render, simplify, solve, Expr};

/// A parsed and simplified mathematical expression.
///
/// ```
/// use symcas_compute::Expression;
///
/// let expr = Expression::new("(a+b)^2").unwrap();
/// assert_eq!(expr.to_string(), "a^2+b^2+2*a*b");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    expr: Expr,
}

impl Expression {
    /// Parses and simplifies the given source, approximating inexact values.
    pub fn new(source: &str) -> Result<Self, Error> {
        Self::build(source, false)
    }

    /// Parses and simplifies the given source, keeping inexact values symbolic: `sin(2)` stays
    /// `sin(2)` rather than becoming a real number.
    pub fn new_precise(source: &str) -> Result<Self, Error> {
        Self::build(source, true)
    }

    fn build(source: &str, precise: bool) -> Result<Self, Error> {
        let registry = Registry::default();
        let mut parser = Parser::new(source, &registry);
        let ast = parser.try_parse_full::<AstExpr>()?;

        match simplify(&Expr::from(ast), precise) {
            Expr::Undefined(err) => Err(Error::Undefined(err)),
            expr => Ok(Self { expr }),
        }
    }

    /// The simplified expression tree.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Renders the expression with numbers approximated to the given number of significant
    /// digits.
    pub fn to_string_precision(&self, digits: usize) -> String {
        render(&self.expr, Some(digits))
    }

    /// Solves the expression as an equation. Renders the expression unchanged when it is not an
    /// equation in one variable of degree two or less, or when it has no real roots.
    pub fn solve(&self) -> String {
        solve::solve(&self.expr, None)
    }

    /// Like [`solve`](Self::solve), with roots approximated to the given number of significant
    /// digits.
    pub fn solve_precision(&self, digits: usize) -> String {
        solve::solve(&self.expr, Some(digits))
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}
