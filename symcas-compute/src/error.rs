//! Errors that can occur while parsing or evaluating an expression.

use std::fmt::{self, Display, Formatter};

/// A mathematical operation that has no defined result, such as dividing by zero or taking the
/// square root of a negative number.
///
/// These are produced during simplification and bubble up through the expression tree. An
/// expression whose root is undefined cannot be rendered, and [`Expression::new`] reports it as an
/// error.
///
/// [`Expression::new`]: crate::expression::Expression::new
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A function was applied outside of its domain, such as `sqrt(-1)` or `ln(0)`.
    UndefinedFunction {
        /// The display name of the function, such as `sqrt` or `!`.
        name: &'static str,

        /// The rendered arguments the function was applied to.
        args: Vec<String>,
    },

    /// A binary operator was applied to operands it is not defined for, such as `1 / 0` or
    /// `0 ^ 0`.
    UndefinedBinaryOperator {
        /// The symbol of the operator, such as `/` or `^`.
        op: &'static str,

        /// The rendered left operand.
        lhs: String,

        /// The rendered right operand.
        rhs: String,
    },

    /// The result is undefined for a reason that has no more specific description.
    Undefined,
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MathError::UndefinedFunction { name, args } => {
                write!(f, "`{}({})` is undefined", name, args.join(", "))
            },
            MathError::UndefinedBinaryOperator { op, lhs, rhs } => {
                write!(f, "`{} {} {}` is undefined", lhs, op, rhs)
            },
            MathError::Undefined => write!(f, "the result is undefined"),
        }
    }
}

/// Any error that can occur while turning a source string into a simplified expression.
#[derive(Debug)]
pub enum Error {
    /// The input could not be parsed.
    Invalid(symcas_parser::parser::error::Error),

    /// The expression simplified to an undefined result.
    Undefined(MathError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Invalid(_) => write!(f, "the input could not be parsed"),
            Error::Undefined(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

impl From<symcas_parser::parser::error::Error> for Error {
    fn from(err: symcas_parser::parser::error::Error) -> Self {
        Error::Invalid(err)
    }
}

impl From<MathError> for Error {
    fn from(err: MathError) -> Self {
        Error::Undefined(err)
    }
}
