pub mod binary;
pub mod call;
pub mod error;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod registry;
pub mod token;
pub mod unary;

use error::{Error, kind};
use registry::Registry;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// Attempts to parse a value from the given stream of tokens, using multiple parsing functions
/// in order. The first function that succeeds is used to parse the value.
///
/// This function can also catch fatal errors and immediately short-circuit the parsing
/// process.
///
/// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
/// value is returned. Otherwise, the stream is left unchanged and the error of the last
/// attempted parsing function is returned.
#[macro_export]
macro_rules! try_parse_catch_fatal {
    ($($expr:expr),+ $(,)?) => {{
        $(
            match $expr {
                Ok(value) => return Ok(value),
                Err(err) if err.fatal => return Err(err),
                // ignore this error and try the next parser, or return it
                err => err,
            }
        )+
    }};
}

/// A high-level parser for mathematical expressions. This is the type to use to parse an arbitrary
/// input string into an abstract syntax tree.
///
/// Name resolution is driven by the [`Registry`] given at construction; the parser itself holds no
/// global state.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The registry used to resolve function and constant names.
    registry: &'source Registry,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source, resolving names with the given registry.
    pub fn new(source: &'source str, registry: &'source Registry) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            registry,
        }
    }

    /// Returns the registry used to resolve function and constant names.
    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl symcas_error::ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Creates a fatal error that points at the current token, or the end of the source code if
    /// the cursor is at the end of the stream.
    pub fn error_fatal(&self, kind: impl symcas_error::ErrorKind + 'static) -> Error {
        Error::new_fatal(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the previous token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the beginning of the stream.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor.checked_sub(1)?)
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Moves the cursor of this parser to the position of the given parser. Used to commit the
    /// tokens consumed by a lookahead clone of this parser.
    pub fn set_cursor(&mut self, other: &Parser) {
        self.cursor = other.cursor;
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses multiple values (at least one) from the given stream of tokens, each
    /// delimited by a certain token.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// values are returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_delimited<T: Parse>(&mut self, delimiter: TokenKind) -> Result<Vec<T>, Error> {
        let start = self.cursor;
        let mut values = Vec::new();

        loop {
            match self.try_parse::<T>() {
                Ok(value) => values.push(value),
                Err(err) if err.fatal => return Err(err),
                Err(err) => {
                    if values.is_empty() {
                        self.cursor = start;
                        return Err(err);
                    } else {
                        return Ok(values);
                    }
                },
            }

            let mut ahead = self.clone();
            match ahead.next_token() {
                Ok(token) if token.kind == delimiter => self.set_cursor(&ahead),
                _ => return Ok(values),
            }
        }
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Speculatively parses a value from the given stream of tokens, with a validation predicate.
    /// The value must parse successfully, **and** the predicate must return [`Ok`] for this
    /// function to return successfully.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_then<T: Parse, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        let start = self.cursor;

        // closure workaround allows us to use `?` in the closure
        let mut compute = || {
            let value = T::parse(self)?;
            predicate(&value, self)?;
            Ok(value)
        };

        match compute() {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;

        // trailing whitespace does not count as remaining input
        while let Some(token) = self.current_token() {
            if token.is_whitespace() {
                self.cursor += 1;
            } else {
                break;
            }
        }

        if self.cursor == self.tokens.len() {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary / unary operation is left-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `(a op b) op c`. For unary
    /// operations, this means the operators appear to the right of the operand, as in `3!`.
    Left,

    /// The binary / unary operation is right-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `a op (b op c)`. For unary
    /// operations, this means the operators appear to the left of the operand, as in `-3`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of comparisons (`=`, `>`, `>=`, `<`, and `<=`).
    Compare,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of factorial (`!`) and double factorial (`!!`).
    Factorial,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use binary::Binary;
    use call::Call;
    use expr::Expr;
    use literal::{LitConst, LitNum, LitSym, Literal};
    use registry::{ConstKind, FuncKind};
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};
    use unary::Unary;

    fn parse(source: &str) -> Result<Expr, Error> {
        let registry = Registry::default();
        Parser::new(source, &registry).try_parse_full::<Expr>()
    }

    fn num(value: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Num(LitNum {
            value: value.to_string(),
            is_float: value.contains('.'),
            span,
        }))
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16").unwrap(), num("16", 0..2));
    }

    #[test]
    fn literal_decimal() {
        assert_eq!(parse("3.14").unwrap(), num("3.14", 0..4));
    }

    #[test]
    fn literal_symbol() {
        assert_eq!(parse("x").unwrap(), Expr::Literal(Literal::Sym(LitSym {
            name: "x".to_string(),
            span: 0..1,
        })));
    }

    #[test]
    fn literal_constant() {
        assert_eq!(parse("pi").unwrap(), Expr::Literal(Literal::Const(LitConst {
            kind: ConstKind::Pi,
            span: 0..2,
        })));
    }

    #[test]
    fn binary_left_associativity() {
        assert_eq!(parse("1-2-3").unwrap(), Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(num("1", 0..1)),
                op: BinOp { kind: BinOpKind::Sub, span: 1..2 },
                rhs: Box::new(num("2", 2..3)),
                span: 0..3,
            })),
            op: BinOp { kind: BinOpKind::Sub, span: 3..4 },
            rhs: Box::new(num("3", 4..5)),
            span: 0..5,
        }));
    }

    #[test]
    fn binary_right_associativity() {
        assert_eq!(parse("2^3^2").unwrap(), Expr::Binary(Binary {
            lhs: Box::new(num("2", 0..1)),
            op: BinOp { kind: BinOpKind::Exp, span: 1..2 },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(num("3", 2..3)),
                op: BinOp { kind: BinOpKind::Exp, span: 3..4 },
                rhs: Box::new(num("2", 4..5)),
                span: 2..5,
            })),
            span: 0..5,
        }));
    }

    #[test]
    fn neg_binds_looser_than_exp() {
        assert_eq!(parse("-2^2").unwrap(), Expr::Unary(Unary {
            operand: Box::new(Expr::Binary(Binary {
                lhs: Box::new(num("2", 1..2)),
                op: BinOp { kind: BinOpKind::Exp, span: 2..3 },
                rhs: Box::new(num("2", 3..4)),
                span: 1..4,
            })),
            op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
            span: 0..4,
        }));
    }

    #[test]
    fn factorial_binds_tighter_than_neg() {
        assert_eq!(parse("-3!").unwrap(), Expr::Unary(Unary {
            operand: Box::new(Expr::Unary(Unary {
                operand: Box::new(num("3", 1..2)),
                op: UnaryOp { kind: UnaryOpKind::Factorial, span: 2..3 },
                span: 1..3,
            })),
            op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
            span: 0..3,
        }));
    }

    #[test]
    fn double_factorial() {
        assert_eq!(parse("5!!").unwrap(), Expr::Unary(Unary {
            operand: Box::new(num("5", 0..1)),
            op: UnaryOp { kind: UnaryOpKind::DoubleFactorial, span: 1..3 },
            span: 0..3,
        }));
    }

    #[test]
    fn juxtaposed_call() {
        assert_eq!(parse("sqrt144").unwrap(), Expr::Call(Call {
            kind: FuncKind::Sqrt,
            args: vec![num("144", 4..7)],
            span: 0..7,
        }));
    }

    #[test]
    fn juxtaposed_call_with_factorial() {
        // the factorial applies to the whole call, not the juxtaposed literal
        assert_eq!(parse("sqrt4!").unwrap(), Expr::Unary(Unary {
            operand: Box::new(Expr::Call(Call {
                kind: FuncKind::Sqrt,
                args: vec![num("4", 4..5)],
                span: 0..5,
            })),
            op: UnaryOp { kind: UnaryOpKind::Factorial, span: 5..6 },
            span: 0..6,
        }));
    }

    #[test]
    fn call_with_two_args() {
        assert_eq!(parse("log(2, 256)").unwrap(), Expr::Call(Call {
            kind: FuncKind::Log,
            args: vec![num("2", 4..5), num("256", 7..10)],
            span: 0..11,
        }));
    }

    #[test]
    fn comparison() {
        assert_eq!(parse("x = 1").unwrap(), Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(Literal::Sym(LitSym {
                name: "x".to_string(),
                span: 0..1,
            }))),
            op: BinOp { kind: BinOpKind::Eq, span: 2..3 },
            rhs: Box::new(num("1", 4..5)),
            span: 0..5,
        }));
    }

    #[test]
    fn empty_input() {
        assert!(parse("").is_err());
    }

    #[test]
    fn trailing_operator() {
        assert!(parse("1+").is_err());
    }

    #[test]
    fn unknown_name_is_fatal() {
        let err = parse("lncossine").unwrap_err();
        assert!(err.fatal);
    }

    #[test]
    fn wrong_argument_count_is_fatal() {
        let err = parse("sqrt(1, 2)").unwrap_err();
        assert!(err.fatal);
    }

    #[test]
    fn unclosed_parenthesis() {
        let err = parse("(1+2").unwrap_err();
        assert!(err.fatal);
    }
}
