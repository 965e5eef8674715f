use std::ops::Range;
use super::{
    error::{kind, Error},
    registry::ConstKind,
    token::{Float, Int, Name},
    Parse,
    Parser,
};

/// A number literal.
///
/// The digits are kept verbatim so that the numeric tower can parse them exactly; converting
/// through a machine float here would silently lose precision.
#[derive(Debug, Clone, PartialEq)]
pub struct LitNum {
    /// The raw digits of the literal.
    pub value: String,

    /// Whether the literal contains a decimal point.
    pub is_float: bool,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let (lexeme, is_float, span) = input
            .try_parse::<Int>()
            .map(|num| (num.lexeme, false, num.span))
            .or_else(|_| input.try_parse::<Float>().map(|num| (num.lexeme, true, num.span)))?;
        Ok(Self {
            value: lexeme,
            is_float,
            span,
        })
    }
}

/// A variable literal. Variables are always written as single letters, such as `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct LitSym {
    /// The name of the variable.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// A named constant literal, such as `pi`.
#[derive(Debug, Clone, PartialEq)]
pub struct LitConst {
    /// The constant this name resolved to.
    pub kind: ConstKind,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// Represents a literal value: a number, a variable, or a named constant.
///
/// Names are resolved against the parser's registry, functions first, then constants; whatever
/// single letters remain are variables. A multi-character name that resolves to nothing is a hard
/// error, with a suggestion when a known name is close.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A number literal.
    Num(LitNum),

    /// A variable literal.
    Sym(LitSym),

    /// A named constant literal.
    Const(LitConst),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Num(num) => num.span.clone(),
            Literal::Sym(sym) => sym.span.clone(),
            Literal::Const(constant) => constant.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        if let Ok(num) = input.try_parse::<LitNum>() {
            return Ok(Literal::Num(num));
        }

        let token = input.try_parse::<Name>()?;
        let registry = input.registry();

        if let Some(kind) = registry.constant(&token.lexeme) {
            return Ok(Literal::Const(LitConst {
                kind,
                span: token.span,
            }));
        }

        // a bare function name can only get here if `Call::parse` failed to find its arguments
        if let Some(func) = registry.function(&token.lexeme) {
            return Err(Error::new_fatal(vec![token.span], kind::MissingArguments {
                name: func.name(),
                arity: func.arity(),
            }));
        }

        if token.lexeme.chars().count() == 1 {
            return Ok(Literal::Sym(LitSym {
                name: token.lexeme,
                span: token.span,
            }));
        }

        let suggestion = registry.suggest(&token.lexeme);
        Err(Error::new_fatal(vec![token.span], kind::UnknownName {
            name: token.lexeme,
            suggestion,
        }))
    }
}
