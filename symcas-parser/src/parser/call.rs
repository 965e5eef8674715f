use std::ops::Range;
use crate::tokenizer::TokenKind;
use super::{
    error::{kind, Error},
    expr::Expr,
    literal::{LitNum, Literal},
    registry::FuncKind,
    token::{CloseParen, Name, OpenParen},
    Parse,
    Parser,
};

/// A call of a registered function, such as `sqrt(2)` or `log(2, 8)`.
///
/// A unary function may also be applied directly to a numeric literal without parentheses, as in
/// `sqrt144` or `sin10`. The juxtaposed argument is just the literal: any postfix operator binds
/// to the call, so `sqrt4!` is `(sqrt 4)!`.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The function being called.
    pub kind: FuncKind,

    /// The arguments to the function.
    pub args: Vec<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<Name>()?;
        let Some(func) = input.registry().function(&name.lexeme) else {
            // not a function name; let the literal parser take over
            return Err(Error::new(vec![name.span], kind::NonFatal));
        };

        if let Ok(open_paren) = input.try_parse::<OpenParen>() {
            let args = match input.try_parse_delimited::<Expr>(TokenKind::Comma) {
                Ok(args) => args,
                Err(err) if err.fatal => return Err(err),
                Err(_) => Vec::new(),
            };

            let close_paren = input.try_parse::<CloseParen>().map_err(|err| {
                if err.fatal {
                    err
                } else {
                    Error::new_fatal(
                        vec![open_paren.span.clone()],
                        kind::UnclosedParenthesis { opening: true },
                    )
                }
            })?;

            let span = name.span.start..close_paren.span.end;
            if args.len() != func.arity() {
                return Err(Error::new_fatal(vec![span], kind::WrongArgumentCount {
                    name: func.name(),
                    expected: func.arity(),
                    found: args.len(),
                }));
            }

            return Ok(Self { kind: func, args, span });
        }

        if func.arity() == 1 {
            if let Ok(num) = input.try_parse::<LitNum>() {
                let span = name.span.start..num.span.end;
                return Ok(Self {
                    kind: func,
                    args: vec![Expr::Literal(Literal::Num(num))],
                    span,
                });
            }
        }

        Err(Error::new_fatal(vec![name.span], kind::MissingArguments {
            name: func.name(),
            arity: func.arity(),
        }))
    }
}
