//! The possible kinds of parse errors.

use symcas_error::ErrorKind;
use crate::tokenizer::TokenKind;

/// An intentionally useless error. This should only be used for non-fatal errors, as it contains
/// no useful information.
#[derive(Debug, Clone, PartialEq)]
pub struct NonFatal;

impl ErrorKind for NonFatal {
    fn message(&self) -> String {
        "an internal non-fatal error occurred while parsing".to_string()
    }

    fn label(&self) -> String {
        "here".to_string()
    }

    fn help(&self) -> Option<String> {
        Some("you should never see this error; please report this as a bug".to_string())
    }
}

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedEof;

impl ErrorKind for UnexpectedEof {
    fn message(&self) -> String {
        "unexpected end of input".to_string()
    }

    fn label(&self) -> String {
        "I expected to see more input here".to_string()
    }
}

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedEof;

impl ErrorKind for ExpectedEof {
    fn message(&self) -> String {
        "expected end of input".to_string()
    }

    fn label(&self) -> String {
        "I could not understand the remaining input here".to_string()
    }
}

/// An unexpected token was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

impl ErrorKind for UnexpectedToken {
    fn message(&self) -> String {
        "unexpected token".to_string()
    }

    fn label(&self) -> String {
        format!(
            "expected one of: {}",
            self.expected
                .iter()
                .map(|t| format!("{:?}", t))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    fn help(&self) -> Option<String> {
        Some(format!("found {:?}", self.found))
    }
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

impl ErrorKind for UnclosedParenthesis {
    fn message(&self) -> String {
        "unclosed parenthesis".to_string()
    }

    fn label(&self) -> String {
        "this parenthesis is not closed".to_string()
    }

    fn help(&self) -> Option<String> {
        Some(if self.opening {
            "add a closing parenthesis `)` somewhere after this".to_string()
        } else {
            "add an opening parenthesis `(` somewhere before this".to_string()
        })
    }
}

/// A multi-character name that is not a known function or constant.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownName {
    /// The name that was found.
    pub name: String,

    /// The closest known name, if any is close enough to be worth suggesting.
    pub suggestion: Option<&'static str>,
}

impl ErrorKind for UnknownName {
    fn message(&self) -> String {
        format!("unknown function or constant: `{}`", self.name)
    }

    fn label(&self) -> String {
        "this name is not recognized".to_string()
    }

    fn help(&self) -> Option<String> {
        Some(match self.suggestion {
            Some(suggestion) => format!("did you mean `{}`?", suggestion),
            None => "variables are written as single letters, such as `x` or `y`".to_string(),
        })
    }
}

/// A known function name was used without any arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingArguments {
    /// The name of the function.
    pub name: &'static str,

    /// The number of arguments the function takes.
    pub arity: usize,
}

impl ErrorKind for MissingArguments {
    fn message(&self) -> String {
        format!("missing arguments for function `{}`", self.name)
    }

    fn label(&self) -> String {
        "this function is missing its arguments".to_string()
    }

    fn help(&self) -> Option<String> {
        Some(format!(
            "call it with {} argument(s), like `{}(...)`",
            self.arity, self.name,
        ))
    }
}

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct WrongArgumentCount {
    /// The name of the function.
    pub name: &'static str,

    /// The number of arguments the function takes.
    pub expected: usize,

    /// The number of arguments that were given.
    pub found: usize,
}

impl ErrorKind for WrongArgumentCount {
    fn message(&self) -> String {
        format!("wrong number of arguments for function `{}`", self.name)
    }

    fn label(&self) -> String {
        format!("expected {} argument(s), found {}", self.expected, self.found)
    }
}
