//! The registry of known functions and constants.
//!
//! The parser resolves every multi-character name against a [`Registry`]. There are no global
//! tables: callers construct a registry (usually [`Registry::default`]) and pass it to
//! [`Parser::new`](super::Parser::new), so tests and embedders can provide their own set of names.

use levenshtein::levenshtein;
use std::collections::HashMap;

/// The maximum edit distance at which an unknown name still produces a suggestion.
const SUGGESTION_DISTANCE: usize = 2;

/// A built-in function known to the parser.
///
/// The postfix factorial operators are also represented here so that the expression tree can treat
/// them as ordinary function applications, but they have no name entry in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuncKind {
    Sqrt,
    Exp,
    Log,
    Ln,
    Lb,
    Lg,
    Sin,
    Cos,
    Tan,
    Cot,
    Asin,
    Acos,
    Atan,
    Acot,
    Sinh,
    Cosh,
    Tanh,
    Coth,
    Abs,
    Factorial,
    DoubleFactorial,
}

impl FuncKind {
    /// The name of the function, as written in the input.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Lb => "lb",
            Self::Lg => "lg",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Acot => "acot",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Coth => "coth",
            Self::Abs => "abs",
            Self::Factorial => "!",
            Self::DoubleFactorial => "!!",
        }
    }

    /// The number of arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Log => 2,
            _ => 1,
        }
    }
}

/// A built-in constant known to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstKind {
    /// Euler's number.
    E,

    /// The ratio of a circle's circumference to its diameter.
    Pi,
}

impl ConstKind {
    /// The name of the constant, as written in the input.
    pub fn name(self) -> &'static str {
        match self {
            Self::E => "e",
            Self::Pi => "pi",
        }
    }
}

/// The set of function and constant names the parser can resolve.
#[derive(Debug, Clone)]
pub struct Registry {
    functions: HashMap<&'static str, FuncKind>,
    constants: HashMap<&'static str, ConstKind>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            constants: HashMap::new(),
        }
    }

    /// Registers a function under its name.
    pub fn insert_function(&mut self, kind: FuncKind) {
        self.functions.insert(kind.name(), kind);
    }

    /// Registers a constant under its name.
    pub fn insert_constant(&mut self, kind: ConstKind) {
        self.constants.insert(kind.name(), kind);
    }

    /// Looks up a function by name.
    pub fn function(&self, name: &str) -> Option<FuncKind> {
        self.functions.get(name).copied()
    }

    /// Looks up a constant by name.
    pub fn constant(&self, name: &str) -> Option<ConstKind> {
        self.constants.get(name).copied()
    }

    /// Finds the known name closest to the given unknown name, if any is close enough.
    pub fn suggest(&self, name: &str) -> Option<&'static str> {
        self.functions
            .keys()
            .chain(self.constants.keys())
            .map(|known| (levenshtein(name, known), *known))
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, known)| known)
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::new();

        for kind in [
            FuncKind::Sqrt,
            FuncKind::Exp,
            FuncKind::Log,
            FuncKind::Ln,
            FuncKind::Lb,
            FuncKind::Lg,
            FuncKind::Sin,
            FuncKind::Cos,
            FuncKind::Tan,
            FuncKind::Cot,
            FuncKind::Asin,
            FuncKind::Acos,
            FuncKind::Atan,
            FuncKind::Acot,
            FuncKind::Sinh,
            FuncKind::Cosh,
            FuncKind::Tanh,
            FuncKind::Coth,
            FuncKind::Abs,
        ] {
            registry.insert_function(kind);
        }

        registry.insert_constant(ConstKind::E);
        registry.insert_constant(ConstKind::Pi);

        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_builtins() {
        let registry = Registry::default();
        assert_eq!(registry.function("sqrt"), Some(FuncKind::Sqrt));
        assert_eq!(registry.function("log"), Some(FuncKind::Log));
        assert_eq!(registry.constant("pi"), Some(ConstKind::Pi));
        assert_eq!(registry.function("frobnicate"), None);
    }

    #[test]
    fn factorials_have_no_name_entry() {
        let registry = Registry::default();
        assert_eq!(registry.function("!"), None);
        assert_eq!(registry.function("factorial"), None);
    }

    #[test]
    fn suggests_close_names() {
        let registry = Registry::default();
        assert_eq!(registry.suggest("sqt"), Some("sqrt"));
        assert_eq!(registry.suggest("cosine"), None);
    }
}
