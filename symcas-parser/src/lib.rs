//! Tokenizer and parser for mathematical expressions.
//!
//! The parser produces an abstract syntax tree of the input expression, resolving names against an
//! explicit [`Registry`](parser::registry::Registry) of known functions and constants. It does not
//! evaluate anything; see the `symcas-compute` crate for the numeric and symbolic machinery.

pub mod parser;
pub mod tokenizer;
