//! Numeric and symbolic computation for `symcas`.
//!
//! The entry point to this crate is [`Expression`], which parses a string of mathematical input,
//! simplifies it, and renders the result. See the [`symbolic`] module for the expression tree and
//! the simplification engine, and the [`funcs`] module for the numeric implementations of the
//! builtin functions.

pub mod consts;
pub mod error;
pub mod expression;
pub mod funcs;
pub mod number;
pub mod primitive;
pub mod symbolic;

pub use error::Error;
pub use expression::Expression;
