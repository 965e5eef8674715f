//! Symbolic manipulation of expressions.
//!
//! This module defines [`Expr`], a tree representation of mathematical expressions that is
//! better suited for simplification than the output of [`symcas_parser`]. The [`simplify`] module
//! reduces an [`Expr`] to a canonical form, and the [`solve`] module finds the roots of
//! single-variable equations of degree two or less.

pub mod expr;
pub mod simplify;
pub mod solve;

pub use expr::Expr;
pub use simplify::simplify;
