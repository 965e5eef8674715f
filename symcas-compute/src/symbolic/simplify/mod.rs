//! Simplification of symbolic expressions.
//!
//! Simplification works bottom-up: the children of a node are fully simplified before the node
//! itself. At each node, the rules in the [`rules`] module are applied until none of them makes
//! progress. A rewrite can produce subexpressions that are themselves reducible, so the node is
//! re-simplified after every successful rewrite.
//!
//! Before descending into a node's children, integer exponents are pushed through products and
//! factors with opposite exponents are cancelled. Simplifying the children first would expand a
//! sum's power into a polynomial, hiding the shared base that quotients like
//! `(a+b)*(a+b)/(a+b)` cancel against.
//!
//! [`Expr::Undefined`] children bubble up through their parents before any rule runs, so a
//! single undefined subexpression, such as a division by zero, poisons the whole expression.
//!
//! The `precise` flag controls approximation. With `precise` set to `false`, constants and
//! function calls without an exact value are evaluated with [`Float`](rug::Float) arithmetic;
//! with `true`, they stay symbolic and only exact rewrites are performed. Domain failures are
//! reported either way.

pub mod order;
pub mod rules;

use super::Expr;

/// Simplifies an expression into canonical form.
pub fn simplify(expr: &Expr, precise: bool) -> Expr {
    order::sort(simplify_node(expr, precise))
}

/// Returns the error of the node itself or of any direct child, if one is undefined.
///
/// Children are simplified before their parent, so an undefined subexpression at any depth
/// reaches its parent as a direct child.
fn poisoned(expr: &Expr) -> Option<Expr> {
    if expr.is_undefined() {
        return Some(expr.clone());
    }

    let children: &[Expr] = match expr {
        Expr::Add(children) | Expr::Mul(children) | Expr::Call(_, children) => children,
        Expr::Pow(lhs, rhs) | Expr::Cmp(_, lhs, rhs) => {
            return [&**lhs, &**rhs].into_iter().find(|child| child.is_undefined()).cloned();
        },
        _ => return None,
    };
    children.iter().find(|child| child.is_undefined()).cloned()
}

fn simplify_node(expr: &Expr, precise: bool) -> Expr {
    // cancel shared bases before their powers expand below
    if let Some(reduced) = rules::power::expand_product(expr)
        .or_else(|| rules::multiply::combine_like_factors(expr))
    {
        return simplify_node(&reduced, precise);
    }

    let expr = match expr {
        Expr::Add(terms) => {
            Expr::Add(terms.iter().map(|term| simplify_node(term, precise)).collect())
                .downgrade()
        },
        Expr::Mul(factors) => {
            Expr::Mul(factors.iter().map(|factor| simplify_node(factor, precise)).collect())
                .downgrade()
        },
        Expr::Pow(base, exp) => Expr::Pow(
            Box::new(simplify_node(base, precise)),
            Box::new(simplify_node(exp, precise)),
        ),
        Expr::Call(kind, args) => Expr::Call(
            *kind,
            args.iter().map(|arg| simplify_node(arg, precise)).collect(),
        ),
        Expr::Cmp(op, lhs, rhs) => Expr::Cmp(
            *op,
            Box::new(simplify_node(lhs, precise)),
            Box::new(simplify_node(rhs, precise)),
        ),
        expr => expr.clone(),
    };

    if let Some(undefined) = poisoned(&expr) {
        return undefined;
    }

    match rules::all(&expr, precise) {
        Some(rewritten) => simplify_node(&rewritten, precise),
        None => expr,
    }
}
