//! Expression evaluation against a symbolic state.
//!
//! "Evaluation" here is substitution, not simplification: variable
//! lookups are replaced by whatever the state's memory holds, compound
//! nodes are rebuilt around their substituted children, and nothing is
//! folded. Reduction is the simplifier's job, at output time.

use std::rc::Rc;

use sympath_core::Expr;

use super::state::State;

/// Substitutes `state`'s memory bindings into `expr`.
///
/// Lookup is non-recursive: a stored expression is returned as-is
/// (reference-shared, not copied), because it was already evaluated
/// against the state that was current when it was stored. A variable with
/// no binding stays a free variable.
pub fn eval_expr(expr: &Rc<Expr>, state: &State) -> Rc<Expr> {
    match expr.as_ref() {
        Expr::Var(name) => match state.memory.get(name) {
            Some(bound) => Rc::clone(bound),
            None => Rc::clone(expr),
        },
        Expr::Const(_) => Rc::clone(expr),
        Expr::Binary { op, left, right } => Expr::binary(
            *op,
            eval_expr(left, state),
            eval_expr(right, state),
        ),
        Expr::Not(inner) => Expr::not(eval_expr(inner, state)),
        Expr::Neg(inner) => Expr::neg(eval_expr(inner, state)),
    }
}
