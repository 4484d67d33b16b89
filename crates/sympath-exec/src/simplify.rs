//! Bottom-up expression simplification.
//!
//! [`simplify`] is a pure, total function: any subtree that matches no
//! rewrite is rebuilt unchanged, so it never fails. Children are reduced
//! first, then the node itself is examined in this order:
//!
//! 1. constant folding when both operands are constants (logical over
//!    `true`/`false`, integer over everything else);
//! 2. boolean identity laws when exactly one operand of `&`/`|` is a
//!    `true`/`false` literal, whatever the other operand is;
//! 3. multiplicative distribution over `+`/`-`, applied unconditionally
//!    and re-simplified -- this is what expands symbolic polynomials;
//! 4. rebuild.
//!
//! `!` over a comparison becomes the opposite comparison (`>` pairs with
//! `<=`, `<` with `>=`); there is no double-negation elimination and no
//! De Morgan rewrite of `&`/`|`. The simplifier is idempotent but makes no
//! canonical-form promise beyond these rules: it does not sort commutative
//! operands, fold `x - x`, or collapse `x * 0`.
//!
//! Integer folding uses wrapping 64-bit two's-complement arithmetic with
//! division truncating toward zero. Division by a constant zero leaves the
//! node unsimplified, and a literal too large for `i64` is simply an
//! opaque symbolic constant.

use std::rc::Rc;

use sympath_core::{BinOp, Expr};

/// Simplifies an expression, returning a fresh tree (or the input node
/// itself where nothing changed).
pub fn simplify(expr: &Rc<Expr>) -> Rc<Expr> {
    match expr.as_ref() {
        Expr::Binary { op, left, right } => {
            let left = simplify(left);
            let right = simplify(right);
            simplify_binary(*op, left, right)
        }
        Expr::Not(inner) => simplify_not(simplify(inner)),
        Expr::Neg(inner) => simplify_neg(simplify(inner)),
        Expr::Var(_) | Expr::Const(_) => Rc::clone(expr),
    }
}

fn simplify_binary(op: BinOp, left: Rc<Expr>, right: Rc<Expr>) -> Rc<Expr> {
    if matches!(
        (left.as_ref(), right.as_ref()),
        (Expr::Const(_), Expr::Const(_))
    ) {
        return fold_constants(op, left, right);
    }
    if op.is_logical() {
        if let Some(reduced) = logical_identity(op, &left, &right) {
            return reduced;
        }
    }
    if op.is_multiplicative() {
        if let Some(expanded) = distribute(op, &left, &right) {
            return expanded;
        }
    }
    Expr::binary(op, left, right)
}

/// Folds an operator whose operands are both constants. `&`/`|` fold when
/// both sides are `true`/`false` literals; with only one boolean literal
/// the case falls through to the identity laws. Everything else demands
/// two machine integers and rebuilds otherwise.
fn fold_constants(op: BinOp, left: Rc<Expr>, right: Rc<Expr>) -> Rc<Expr> {
    if op.is_logical() {
        return match (left.as_bool(), right.as_bool()) {
            (Some(a), Some(b)) => Expr::boolean(match op {
                BinOp::And => a && b,
                _ => a || b,
            }),
            _ => logical_identity(op, &left, &right)
                .unwrap_or_else(|| Expr::binary(op, left, right)),
        };
    }

    let (Some(a), Some(b)) = (left.as_int(), right.as_int()) else {
        return Expr::binary(op, left, right);
    };

    // Comparisons fold to the integer flags 1/0, not to true/false.
    let folded = match op {
        BinOp::Add => Some(a.wrapping_add(b)),
        BinOp::Sub => Some(a.wrapping_sub(b)),
        BinOp::Mul => Some(a.wrapping_mul(b)),
        // A zero divisor leaves the division symbolic.
        BinOp::Div => (b != 0).then(|| a.wrapping_div(b)),
        BinOp::Lt => Some((a < b) as i64),
        BinOp::Gt => Some((a > b) as i64),
        BinOp::Le => Some((a <= b) as i64),
        BinOp::Ge => Some((a >= b) as i64),
        BinOp::And | BinOp::Or => None,
    };
    match folded {
        Some(value) => Expr::int(value),
        None => Expr::binary(op, left, right),
    }
}

/// Identity laws for `&`/`|` with one boolean-constant operand:
/// `false | e = e`, `true | e = true`, `false & e = false`, `true & e = e`,
/// on whichever side the constant sits. `op` must be logical.
fn logical_identity(op: BinOp, left: &Rc<Expr>, right: &Rc<Expr>) -> Option<Rc<Expr>> {
    let reduce = |constant: bool, other: &Rc<Expr>| match (op, constant) {
        // The absorbing element of the operator wins outright.
        (BinOp::Or, true) | (BinOp::And, false) => Expr::boolean(constant),
        _ => Rc::clone(other),
    };
    if let Some(value) = left.as_bool() {
        Some(reduce(value, right))
    } else if let Some(value) = right.as_bool() {
        Some(reduce(value, left))
    } else {
        None
    }
}

/// `(x ± y) op r  ->  (x op r) ± (y op r)` and its mirror, for `op` in
/// `*`/`/`, checked left side first. Applied unconditionally -- even when
/// no constants are reduced -- and the expanded tree is re-simplified.
fn distribute(op: BinOp, left: &Rc<Expr>, right: &Rc<Expr>) -> Option<Rc<Expr>> {
    if let Expr::Binary {
        op: inner,
        left: x,
        right: y,
    } = left.as_ref()
    {
        if inner.is_additive() {
            let expanded = Expr::binary(
                *inner,
                Expr::binary(op, Rc::clone(x), Rc::clone(right)),
                Expr::binary(op, Rc::clone(y), Rc::clone(right)),
            );
            return Some(simplify(&expanded));
        }
    }
    if let Expr::Binary {
        op: inner,
        left: x,
        right: y,
    } = right.as_ref()
    {
        if inner.is_additive() {
            let expanded = Expr::binary(
                *inner,
                Expr::binary(op, Rc::clone(left), Rc::clone(x)),
                Expr::binary(op, Rc::clone(left), Rc::clone(y)),
            );
            return Some(simplify(&expanded));
        }
    }
    None
}

fn simplify_not(inner: Rc<Expr>) -> Rc<Expr> {
    if let Expr::Binary { op, left, right } = inner.as_ref() {
        if let Some(flipped) = op.negated() {
            return simplify(&Expr::binary(flipped, Rc::clone(left), Rc::clone(right)));
        }
    }
    match inner.as_bool() {
        Some(value) => Expr::boolean(!value),
        None => Expr::not(inner),
    }
}

fn simplify_neg(inner: Rc<Expr>) -> Rc<Expr> {
    match inner.as_int() {
        Some(value) => Expr::int(value.wrapping_neg()),
        None => Expr::neg(inner),
    }
}
