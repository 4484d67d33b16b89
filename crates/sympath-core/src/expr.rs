//! The expression algebra and its precedence-aware renderer.
//!
//! [`Expr`] is an immutable value tree. Children are held behind [`Rc`] so
//! subtrees can be shared freely between expressions and between forked
//! interpreter states; nothing ever mutates a node after construction, and
//! no cycles can be built through the constructors here.
//!
//! [`Expr::Const`] keeps its textual form. A decimal literal that does not
//! fit the machine integer is still a perfectly good symbolic constant --
//! the simplifier treats it as opaque rather than failing.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::ops::BinOp;

/// Binding strength of the prefix operators `!` and `-`.
pub const UNARY_PRECEDENCE: i8 = 4;

/// A symbolic expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// Free variable: a parameter or an unresolved lookup.
    Var(String),
    /// Literal: a decimal integer or one of `true`/`false`, kept textually.
    Const(String),
    /// Binary operator application.
    Binary {
        op: BinOp,
        left: Rc<Expr>,
        right: Rc<Expr>,
    },
    /// Logical negation.
    Not(Rc<Expr>),
    /// Arithmetic negation.
    Neg(Rc<Expr>),
}

impl Expr {
    /// A free variable.
    pub fn var(name: impl Into<String>) -> Rc<Expr> {
        Rc::new(Expr::Var(name.into()))
    }

    /// A literal with the given textual value.
    pub fn constant(value: impl Into<String>) -> Rc<Expr> {
        Rc::new(Expr::Const(value.into()))
    }

    /// An integer literal.
    pub fn int(value: i64) -> Rc<Expr> {
        Rc::new(Expr::Const(value.to_string()))
    }

    /// A `true`/`false` literal.
    pub fn boolean(value: bool) -> Rc<Expr> {
        Rc::new(Expr::Const(
            if value { "true" } else { "false" }.to_string(),
        ))
    }

    /// A binary operator application.
    pub fn binary(op: BinOp, left: Rc<Expr>, right: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Binary { op, left, right })
    }

    /// A logical negation.
    pub fn not(inner: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Not(inner))
    }

    /// An arithmetic negation.
    pub fn neg(inner: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Neg(inner))
    }

    /// The constant's integer value, if this is a constant that parses as
    /// a decimal machine integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Expr::Const(value) => value.parse().ok(),
            _ => None,
        }
    }

    /// The constant's boolean value, if this is literally `true` or `false`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Expr::Const(value) if value == "true" => Some(true),
            Expr::Const(value) if value == "false" => Some(false),
            _ => None,
        }
    }

    /// Renders this expression as infix text with minimum necessary
    /// parenthesisation. `parent_prec` is the binding strength of the
    /// enclosing operator; top-level callers pass `-1`.
    ///
    /// Variables render wrapped in single quotes; that quoting is part of
    /// the output format. A binary node renders its left child at its own
    /// precedence and its right child one level tighter, so an
    /// equal-precedence right child keeps its parentheses
    /// (left-associativity is visible in the output).
    pub fn render(&self, parent_prec: i8) -> String {
        match self {
            Expr::Var(name) => format!("'{name}'"),
            Expr::Const(value) => value.clone(),
            Expr::Binary { op, left, right } => {
                let prec = op.precedence();
                let rendered = format!(
                    "{} {} {}",
                    left.render(prec),
                    op.symbol(),
                    right.render(prec + 1)
                );
                if prec < parent_prec {
                    format!("({rendered})")
                } else {
                    rendered
                }
            }
            Expr::Not(inner) => render_prefix('!', inner, parent_prec),
            Expr::Neg(inner) => render_prefix('-', inner, parent_prec),
        }
    }
}

fn render_prefix(sigil: char, inner: &Expr, parent_prec: i8) -> String {
    let rendered = format!("{sigil}{}", inner.render(UNARY_PRECEDENCE));
    if UNARY_PRECEDENCE < parent_prec {
        format!("({rendered})")
    } else {
        rendered
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(-1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_render_quoted() {
        assert_eq!(Expr::var("x").to_string(), "'x'");
        assert_eq!(Expr::var("long_name2").to_string(), "'long_name2'");
    }

    #[test]
    fn constants_render_verbatim() {
        assert_eq!(Expr::int(42).to_string(), "42");
        assert_eq!(Expr::boolean(true).to_string(), "true");
        assert_eq!(Expr::constant("99999999999999999999").to_string(), "99999999999999999999");
    }

    #[test]
    fn lower_precedence_child_is_parenthesised() {
        // (x + 1) * 2
        let e = Expr::binary(
            BinOp::Mul,
            Expr::binary(BinOp::Add, Expr::var("x"), Expr::int(1)),
            Expr::int(2),
        );
        assert_eq!(e.to_string(), "('x' + 1) * 2");
    }

    #[test]
    fn higher_precedence_child_needs_no_parens() {
        // x * 2 + 1
        let e = Expr::binary(
            BinOp::Add,
            Expr::binary(BinOp::Mul, Expr::var("x"), Expr::int(2)),
            Expr::int(1),
        );
        assert_eq!(e.to_string(), "'x' * 2 + 1");
    }

    #[test]
    fn same_precedence_right_child_keeps_parens() {
        // a - (b - c) must not flatten to a - b - c
        let e = Expr::binary(
            BinOp::Sub,
            Expr::var("a"),
            Expr::binary(BinOp::Sub, Expr::var("b"), Expr::var("c")),
        );
        assert_eq!(e.to_string(), "'a' - ('b' - 'c')");
    }

    #[test]
    fn same_precedence_left_child_drops_parens() {
        // (a - b) - c renders without parentheses
        let e = Expr::binary(
            BinOp::Sub,
            Expr::binary(BinOp::Sub, Expr::var("a"), Expr::var("b")),
            Expr::var("c"),
        );
        assert_eq!(e.to_string(), "'a' - 'b' - 'c'");
    }

    #[test]
    fn unary_operand_of_multiplication_is_bare() {
        // -x * y: unary binds tighter than *
        let e = Expr::binary(BinOp::Mul, Expr::neg(Expr::var("x")), Expr::var("y"));
        assert_eq!(e.to_string(), "-'x' * 'y'");
    }

    #[test]
    fn not_over_comparison_parenthesises_the_comparison() {
        let e = Expr::not(Expr::binary(BinOp::Gt, Expr::var("x"), Expr::int(0)));
        assert_eq!(e.to_string(), "!('x' > 0)");
    }

    #[test]
    fn relational_chain_renders_left_associatively() {
        let e = Expr::binary(
            BinOp::Lt,
            Expr::binary(BinOp::Lt, Expr::var("a"), Expr::var("b")),
            Expr::var("c"),
        );
        assert_eq!(e.to_string(), "'a' < 'b' < 'c'");
    }

    #[test]
    fn simplifier_only_operators_render() {
        let e = Expr::binary(BinOp::Le, Expr::var("x"), Expr::int(10));
        assert_eq!(e.to_string(), "'x' <= 10");
    }

    #[test]
    fn as_int_and_as_bool() {
        assert_eq!(Expr::int(-7).as_int(), Some(-7));
        assert_eq!(Expr::boolean(false).as_int(), None);
        assert_eq!(Expr::constant("99999999999999999999").as_int(), None);
        assert_eq!(Expr::boolean(true).as_bool(), Some(true));
        assert_eq!(Expr::int(1).as_bool(), None);
        assert_eq!(Expr::var("true").as_bool(), None);
    }

    #[test]
    fn serde_roundtrip_nested_expr() {
        let e = Expr::binary(
            BinOp::And,
            Expr::not(Expr::binary(BinOp::Lt, Expr::var("x"), Expr::int(3))),
            Expr::boolean(true),
        );
        let json = serde_json::to_string(&*e).unwrap();
        let back: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(*e, back);
    }
}
