//! Binary operator vocabulary for the expression algebra.
//!
//! One exhaustive [`BinOp`] enum covers all binary operators of the input
//! language plus the two relational forms (`<=`, `>=`) that only the
//! simplifier produces when it pushes a negation through a comparison.
//!
//! Precedence levels (higher binds tighter):
//!
//! | Prec | Operators        |
//! |------|------------------|
//! | 3    | `*` `/`          |
//! | 2    | `+` `-`          |
//! | 1    | `<` `>` `<=` `>=`|
//! | 0    | `&` `\|`         |
//!
//! Unary `!` and `-` bind at precedence 4; see
//! [`UNARY_PRECEDENCE`](crate::expr::UNARY_PRECEDENCE).

use serde::{Deserialize, Serialize};

/// Binary operators, all left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Gt,
    /// Only produced by simplification of `!(a > b)`; never parsed.
    Le,
    /// Only produced by simplification of `!(a < b)`; never parsed.
    Ge,
    And,
    Or,
}

impl BinOp {
    /// The surface syntax of this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Le => "<=",
            BinOp::Ge => ">=",
            BinOp::And => "&",
            BinOp::Or => "|",
        }
    }

    /// Binding strength for rendering. Higher binds tighter.
    pub fn precedence(&self) -> i8 {
        match self {
            BinOp::Mul | BinOp::Div => 3,
            BinOp::Add | BinOp::Sub => 2,
            BinOp::Lt | BinOp::Gt | BinOp::Le | BinOp::Ge => 1,
            BinOp::And | BinOp::Or => 0,
        }
    }

    /// Returns `true` for `&` and `|`.
    pub fn is_logical(&self) -> bool {
        matches!(self, BinOp::And | BinOp::Or)
    }

    /// Returns `true` for `<`, `>`, `<=`, `>=`.
    pub fn is_relational(&self) -> bool {
        matches!(self, BinOp::Lt | BinOp::Gt | BinOp::Le | BinOp::Ge)
    }

    /// Returns `true` for `+` and `-`.
    pub fn is_additive(&self) -> bool {
        matches!(self, BinOp::Add | BinOp::Sub)
    }

    /// Returns `true` for `*` and `/`.
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, BinOp::Mul | BinOp::Div)
    }

    /// The comparison that is the logical negation of this one, pairing
    /// `>` with `<=` and `<` with `>=`. `None` for non-relational operators.
    pub fn negated(&self) -> Option<BinOp> {
        match self {
            BinOp::Gt => Some(BinOp::Le),
            BinOp::Lt => Some(BinOp::Ge),
            BinOp::Ge => Some(BinOp::Lt),
            BinOp::Le => Some(BinOp::Gt),
            _ => None,
        }
    }
}
