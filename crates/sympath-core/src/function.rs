//! Function and statement AST.
//!
//! [`Function`] is what the parser hands to the symbolic executor: a name,
//! typed parameters, a straight-line statement body, and the trailing
//! return expression. Statement bodies contain only assignments and
//! two-armed `if` statements; [`Stmt::Return`] exists in the model (and the
//! executor honours it) but the surface grammar only places `return` at the
//! end of the function, so the parser never produces it.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::expr::Expr;

/// The two parameter/return types of the input language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamType {
    Int,
    Bool,
}

impl ParamType {
    /// The source keyword for this type.
    pub fn keyword(&self) -> &'static str {
        match self {
            ParamType::Int => "int",
            ParamType::Bool => "bool",
        }
    }
}

/// A typed function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub ty: ParamType,
    pub name: String,
}

/// A statement in a function body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    /// `target = value`
    Assign { target: String, value: Rc<Expr> },
    /// `if (cond) { then_block } else { else_block }`
    If {
        cond: Rc<Expr>,
        then_block: Vec<Stmt>,
        else_block: Vec<Stmt>,
    },
    /// `return value` -- representable mid-block, never parsed there.
    Return { value: Rc<Expr> },
}

/// A parsed function: the unit of symbolic execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    /// Parameters in declaration order.
    pub params: SmallVec<[Param; 4]>,
    pub return_type: ParamType,
    pub body: Vec<Stmt>,
    /// The trailing return expression, evaluated in every final state.
    pub ret_expr: Rc<Expr>,
}

impl Function {
    pub fn new(
        name: impl Into<String>,
        params: impl IntoIterator<Item = Param>,
        return_type: ParamType,
        body: Vec<Stmt>,
        ret_expr: Rc<Expr>,
    ) -> Self {
        Function {
            name: name.into(),
            params: params.into_iter().collect(),
            return_type,
            body,
            ret_expr,
        }
    }

    /// Returns the number of parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Shorthand for a typed parameter.
pub fn param(ty: ParamType, name: impl Into<String>) -> Param {
    Param {
        ty,
        name: name.into(),
    }
}
