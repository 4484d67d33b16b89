//! Symbolic interpreter for straight-line functions with branching.
//!
//! Walks the statement list of a parsed function, maintaining a set of
//! symbolic states and forking at every `if`:
//!
//! - [`State`] is one path's view: a memory map from variable names to
//!   residual expressions, the ordered conjunction of branch conditions
//!   taken to get here, and the optional return value.
//! - [`Executor`] drives a function through [`Executor::run`], producing
//!   the final state of every path in depth-first order (then-branch
//!   before else-branch). [`ExecConfig`] selects the `return` semantics.
//! - [`eval_expr`](eval::eval_expr) substitutes memory bindings into an
//!   expression without simplifying it.
//!
//! Both arms of every `if` are explored unconditionally -- there is no
//! satisfiability checking and no pruning, so a function with `k`
//! dynamically reached `if` statements yields `2^k` states.
//!
//! # Usage
//!
//! ```ignore
//! let func = sympath_syntax::parse(source)?;
//! let states = symbolic_execute(&func);
//! let text = crate::report::render_states(&states);
//! ```

pub mod eval;
pub mod state;

pub use eval::eval_expr;
pub use state::{symbolic_execute, ExecConfig, Executor, State};
