//! Symbolic execution engine.
//!
//! Three passes over the expression algebra of `sympath-core`:
//!
//! - [`interpreter`] walks a function's statement list, forking the state at
//!   every branch and threading residual expression trees through
//!   assignments and path conditions.
//! - [`simplify`] rewrites a residual tree bottom-up: constant folding,
//!   boolean identities, relational inversion under `!`, and multiplicative
//!   distribution.
//! - [`report`] renders the final state list into the output text format
//!   (and a serializable form for JSON output), feeding every expression
//!   through the simplifier on the way out.
//!
//! The interpreter itself never simplifies; simplification happens only at
//! output time.

pub mod interpreter;
pub mod report;
pub mod simplify;

pub use interpreter::{eval_expr, symbolic_execute, ExecConfig, Executor, State};
pub use report::{render_states, state_reports, StateReport};
pub use simplify::simplify;
