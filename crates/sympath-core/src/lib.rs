pub mod expr;
pub mod function;
pub mod ops;

// Re-export commonly used types
pub use expr::{Expr, UNARY_PRECEDENCE};
pub use function::{Function, Param, ParamType, Stmt};
pub use ops::BinOp;
