//! Text frontend for the symbolic executor.
//!
//! Turns source text into a [`sympath_core::Function`] in two stages:
//! [`tokenize`] produces a flat token stream, [`Parser`] runs recursive
//! descent over it. [`parse`] chains the two.
//!
//! Both stages fail fast with a [`SyntaxError`] naming the offending
//! character or token; there is no recovery.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use error::SyntaxError;
pub use lexer::tokenize;
pub use parser::{parse, Parser};
pub use token::{Keyword, Sym, Token};
