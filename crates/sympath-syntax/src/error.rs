//! Syntax errors for the lexer and parser.
//!
//! Uses `thiserror` for structured, matchable variants. All variants are
//! fatal to the caller; the CLI maps any of them to a one-line diagnostic
//! and exit code 1.

use thiserror::Error;

/// Errors produced while tokenizing or parsing source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A character outside the language's alphabet.
    #[error("unexpected character '{ch}' at byte {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    /// The parser found a token other than the one the grammar requires.
    #[error("expected {expected} at token {pos}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        pos: usize,
    },

    /// The token stream ended mid-production.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    /// No expression can start with the token at hand.
    #[error("cannot start an expression with {found} at token {pos}")]
    UnknownPrimary { found: String, pos: usize },
}
