//! Hand-rolled lexer.
//!
//! Identifiers are `[A-Za-z][A-Za-z0-9_]*`, numbers are bare decimal
//! digit runs, and every operator and delimiter is a single character.
//! Whitespace only separates tokens. Anything else is rejected here
//! rather than deferred to the parser.

use crate::error::SyntaxError;
use crate::token::{Keyword, Sym, Token};

/// Tokenizes the entire input.
pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let ch = bytes[i] as char;

        if ch.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        if ch.is_ascii_digit() {
            let start = i;
            while i < bytes.len() && (bytes[i] as char).is_ascii_digit() {
                i += 1;
            }
            tokens.push(Token::Number(input[start..i].to_string()));
            continue;
        }

        if ch.is_ascii_alphabetic() {
            let start = i;
            while i < bytes.len() {
                let c = bytes[i] as char;
                if c.is_ascii_alphanumeric() || c == '_' {
                    i += 1;
                } else {
                    break;
                }
            }
            let word = &input[start..i];
            tokens.push(match Keyword::from_word(word) {
                Some(kw) => Token::Keyword(kw),
                None => Token::Ident(word.to_string()),
            });
            continue;
        }

        match Sym::from_char(ch) {
            Some(sym) => {
                tokens.push(Token::Sym(sym));
                i += 1;
            }
            None => {
                // Non-ASCII bytes land here too: the alphabet is pure ASCII.
                let ch = input[i..].chars().next().unwrap_or(ch);
                return Err(SyntaxError::UnexpectedChar { ch, offset: i });
            }
        }
    }

    Ok(tokens)
}
