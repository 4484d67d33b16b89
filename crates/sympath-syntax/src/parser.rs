//! Recursive-descent parser.
//!
//! One method per grammar nonterminal, layered by precedence on the
//! expression side:
//!
//! ```text
//! function   := IDENT "(" params? ")" ":" type "{" stmt* "return" expr "}"
//! stmt       := assign | if
//! expr       := logical
//! logical    := relational (("&" | "|") relational)*
//! relational := additive (("<" | ">") additive)*
//! additive   := mult (("+" | "-") mult)*
//! mult       := unary (("*" | "/") unary)*
//! unary      := "!" unary | "-" unary | primary
//! primary    := NUMBER | "true" | "false" | IDENT | "(" expr ")"
//! ```
//!
//! Every production returns `Result` and propagates with `?`; the first
//! mismatch wins and names the offending token and its index.

use std::rc::Rc;

use sympath_core::function::param;
use sympath_core::{BinOp, Expr, Function, ParamType, Stmt};

use crate::error::SyntaxError;
use crate::lexer::tokenize;
use crate::token::{Keyword, Sym, Token};

/// Tokenizes and parses a complete function.
pub fn parse(input: &str) -> Result<Function, SyntaxError> {
    Parser::new(tokenize(input)?).parse_function()
}

/// Cursor over a token stream.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    // -----------------------------------------------------------------------
    // Token cursor
    // -----------------------------------------------------------------------

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn accept_sym(&mut self, sym: Sym) -> bool {
        if self.peek() == Some(&Token::Sym(sym)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_sym(&mut self, sym: Sym) -> Result<(), SyntaxError> {
        if self.accept_sym(sym) {
            Ok(())
        } else {
            Err(self.mismatch(&format!("'{}'", sym.as_char())))
        }
    }

    fn expect_keyword(&mut self, kw: Keyword) -> Result<(), SyntaxError> {
        if self.peek() == Some(&Token::Keyword(kw)) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.mismatch(&format!("'{}'", kw.as_str())))
        }
    }

    fn expect_ident(&mut self, expected: &str) -> Result<String, SyntaxError> {
        match self.peek() {
            Some(Token::Ident(name)) => {
                let name = name.clone();
                self.pos += 1;
                Ok(name)
            }
            _ => Err(self.mismatch(expected)),
        }
    }

    fn mismatch(&self, expected: &str) -> SyntaxError {
        match self.peek() {
            Some(token) => SyntaxError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.to_string(),
                pos: self.pos,
            },
            None => SyntaxError::UnexpectedEof {
                expected: expected.to_string(),
            },
        }
    }

    // -----------------------------------------------------------------------
    // Declarations and statements
    // -----------------------------------------------------------------------

    pub fn parse_function(&mut self) -> Result<Function, SyntaxError> {
        let name = self.expect_ident("function name")?;
        self.expect_sym(Sym::LParen)?;
        let params = self.parse_parameters()?;
        self.expect_sym(Sym::RParen)?;
        self.expect_sym(Sym::Colon)?;
        let return_type = self.parse_type()?;
        self.expect_sym(Sym::LBrace)?;
        let body = self.parse_statements()?;
        self.expect_keyword(Keyword::Return)?;
        let ret_expr = self.parse_expression()?;
        self.expect_sym(Sym::RBrace)?;
        Ok(Function::new(name, params, return_type, body, ret_expr))
    }

    fn parse_type(&mut self) -> Result<ParamType, SyntaxError> {
        match self.peek() {
            Some(Token::Keyword(Keyword::Int)) => {
                self.pos += 1;
                Ok(ParamType::Int)
            }
            Some(Token::Keyword(Keyword::Bool)) => {
                self.pos += 1;
                Ok(ParamType::Bool)
            }
            _ => Err(self.mismatch("'int' or 'bool'")),
        }
    }

    fn parse_parameters(&mut self) -> Result<Vec<sympath_core::Param>, SyntaxError> {
        let mut params = Vec::new();
        if matches!(
            self.peek(),
            Some(Token::Keyword(Keyword::Int) | Token::Keyword(Keyword::Bool))
        ) {
            loop {
                let ty = self.parse_type()?;
                let name = self.expect_ident("parameter name")?;
                params.push(param(ty, name));
                if !self.accept_sym(Sym::Comma) {
                    break;
                }
            }
        }
        Ok(params)
    }

    /// Parses statements until `return`, `}`, or end of input. The caller
    /// decides which terminator the grammar actually allows there.
    fn parse_statements(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        let mut stmts = Vec::new();
        loop {
            match self.peek() {
                None
                | Some(Token::Keyword(Keyword::Return))
                | Some(Token::Sym(Sym::RBrace)) => break,
                Some(Token::Keyword(Keyword::If)) => stmts.push(self.parse_if()?),
                _ => stmts.push(self.parse_assign()?),
            }
        }
        Ok(stmts)
    }

    fn parse_if(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect_keyword(Keyword::If)?;
        self.expect_sym(Sym::LParen)?;
        let cond = self.parse_expression()?;
        self.expect_sym(Sym::RParen)?;
        self.expect_sym(Sym::LBrace)?;
        let then_block = self.parse_statements()?;
        self.expect_sym(Sym::RBrace)?;
        self.expect_keyword(Keyword::Else)?;
        self.expect_sym(Sym::LBrace)?;
        let else_block = self.parse_statements()?;
        self.expect_sym(Sym::RBrace)?;
        Ok(Stmt::If {
            cond,
            then_block,
            else_block,
        })
    }

    fn parse_assign(&mut self) -> Result<Stmt, SyntaxError> {
        let target = self.expect_ident("assignment target")?;
        self.expect_sym(Sym::Assign)?;
        let value = self.parse_expression()?;
        Ok(Stmt::Assign { target, value })
    }

    // -----------------------------------------------------------------------
    // Expressions, one layer per precedence level
    // -----------------------------------------------------------------------

    pub fn parse_expression(&mut self) -> Result<Rc<Expr>, SyntaxError> {
        self.parse_logical()
    }

    fn parse_logical(&mut self) -> Result<Rc<Expr>, SyntaxError> {
        let mut left = self.parse_relational()?;
        loop {
            let op = match self.peek() {
                Some(Token::Sym(Sym::Amp)) => BinOp::And,
                Some(Token::Sym(Sym::Pipe)) => BinOp::Or,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_relational()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<Rc<Expr>, SyntaxError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.peek() {
                Some(Token::Sym(Sym::Lt)) => BinOp::Lt,
                Some(Token::Sym(Sym::Gt)) => BinOp::Gt,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_additive()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Rc<Expr>, SyntaxError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek() {
                Some(Token::Sym(Sym::Plus)) => BinOp::Add,
                Some(Token::Sym(Sym::Minus)) => BinOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_multiplicative()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Rc<Expr>, SyntaxError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Sym(Sym::Star)) => BinOp::Mul,
                Some(Token::Sym(Sym::Slash)) => BinOp::Div,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_unary()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Rc<Expr>, SyntaxError> {
        match self.peek() {
            Some(Token::Sym(Sym::Bang)) => {
                self.pos += 1;
                Ok(Expr::not(self.parse_unary()?))
            }
            Some(Token::Sym(Sym::Minus)) => {
                self.pos += 1;
                Ok(Expr::neg(self.parse_unary()?))
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Rc<Expr>, SyntaxError> {
        match self.peek() {
            Some(Token::Number(digits)) => {
                let digits = digits.clone();
                self.pos += 1;
                Ok(Expr::constant(digits))
            }
            Some(Token::Keyword(Keyword::True)) => {
                self.pos += 1;
                Ok(Expr::boolean(true))
            }
            Some(Token::Keyword(Keyword::False)) => {
                self.pos += 1;
                Ok(Expr::boolean(false))
            }
            Some(Token::Ident(name)) => {
                let name = name.clone();
                self.pos += 1;
                Ok(Expr::var(name))
            }
            Some(Token::Sym(Sym::LParen)) => {
                self.pos += 1;
                let expr = self.parse_expression()?;
                self.expect_sym(Sym::RParen)?;
                Ok(expr)
            }
            Some(token) => Err(SyntaxError::UnknownPrimary {
                found: token.to_string(),
                pos: self.pos,
            }),
            None => Err(SyntaxError::UnexpectedEof {
                expected: "an expression".to_string(),
            }),
        }
    }
}
