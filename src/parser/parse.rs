//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: Parsing statements (LET, PRINT, IF, WHILE, etc.)
//! - `expressions`: Parsing expressions along the precedence ladder
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! # End of input
//!
//! [`Parser::is_at_end`] reports the end only when both the current and the
//! next token are `EOF`. [`Parser::peek_next`] repeats the sentinel past the
//! end of the stream, so a statement that looks one token past `END`/`ELSE`
//! never reads beyond it, while a trailing single-token statement (a final
//! `BREAK`, or stray text) is still parsed.

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};
use thiserror::Error;
use tracing::debug;

/// Parser error type
///
/// Keeps a copy of the offending token so the caller can report its line and
/// lexeme without holding on to the token stream.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} Parsing error: {message}", describe_site(.token))]
pub struct ParseError {
    pub message: String,
    /// Index of the offending token in the token stream
    pub index: usize,
    pub token: Token,
}

impl ParseError {
    pub fn line(&self) -> usize {
        self.token.line
    }

    pub fn is_at_eof(&self) -> bool {
        self.token.is_eof()
    }
}

fn describe_site(token: &Token) -> String {
    if token.is_eof() {
        format!("[line {} (at end of file)]", token.line)
    } else {
        format!("[line {}] (at '{}')", token.line, token.lexeme)
    }
}

/// Recursive descent parser for BASIC++
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Create a parser over a lexed token stream.
    ///
    /// An `EOF` sentinel is appended if the stream does not already end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::eof(line));
        }

        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire program (top-level declarations)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            let stmt = self.parse_declaration()?;
            program.statements.push(stmt);
        }

        debug!(statements = program.statements.len(), "parsed program");
        Ok(program)
    }

    // ===== Helper methods =====

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it is any of `kinds`, returning its kind.
    pub(crate) fn match_any(&mut self, kinds: &[TokenKind]) -> Option<TokenKind> {
        let kind = self.peek().kind;
        if kinds.contains(&kind) {
            self.advance();
            Some(kind)
        } else {
            None
        }
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.peek().is_eof() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is_eof() && self.peek_next().is_eof()
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// The token after the current one; the `EOF` sentinel repeats past the end.
    pub(crate) fn peek_next(&self) -> &Token {
        self.tokens
            .get(self.position + 1)
            .unwrap_or(&self.tokens[self.tokens.len() - 1])
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    /// Line of the most recently consumed token
    pub(crate) fn previous_line(&self) -> usize {
        self.previous().line
    }

    pub(crate) fn error_at_current(&self, message: &str) -> ParseError {
        ParseError {
            message: message.to_string(),
            index: self.position,
            token: self.peek().clone(),
        }
    }

    /// Error pointing at the token just consumed
    pub(crate) fn error_at_previous(&self, message: &str) -> ParseError {
        let index = self.position.saturating_sub(1);
        ParseError {
            message: message.to_string(),
            index,
            token: self.tokens[index].clone(),
        }
    }

    pub(crate) fn expect_token(&mut self, kind: TokenKind, message: &str) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_at_current(message))
        }
    }

    pub(crate) fn expect_identifier(&mut self, message: &str) -> Result<String, ParseError> {
        if self.check(TokenKind::Identifier) {
            Ok(self.advance().lexeme.clone())
        } else {
            Err(self.error_at_current(message))
        }
    }
}
