//! Statement parsing implementation
//!
//! This module handles parsing of all BASIC++ statement types:
//!
//! - Bindings: `LET x = expr`
//! - Console I/O: `PRINT expr`, `INPUT prompt, x`
//! - Conversions: `TONUM x [, y]`, `TOSTR x [, y]`
//! - Random numbers: `RND x, low, high`
//! - Control flow: `IF ... THEN ... [ELSE ...] END`, `WHILE ... DO ... END`
//! - Loop jumps: `BREAK`, `CONTINUE`
//!
//! # Grammar
//!
//! ```text
//! declaration ::= "LET" IDENT "=" expression | statement
//! statement   ::= print_stmt | input_stmt | tonum_stmt | tostr_stmt
//!               | rnd_stmt | if_stmt | while_stmt | "BREAK" | "CONTINUE"
//! block       ::= declaration*            (stops before END / ELSE)
//! if_stmt     ::= "IF" expression "THEN" block ( "ELSE" block )? "END"
//! while_stmt  ::= "WHILE" expression "DO" block "END"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a declaration: a `LET` binding or any other statement
    pub(crate) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.match_token(TokenKind::Let) {
            return self.parse_let_statement();
        }

        self.parse_statement()
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let kind = self.peek().kind;
        let line = self.peek().line;

        match kind {
            TokenKind::Print => {
                self.advance();
                self.parse_print_statement()
            }
            TokenKind::Input => {
                self.advance();
                self.parse_input_statement()
            }
            TokenKind::ToNum | TokenKind::ToStr => {
                self.advance();
                self.parse_conversion_statement(kind)
            }
            TokenKind::Rnd => {
                self.advance();
                self.parse_rnd_statement()
            }
            TokenKind::If => {
                self.advance();
                self.parse_if_statement(line)
            }
            TokenKind::While => {
                self.advance();
                self.parse_while_statement(line)
            }
            TokenKind::Break => {
                self.advance();
                Ok(Stmt::Break { line })
            }
            TokenKind::Continue => {
                self.advance();
                Ok(Stmt::Continue { line })
            }
            _ => Err(self.error_at_current("Statement expected.")),
        }
    }

    /// Parse block declarations up to (but not including) `END` or `ELSE`
    pub(crate) fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        let line = self.peek().line;
        let mut statements = Vec::new();

        while !self.check(TokenKind::End) && !self.check(TokenKind::Else) && !self.check(TokenKind::Eof) {
            statements.push(self.parse_declaration()?);
        }

        Ok(Stmt::Block { statements, line })
    }

    fn parse_let_statement(&mut self) -> Result<Stmt, ParseError> {
        let target = self.expect_identifier("Variable name expected after LET.")?;
        self.expect_token(TokenKind::Equal, "Equal sign expected after variable identifier.")?;
        let expr = self.parse_expression()?;

        Ok(Stmt::Let {
            expr,
            target,
            line: self.previous_line(),
        })
    }

    fn parse_print_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;

        Ok(Stmt::Print {
            expr,
            line: self.previous_line(),
        })
    }

    fn parse_input_statement(&mut self) -> Result<Stmt, ParseError> {
        let prompt = self.parse_expression()?;
        self.expect_token(
            TokenKind::Comma,
            "INPUT expects two parameters separated by comma.",
        )?;
        let target = self.expect_identifier("INPUT second parameter must be variable identifier.")?;

        Ok(Stmt::Input {
            prompt,
            target,
            line: self.previous_line(),
        })
    }

    /// `TONUM` and `TOSTR` share one shape: a source variable and an optional destination
    fn parse_conversion_statement(&mut self, kind: TokenKind) -> Result<Stmt, ParseError> {
        let keyword = if kind == TokenKind::ToNum { "TONUM" } else { "TOSTR" };
        let source = self.expect_identifier(&format!(
            "{} first parameter must be variable identifier.",
            keyword
        ))?;

        let destination = if self.match_token(TokenKind::Comma) {
            Some(self.expect_identifier(&format!(
                "{} second parameter must be variable identifier.",
                keyword
            ))?)
        } else {
            None
        };

        let line = self.previous_line();
        Ok(match kind {
            TokenKind::ToNum => Stmt::ToNum {
                source,
                destination,
                line,
            },
            _ => Stmt::ToStr {
                source,
                destination,
                line,
            },
        })
    }

    fn parse_rnd_statement(&mut self) -> Result<Stmt, ParseError> {
        let destination = self.expect_identifier("RND first parameter must be variable identifier.")?;
        self.expect_token(TokenKind::Comma, "RND expects three parameters separated by comma.")?;
        let low = self.parse_expression()?;
        self.expect_token(TokenKind::Comma, "RND expects three parameters separated by comma.")?;
        let high = self.parse_expression()?;

        Ok(Stmt::Rnd {
            destination,
            low,
            high,
            line: self.previous_line(),
        })
    }

    fn parse_if_statement(&mut self, line: usize) -> Result<Stmt, ParseError> {
        let condition = self.parse_expression()?;
        self.expect_token(TokenKind::Then, "THEN keyword expected after IF condition.")?;

        let then_branch = Box::new(self.parse_block()?);
        let else_branch = if self.match_token(TokenKind::Else) {
            Some(Box::new(self.parse_block()?))
        } else {
            None
        };

        self.expect_token(
            TokenKind::End,
            "END keyword expected at the end of IF condition block.",
        )?;

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
            line,
        })
    }

    fn parse_while_statement(&mut self, line: usize) -> Result<Stmt, ParseError> {
        let condition = self.parse_expression()?;
        self.expect_token(TokenKind::Do, "DO keyword expected after WHILE condition.")?;

        let body = Box::new(self.parse_block()?);
        self.expect_token(
            TokenKind::End,
            "END keyword expected at the end of WHILE loop block.",
        )?;

        Ok(Stmt::While {
            condition,
            body,
            line,
        })
    }
}
