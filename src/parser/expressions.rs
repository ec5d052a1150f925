//! Expression parsing implementation
//!
//! This module handles parsing of BASIC++ expressions with one method per
//! precedence level, loosest binding first:
//!
//! ```text
//! expression     ::= or
//! or             ::= and ( "OR" and )*
//! and            ::= not ( "AND" not )*
//! not            ::= "NOT" not | comparison
//! comparison     ::= additive ( ( "<" | "<=" | ">" | ">=" | "==" | "<>" ) additive )*
//! additive       ::= multiplicative ( ( "+" | "-" ) multiplicative )*
//! multiplicative ::= unary ( ( "*" | "/" ) unary )*
//! unary          ::= "-" unary | primary
//! primary        ::= NUMBER | STRING | BOOLEAN | IDENT | "(" expression ")"
//! ```
//!
//! Binary levels are left-associative. Every node is stamped with the line of
//! the token consumed last at the point it is built.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

const COMPARISON_OPERATORS: &[TokenKind] = &[
    TokenKind::Greater,
    TokenKind::GreaterEqual,
    TokenKind::Less,
    TokenKind::LessEqual,
    TokenKind::NotEqual,
    TokenKind::EqualEqual,
];

const ADDITIVE_OPERATORS: &[TokenKind] = &[TokenKind::Minus, TokenKind::Plus];

const MULTIPLICATIVE_OPERATORS: &[TokenKind] = &[TokenKind::Slash, TokenKind::Star];

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_logical_or()
    }

    /// Parse logical OR
    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logical_and()?;

        while self.match_token(TokenKind::Or) {
            let right = self.parse_logical_and()?;
            left = self.binary(left, BinOp::Or, right);
        }

        Ok(left)
    }

    /// Parse logical AND
    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logical_not()?;

        while self.match_token(TokenKind::And) {
            let right = self.parse_logical_not()?;
            left = self.binary(left, BinOp::And, right);
        }

        Ok(left)
    }

    /// Parse NOT, which binds looser than comparisons: `NOT a < b` is `NOT (a < b)`
    fn parse_logical_not(&mut self) -> Result<Expr, ParseError> {
        if self.match_token(TokenKind::Not) {
            let operand = self.parse_logical_not()?;
            return Ok(Expr::Unary {
                op: UnOp::Not,
                operand: Box::new(operand),
                line: self.previous_line(),
            });
        }

        self.parse_comparison()
    }

    /// Parse comparison (< <= > >= == <>)
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;

        while let Some(kind) = self.match_any(COMPARISON_OPERATORS) {
            let right = self.parse_additive()?;
            left = self.binary(left, binary_operator(kind), right);
        }

        Ok(left)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(kind) = self.match_any(ADDITIVE_OPERATORS) {
            let right = self.parse_multiplicative()?;
            left = self.binary(left, binary_operator(kind), right);
        }

        Ok(left)
    }

    /// Parse multiplicative (* /)
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(kind) = self.match_any(MULTIPLICATIVE_OPERATORS) {
            let right = self.parse_unary()?;
            left = self.binary(left, binary_operator(kind), right);
        }

        Ok(left)
    }

    /// Parse unary minus
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_token(TokenKind::Minus) {
            let operand = self.parse_unary()?;
            return Ok(Expr::Unary {
                op: UnOp::Neg,
                operand: Box::new(operand),
                line: self.previous_line(),
            });
        }

        self.parse_primary()
    }

    /// Parse primary (literals, variables, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        if self
            .match_any(&[TokenKind::Number, TokenKind::String, TokenKind::Boolean])
            .is_some()
        {
            let token = self.previous();
            return match token.literal.clone() {
                Some(value) => Ok(Expr::Literal {
                    value,
                    line: token.line,
                }),
                None => Err(self.error_at_previous("Expression expected.")),
            };
        }

        if self.match_token(TokenKind::LeftParen) {
            let inner = self.parse_expression()?;
            self.expect_token(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping {
                inner: Box::new(inner),
                line: self.previous_line(),
            });
        }

        if self.match_token(TokenKind::Identifier) {
            let token = self.previous();
            return Ok(Expr::Variable {
                name: token.lexeme.clone(),
                line: token.line,
            });
        }

        Err(self.error_at_current("Expression expected."))
    }

    fn binary(&self, left: Expr, op: BinOp, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
            line: self.previous_line(),
        }
    }
}

/// Map an operator token to its AST operator.
fn binary_operator(kind: TokenKind) -> BinOp {
    match kind {
        TokenKind::Plus => BinOp::Add,
        TokenKind::Minus => BinOp::Sub,
        TokenKind::Star => BinOp::Mul,
        TokenKind::Slash => BinOp::Div,
        TokenKind::EqualEqual => BinOp::Eq,
        TokenKind::NotEqual => BinOp::Ne,
        TokenKind::Less => BinOp::Lt,
        TokenKind::LessEqual => BinOp::Le,
        TokenKind::Greater => BinOp::Gt,
        TokenKind::GreaterEqual => BinOp::Ge,
        TokenKind::And => BinOp::And,
        TokenKind::Or => BinOp::Or,
        other => unreachable!("{:?} is not a binary operator", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::value::Value;
    use crate::parser::lexer::Lexer;

    fn parse_expr(source: &str) -> Result<Expr, ParseError> {
        let tokens = Lexer::new(source).tokenize().unwrap();
        Parser::new(tokens).parse_expression()
    }

    fn num(n: f64) -> Expr {
        Expr::Literal {
            value: Value::Number(n),
            line: 1,
        }
    }

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        let expr = parse_expr("1 + 2 * 3").unwrap();

        let expected = Expr::Binary {
            left: Box::new(num(1.0)),
            op: BinOp::Add,
            right: Box::new(Expr::Binary {
                left: Box::new(num(2.0)),
                op: BinOp::Mul,
                right: Box::new(num(3.0)),
                line: 1,
            }),
            line: 1,
        };
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        match parse_expr("8 - 4 - 2").unwrap() {
            Expr::Binary { left, op, right, .. } => {
                assert_eq!(op, BinOp::Sub);
                assert!(matches!(*left, Expr::Binary { op: BinOp::Sub, .. }));
                assert_eq!(*right, num(2.0));
            }
            other => panic!("Expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_grouping() {
        match parse_expr("(1 + 2) * 3").unwrap() {
            Expr::Binary { left, op, .. } => {
                assert_eq!(op, BinOp::Mul);
                assert!(matches!(*left, Expr::Grouping { .. }));
            }
            other => panic!("Expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_not_binds_looser_than_comparison() {
        match parse_expr("NOT a < b").unwrap() {
            Expr::Unary { op, operand, .. } => {
                assert_eq!(op, UnOp::Not);
                assert!(matches!(*operand, Expr::Binary { op: BinOp::Lt, .. }));
            }
            other => panic!("Expected unary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        match parse_expr("a OR b AND c").unwrap() {
            Expr::Binary { op, right, .. } => {
                assert_eq!(op, BinOp::Or);
                assert!(matches!(*right, Expr::Binary { op: BinOp::And, .. }));
            }
            other => panic!("Expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_unary_minus() {
        let expr = parse_expr("--5").unwrap();
        match expr {
            Expr::Unary { op: UnOp::Neg, operand, .. } => {
                assert!(matches!(*operand, Expr::Unary { op: UnOp::Neg, .. }));
            }
            other => panic!("Expected unary minus, got {:?}", other),
        }
    }

    #[test]
    fn test_all_comparison_operators() {
        for (source, op) in [
            ("a < b", BinOp::Lt),
            ("a <= b", BinOp::Le),
            ("a > b", BinOp::Gt),
            ("a >= b", BinOp::Ge),
            ("a == b", BinOp::Eq),
            ("a <> b", BinOp::Ne),
        ] {
            assert!(
                matches!(parse_expr(source).unwrap(), Expr::Binary { op: found, .. } if found == op),
                "{}",
                source
            );
        }
    }

    #[test]
    fn test_variable_and_string() {
        assert_eq!(
            parse_expr("Count").unwrap(),
            Expr::Variable {
                name: "Count".to_string(),
                line: 1
            }
        );
        assert_eq!(
            parse_expr("\"hi\"").unwrap(),
            Expr::Literal {
                value: Value::from("hi"),
                line: 1
            }
        );
    }

    #[test]
    fn test_missing_close_paren() {
        let err = parse_expr("(1 + 2").unwrap_err();
        assert_eq!(err.message, "Expect ')' after expression.");
        assert!(err.is_at_eof());
    }

    #[test]
    fn test_expression_expected() {
        let err = parse_expr("* 2").unwrap_err();
        assert_eq!(err.message, "Expression expected.");
        assert_eq!(err.token.lexeme, "*");
    }

    #[test]
    fn test_nodes_carry_line_of_last_consumed_token() {
        let expr = parse_expr("1 +\n2").unwrap();
        assert_eq!(expr.line(), 2);
    }

    #[test]
    fn test_literal_token_without_value_is_rejected_at_that_token() {
        use crate::parser::lexer::{Token, TokenKind};

        let tokens = vec![
            Token::new(TokenKind::Number, "1", None, 1),
            Token::new(TokenKind::Plus, "+", None, 1),
            Token::new(TokenKind::Number, "2", Some(Value::Number(2.0)), 1),
        ];
        let err = Parser::new(tokens).parse_expression().unwrap_err();

        assert_eq!(err.message, "Expression expected.");
        assert_eq!(err.index, 0);
        assert_eq!(err.token.lexeme, "1");
    }
}
