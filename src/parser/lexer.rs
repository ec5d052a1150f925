//! Lexer (tokenizer) for BASIC++ source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! `REM` comments are discarded here rather than handed to the parser.
//!
//! Keywords and the `TRUE`/`FALSE` literals are case-insensitive; identifiers
//! keep their original spelling and are compared case-sensitively later on.

use crate::memory::value::Value;
use thiserror::Error;
use tracing::debug;

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    LeftParen,  // (
    RightParen, // )
    Comma,      // ,

    // Arithmetic
    Minus, // -
    Plus,  // +
    Star,  // *
    Slash, // /

    // Comparison and assignment
    Equal,        // =
    EqualEqual,   // ==
    NotEqual,     // <>
    Less,         // <
    LessEqual,    // <=
    Greater,      // >
    GreaterEqual, // >=

    // Literals
    Identifier,
    String,
    Number,
    Boolean,

    // Keywords
    Let,
    Input,
    Print,
    ToNum,
    ToStr,
    Rnd,
    If,
    Then,
    Else,
    End,
    While,
    Do,
    Break,
    Continue,
    Not,
    And,
    Or,

    // End of input
    Eof,
}

/// A single lexical unit.
///
/// `literal` is set for numbers, strings, booleans and identifiers (the
/// identifier's name as [`Value::Text`]); every other kind leaves it empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Value>,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<Value>, line: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Token::new(TokenKind::Eof, "", None, line)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Tokenization error: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: usize) -> Self {
        LexError { kind, line }
    }

    /// The message without the line prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),

    #[error("Unterminated string.")]
    UnterminatedString,

    /// Digits and dots that do not form a float, e.g. `1.2.3`.
    #[error("Invalid number literal '{0}'.")]
    InvalidNumber(String),
}

/// Lexer for BASIC++ source code
///
/// Keeps a previous/current/next character window over the input so that
/// two-character operators are decided without backtracking.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.advance() {
            if let Some(token) = self.scan_token(ch)? {
                tokens.push(token);
            }
        }

        tokens.push(Token::eof(self.line));
        debug!(tokens = tokens.len(), lines = self.line, "tokenized source");

        Ok(tokens)
    }

    /// Scan the token starting at `ch`, which has already been consumed.
    ///
    /// Returns `None` for whitespace and comments.
    fn scan_token(&mut self, ch: char) -> Result<Option<Token>, LexError> {
        let token = match ch {
            '(' => self.symbol(TokenKind::LeftParen, "("),
            ')' => self.symbol(TokenKind::RightParen, ")"),
            ',' => self.symbol(TokenKind::Comma, ","),
            '-' => self.symbol(TokenKind::Minus, "-"),
            '+' => self.symbol(TokenKind::Plus, "+"),
            '*' => self.symbol(TokenKind::Star, "*"),
            '/' => self.symbol(TokenKind::Slash, "/"),
            '=' => {
                if self.match_next('=') {
                    self.symbol(TokenKind::EqualEqual, "==")
                } else {
                    self.symbol(TokenKind::Equal, "=")
                }
            }
            '<' => {
                if self.match_next('=') {
                    self.symbol(TokenKind::LessEqual, "<=")
                } else if self.match_next('>') {
                    self.symbol(TokenKind::NotEqual, "<>")
                } else {
                    self.symbol(TokenKind::Less, "<")
                }
            }
            '>' => {
                if self.match_next('=') {
                    self.symbol(TokenKind::GreaterEqual, ">=")
                } else {
                    self.symbol(TokenKind::Greater, ">")
                }
            }

            // Line breaks are counted in advance()
            ' ' | '\t' | '\r' | '\n' => return Ok(None),

            '"' => self.string_literal()?,

            '0'..='9' => self.number_literal(ch)?,

            'a'..='z' | 'A'..='Z' | '_' => return self.identifier_or_keyword(ch),

            _ => {
                return Err(LexError::new(
                    LexErrorKind::UnexpectedCharacter(ch),
                    self.line,
                ))
            }
        };

        Ok(Some(token))
    }

    fn symbol(&self, kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, None, self.line)
    }

    /// Parse string literal. No escape sequences; newlines are kept.
    fn string_literal(&mut self) -> Result<Token, LexError> {
        let mut string = String::new();

        loop {
            match self.advance() {
                Some('"') => break,
                Some(ch) => string.push(ch),
                None => {
                    return Err(LexError::new(
                        LexErrorKind::UnterminatedString,
                        self.line,
                    ))
                }
            }
        }

        Ok(Token::new(
            TokenKind::String,
            format!("\"{}\"", string),
            Some(Value::Text(string)),
            self.line,
        ))
    }

    /// Parse numeric literal (digits and dots, greedily)
    fn number_literal(&mut self, first_digit: char) -> Result<Token, LexError> {
        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || ch == '.' {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let value = num_str.parse::<f64>().map_err(|_| {
            LexError::new(LexErrorKind::InvalidNumber(num_str.clone()), self.line)
        })?;

        Ok(Token::new(
            TokenKind::Number,
            num_str,
            Some(Value::Number(value)),
            self.line,
        ))
    }

    /// Parse identifier, keyword, boolean literal or `REM` comment
    fn identifier_or_keyword(&mut self, first_char: char) -> Result<Option<Token>, LexError> {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let lower = ident.to_ascii_lowercase();

        if lower == "rem" {
            self.skip_line_comment();
            return Ok(None);
        }

        let token = match lower.as_str() {
            "true" => Token::new(TokenKind::Boolean, "true", Some(Value::Boolean(true)), self.line),
            "false" => Token::new(TokenKind::Boolean, "false", Some(Value::Boolean(false)), self.line),
            _ => match keyword(&lower) {
                Some(kind) => Token::new(kind, ident, None, self.line),
                None => {
                    let literal = Some(Value::Text(ident.clone()));
                    Token::new(TokenKind::Identifier, ident, literal, self.line)
                }
            },
        };

        Ok(Some(token))
    }

    /// Skip the rest of a `REM` line, including its newline
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.advance() {
            if ch == '\n' {
                break;
            }
        }
    }

    /// Peek at the next character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Consume the next character if it is `expected`
    fn match_next(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
        }

        Some(ch)
    }
}

/// Keyword lookup on an already lower-cased word.
fn keyword(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "let" => TokenKind::Let,
        "input" => TokenKind::Input,
        "print" => TokenKind::Print,
        "tonum" => TokenKind::ToNum,
        "tostr" => TokenKind::ToStr,
        "rnd" => TokenKind::Rnd,
        "if" => TokenKind::If,
        "then" => TokenKind::Then,
        "else" => TokenKind::Else,
        "end" => TokenKind::End,
        "while" => TokenKind::While,
        "do" => TokenKind::Do,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "not" => TokenKind::Not,
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        _ => return None,
    };
    Some(kind)
}
