//! BASIC++ source code parser
//!
//! This module transforms BASIC++ source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! - Values: numbers (64-bit floats), strings, `TRUE` / `FALSE`
//! - Statements: `LET`, `PRINT`, `INPUT`, `TONUM`, `TOSTR`, `RND`,
//!   `IF/THEN/ELSE/END`, `WHILE/DO/END`, `BREAK`, `CONTINUE`
//! - Comments: `REM` to the end of the line
//! - One statement per construct; line breaks carry no meaning beyond line numbers
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one method per precedence level.
//! The first error aborts parsing; there is no recovery.

pub mod ast;
pub mod lexer;
pub mod parse;

mod expressions;
mod statements;

#[cfg(test)]
mod lexer_property_tests;
