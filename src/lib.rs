//! # Introduction
//!
//! basicpp lexes, parses and directly executes BASIC++, a small BASIC-like
//! scripting language with variables, console I/O, arithmetic and boolean
//! expressions, and structured control flow.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → Interpreter → Terminal
//! ```
//!
//! 1. [`parser`] tokenises the source and builds an AST. The first lexical or
//!    syntax error aborts the phase.
//! 2. [`interpreter`] walks the AST statement by statement.
//! 3. [`memory`] holds the runtime model: tagged [`memory::value::Value`]s in
//!    a single global [`memory::environment::Environment`].
//! 4. [`terminal`] is the console seam used by `PRINT` and `INPUT`, with a
//!    real stdin/stdout implementation and a [`terminal::MockTerminal`] that
//!    records output.
//!
//! ## Example
//!
//! ```
//! use basicpp::interpreter::engine::Interpreter;
//! use basicpp::terminal::MockTerminal;
//!
//! let mut interpreter = Interpreter::with_seed(MockTerminal::new(), 1);
//! basicpp::run_source("LET x = 2\nPRINT (x + 1) * 3", &mut interpreter).unwrap();
//! assert_eq!(interpreter.terminal().get_output(), vec!["9"]);
//! ```

pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod terminal;

use interpreter::engine::Interpreter;
use interpreter::errors::RuntimeError;
use parser::ast::Program;
use parser::lexer::{LexError, Lexer};
use parser::parse::{ParseError, Parser};
use terminal::Terminal;
use thiserror::Error;

/// An error from any of the three phases
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Process exit status reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Lex(_) => 11,
            Error::Parse(_) => 12,
            Error::Runtime(_) => 13,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Error::Lex(e) => e.line,
            Error::Parse(e) => e.line(),
            Error::Runtime(e) => e.line(),
        }
    }
}

/// Lex and parse `source` into a program
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = Lexer::new(source).tokenize()?;
    let program = Parser::new(tokens).parse_program()?;
    Ok(program)
}

/// Parse `source` and run it on `interpreter`
pub fn run_source<T: Terminal>(source: &str, interpreter: &mut Interpreter<T>) -> Result<(), Error> {
    let program = parse_source(source)?;
    interpreter.run(&program)?;
    Ok(())
}
