//! Runtime error types for the BASIC++ interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! during program execution (as opposed to lexical or parse errors).
//!
//! All runtime errors are fatal - they halt execution at the first failing
//! statement. Variables assigned before that point keep their values.

use crate::parser::ast::{BinOp, UnOp};
use thiserror::Error;

/// A runtime error together with the source line it was raised on
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[line {line}] Interpreter error: {kind}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub line: usize,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, line: usize) -> Self {
        RuntimeError { kind, line }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// The message without the line prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Runtime errors that can occur during execution
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeErrorKind {
    /// `-` on a non-number or `NOT` on a non-boolean
    #[error("Unary '{op}' is not allowed on '{operand}' type.")]
    UnaryTypeMismatch { op: UnOp, operand: &'static str },

    /// Operand combination the operator does not accept
    #[error("Binary '{op}' is not allowed on '{left}' {op} '{right}' types.")]
    BinaryTypeMismatch {
        op: BinOp,
        left: &'static str,
        right: &'static str,
    },

    #[error("DivisionByZero")]
    DivisionByZero,

    /// Read of a variable that was never assigned
    #[error("VariableNotDeclared '{0}'")]
    VariableNotDeclared(String),

    /// `TONUM` on text that is not a finite float
    #[error("InvalidNumberFormat '{0}'")]
    InvalidNumberFormat(String),

    /// `IF`/`WHILE` condition evaluated to something other than a boolean
    #[error("Condition must be 'boolean', found '{0}'.")]
    ConditionNotBoolean(&'static str),

    #[error("'RND' is not allowed on '{low}', '{high}' types.")]
    RndTypeMismatch { low: &'static str, high: &'static str },

    /// `RND` bounds that contain no integer to draw
    #[error("'RND' range [{low}, {high}) contains no integer.")]
    EmptyRandomRange { low: f64, high: f64 },

    #[error("BREAK outside of a WHILE loop.")]
    BreakOutsideLoop,

    #[error("CONTINUE outside of a WHILE loop.")]
    ContinueOutsideLoop,

    /// Terminal read or write failure
    #[error("I/O failure: {0}")]
    Io(String),
}
