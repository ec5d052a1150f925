//! BASIC++ interpreter execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: Main interpreter and statement dispatch
//! - [`errors`]: Runtime error types
//!
//! The remaining modules only extend [`engine::Interpreter`] with more
//! `impl` blocks: expression evaluation, statement and loop execution, and the
//! operator rules under `ops`.
//!
//! # Execution Model
//!
//! The interpreter walks the AST and executes statements one at a time against
//! a single global [`crate::memory::environment::Environment`]. `BREAK` and
//! `CONTINUE` travel back up the call tree as a `ControlFlow` value until a
//! `WHILE` consumes them.

pub mod engine;
pub mod errors;

mod expressions;
mod loops;
mod ops;
mod statements;
