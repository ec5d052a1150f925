//! Loop statement execution (`WHILE`).
//!
//! The condition is evaluated before every iteration, including the first.
//! `BREAK` and `CONTINUE` arrive as the body's [`ControlFlow`] outcome and are
//! consumed here, so they never leak past the innermost loop.

use crate::interpreter::engine::{ControlFlow, Interpreter};
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::{Expr, Stmt};
use crate::terminal::Terminal;

impl<T: Terminal> Interpreter<T> {
    pub(crate) fn execute_while(&mut self, condition: &Expr, body: &Stmt) -> Result<ControlFlow, RuntimeError> {
        while self.evaluate_condition(condition)? {
            match self.execute_statement(body)? {
                ControlFlow::Break => break,
                ControlFlow::Continue | ControlFlow::Normal => {}
            }
        }

        Ok(ControlFlow::Normal)
    }
}
