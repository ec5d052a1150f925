//! Expression evaluation implementation
//!
//! This module handles evaluation of all BASIC++ expression types:
//!
//! - Literals (numbers, strings, booleans)
//! - Parenthesized groupings
//! - Variables
//! - Unary and binary operators (delegated to `ops`)
//!
//! Both operands of a binary operator are always evaluated, left first. There
//! is no short-circuiting for `AND` / `OR`.
//!
//! Errors are reported at the line stored in the failing node.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::{RuntimeError, RuntimeErrorKind};
use crate::memory::value::Value;
use crate::parser::ast::*;
use crate::terminal::Terminal;

impl<T: Terminal> Interpreter<T> {
    /// Evaluate an expression and return its value
    pub(crate) fn evaluate_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.clone()),

            Expr::Grouping { inner, .. } => self.evaluate_expr(inner),

            Expr::Variable { name, line } => self.lookup_variable(name, *line).cloned(),

            Expr::Unary { op, operand, line } => {
                let value = self.evaluate_expr(operand)?;
                self.evaluate_unary_op(*op, value, *line)
            }

            Expr::Binary {
                left,
                op,
                right,
                line,
            } => {
                let left_val = self.evaluate_expr(left)?;
                let right_val = self.evaluate_expr(right)?;
                self.evaluate_binary_op(*op, left_val, right_val, *line)
            }
        }
    }

    /// Read a variable, failing if it was never assigned
    pub(crate) fn lookup_variable(&self, name: &str, line: usize) -> Result<&Value, RuntimeError> {
        self.environment.get(name).ok_or_else(|| {
            RuntimeError::new(RuntimeErrorKind::VariableNotDeclared(name.to_string()), line)
        })
    }

    /// Evaluate an `IF` / `WHILE` condition, which must be a boolean
    pub(crate) fn evaluate_condition(&mut self, condition: &Expr) -> Result<bool, RuntimeError> {
        let value = self.evaluate_expr(condition)?;
        value.as_bool().ok_or_else(|| {
            RuntimeError::new(
                RuntimeErrorKind::ConditionNotBoolean(value.type_name()),
                condition.line(),
            )
        })
    }
}
