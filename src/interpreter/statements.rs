//! Statement execution implementation
//!
//! Adds `impl Interpreter` methods for the non-loop statements: console I/O,
//! conversions, `RND`, blocks and `IF`. `WHILE` lives in `loops`.

use crate::interpreter::engine::{ControlFlow, Interpreter};
use crate::interpreter::errors::{RuntimeError, RuntimeErrorKind};
use crate::memory::value::Value;
use crate::parser::ast::{Expr, Stmt};
use crate::terminal::Terminal;
use rand::Rng;
use std::io;

fn io_error(err: io::Error, line: usize) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::Io(err.to_string()), line)
}

impl<T: Terminal> Interpreter<T> {
    pub(crate) fn execute_print(&mut self, expr: &Expr, line: usize) -> Result<(), RuntimeError> {
        let value = self.evaluate_expr(expr)?;
        self.terminal
            .print(&format!("{}\n", value), line)
            .map_err(|e| io_error(e, line))
    }

    /// Show the prompt, then store the next input line as text.
    ///
    /// End of input stores an empty string.
    pub(crate) fn execute_input(
        &mut self,
        prompt: &Expr,
        target: &str,
        line: usize,
    ) -> Result<(), RuntimeError> {
        let prompt = self.evaluate_expr(prompt)?;
        self.terminal
            .print(&prompt.to_string(), line)
            .and_then(|()| self.terminal.flush())
            .map_err(|e| io_error(e, line))?;

        let text = self
            .terminal
            .read_line(line)
            .map_err(|e| io_error(e, line))?
            .unwrap_or_default();

        self.environment.assign(target, Value::Text(text));
        Ok(())
    }

    pub(crate) fn execute_to_num(
        &mut self,
        source: &str,
        destination: Option<&str>,
        line: usize,
    ) -> Result<(), RuntimeError> {
        let number = match self.lookup_variable(source, line)? {
            Value::Number(n) => *n,
            Value::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Text(text) => Value::parse_number(text).ok_or_else(|| {
                RuntimeError::new(RuntimeErrorKind::InvalidNumberFormat(text.clone()), line)
            })?,
        };

        self.environment
            .assign(destination.unwrap_or(source), Value::Number(number));
        Ok(())
    }

    pub(crate) fn execute_to_str(
        &mut self,
        source: &str,
        destination: Option<&str>,
        line: usize,
    ) -> Result<(), RuntimeError> {
        let text = self.lookup_variable(source, line)?.to_string();
        self.environment
            .assign(destination.unwrap_or(source), Value::Text(text));
        Ok(())
    }

    /// Draw an integer `n` with `ceil(low) <= n < floor(high)`
    pub(crate) fn execute_rnd(
        &mut self,
        destination: &str,
        low: &Expr,
        high: &Expr,
        line: usize,
    ) -> Result<(), RuntimeError> {
        let low = self.evaluate_expr(low)?;
        let high = self.evaluate_expr(high)?;

        let (lo, hi) = match (&low, &high) {
            (Value::Number(lo), Value::Number(hi)) => (*lo, *hi),
            _ => {
                return Err(RuntimeError::new(
                    RuntimeErrorKind::RndTypeMismatch {
                        low: low.type_name(),
                        high: high.type_name(),
                    },
                    line,
                ));
            }
        };

        let lower = lo.ceil();
        let span = hi.floor() - lower;
        if !lower.is_finite() || !span.is_finite() || span < 1.0 || span > i64::MAX as f64 {
            return Err(RuntimeError::new(
                RuntimeErrorKind::EmptyRandomRange { low: lo, high: hi },
                line,
            ));
        }

        let offset = self.rng.gen_range(0..span as i64);
        self.environment
            .assign(destination, Value::Number(lower + offset as f64));
        Ok(())
    }

    /// Run statements in order in the shared environment, stopping at the first jump
    pub(crate) fn execute_block(&mut self, statements: &[Stmt]) -> Result<ControlFlow, RuntimeError> {
        for stmt in statements {
            let flow = self.execute_statement(stmt)?;
            if flow != ControlFlow::Normal {
                return Ok(flow);
            }
        }
        Ok(ControlFlow::Normal)
    }

    pub(crate) fn execute_if(
        &mut self,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> Result<ControlFlow, RuntimeError> {
        if self.evaluate_condition(condition)? {
            self.execute_statement(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.execute_statement(else_branch)
        } else {
            Ok(ControlFlow::Normal)
        }
    }
}
