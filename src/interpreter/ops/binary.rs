//! Binary operator evaluation
//!
//! Operand rules:
//!
//! | Operator | Accepted operands |
//! |---|---|
//! | `+` | two numbers, or anything when either side is text (concatenation) |
//! | `-` `*` `/` `<` `<=` `>` `>=` | two numbers |
//! | `==` `<>` | two numbers or two strings |
//! | `AND` `OR` | two booleans |

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::{RuntimeError, RuntimeErrorKind};
use crate::memory::value::Value;
use crate::parser::ast::BinOp;
use crate::terminal::Terminal;

impl<T: Terminal> Interpreter<T> {
    /// Apply a binary operator to two already evaluated operands
    pub(crate) fn evaluate_binary_op(
        &self,
        op: BinOp,
        left: Value,
        right: Value,
        line: usize,
    ) -> Result<Value, RuntimeError> {
        use BinOp::*;

        let result = match (op, &left, &right) {
            (Add, Value::Number(a), Value::Number(b)) => Value::Number(a + b),
            (Add, _, _) if left.is_text() || right.is_text() => {
                Value::Text(format!("{}{}", left, right))
            }

            (Sub, Value::Number(a), Value::Number(b)) => Value::Number(a - b),
            (Mul, Value::Number(a), Value::Number(b)) => Value::Number(a * b),
            (Div, Value::Number(_), Value::Number(b)) if *b == 0.0 => {
                return Err(RuntimeError::new(RuntimeErrorKind::DivisionByZero, line));
            }
            (Div, Value::Number(a), Value::Number(b)) => Value::Number(a / b),

            (Lt, Value::Number(a), Value::Number(b)) => Value::Boolean(a < b),
            (Le, Value::Number(a), Value::Number(b)) => Value::Boolean(a <= b),
            (Gt, Value::Number(a), Value::Number(b)) => Value::Boolean(a > b),
            (Ge, Value::Number(a), Value::Number(b)) => Value::Boolean(a >= b),

            (Eq, Value::Number(a), Value::Number(b)) => Value::Boolean(a == b),
            (Eq, Value::Text(a), Value::Text(b)) => Value::Boolean(a == b),
            (Ne, Value::Number(a), Value::Number(b)) => Value::Boolean(a != b),
            (Ne, Value::Text(a), Value::Text(b)) => Value::Boolean(a != b),

            (And, Value::Boolean(a), Value::Boolean(b)) => Value::Boolean(*a && *b),
            (Or, Value::Boolean(a), Value::Boolean(b)) => Value::Boolean(*a || *b),

            _ => {
                return Err(RuntimeError::new(
                    RuntimeErrorKind::BinaryTypeMismatch {
                        op,
                        left: left.type_name(),
                        right: right.type_name(),
                    },
                    line,
                ));
            }
        };

        Ok(result)
    }
}
