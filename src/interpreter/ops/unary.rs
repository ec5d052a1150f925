//! Unary operator evaluation

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::{RuntimeError, RuntimeErrorKind};
use crate::memory::value::Value;
use crate::parser::ast::UnOp;
use crate::terminal::Terminal;

impl<T: Terminal> Interpreter<T> {
    /// Apply a unary operator to an already evaluated operand
    pub(crate) fn evaluate_unary_op(
        &self,
        op: UnOp,
        operand: Value,
        line: usize,
    ) -> Result<Value, RuntimeError> {
        match (op, &operand) {
            (UnOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
            (UnOp::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
            _ => Err(RuntimeError::new(
                RuntimeErrorKind::UnaryTypeMismatch {
                    op,
                    operand: operand.type_name(),
                },
                line,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::MockTerminal;

    fn interpreter() -> Interpreter<MockTerminal> {
        Interpreter::with_seed(MockTerminal::new(), 0)
    }

    #[test]
    fn test_negate_number() {
        let result = interpreter().evaluate_unary_op(UnOp::Neg, Value::Number(2.5), 1);
        assert_eq!(result, Ok(Value::Number(-2.5)));
    }

    #[test]
    fn test_not_boolean() {
        let result = interpreter().evaluate_unary_op(UnOp::Not, Value::Boolean(false), 1);
        assert_eq!(result, Ok(Value::Boolean(true)));
    }

    #[test]
    fn test_negate_text_fails() {
        let err = interpreter()
            .evaluate_unary_op(UnOp::Neg, Value::from("a"), 3)
            .unwrap_err();

        assert_eq!(err.line, 3);
        assert_eq!(err.message(), "Unary '-' is not allowed on 'string' type.");
    }

    #[test]
    fn test_not_number_fails() {
        let err = interpreter()
            .evaluate_unary_op(UnOp::Not, Value::Number(1.0), 1)
            .unwrap_err();

        assert_eq!(
            err.kind,
            RuntimeErrorKind::UnaryTypeMismatch {
                op: UnOp::Not,
                operand: "number"
            }
        );
    }
}
