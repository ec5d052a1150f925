//! Runtime value representation
//!
//! This module defines the [`Value`] enum, the single tagged union used for
//! literals, expression results, and variable storage.
//!
//! # Value Types
//!
//! - [`Value::Text`]: an owned UTF-8 string
//! - [`Value::Number`]: a 64-bit float
//! - [`Value::Boolean`]: `TRUE` / `FALSE`
//!
//! There are no implicit conversions between tags. Operators decide for
//! themselves which combinations they accept (see `interpreter::ops`).
//!
//! # Stringify
//!
//! The [`fmt::Display`] impl is the language's stringify rule, used by `+`
//! concatenation, `PRINT`, `INPUT` prompts and `TOSTR`:
//!
//! ```text
//! Text("hi")      → hi
//! Boolean(true)   → TRUE
//! Number(3.0)     → 3
//! Number(3.14159) → 3.14
//! ```

use std::fmt;

/// Runtime values in the interpreter
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Boolean(bool),
}

impl Value {
    /// Name of the value's type as it appears in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "string",
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
        }
    }

    /// Get the number, returns None if not a Number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean, returns None if not a Boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the text, returns None if not a Text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Parse text the way `TONUM` does.
    ///
    /// Surrounding whitespace is ignored. Infinite and NaN results are
    /// rejected along with anything that is not a float literal.
    pub fn parse_number(text: &str) -> Option<f64> {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Boolean(true) => f.write_str("TRUE"),
            Value::Boolean(false) => f.write_str("FALSE"),
            // Whole numbers print without a fractional part
            Value::Number(n) if n.fract() == 0.0 => write!(f, "{:.0}", n),
            Value::Number(n) => write!(f, "{:.2}", n),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}
