//! Global variable table
//!
//! The language has no nested scopes: `IF`, `WHILE` and blocks all read and
//! write the same [`Environment`]. A variable comes into existence on its
//! first assignment and lives until the interpreter is dropped.

use super::value::Value;
use rustc_hash::FxHashMap;

/// Name → value mapping shared by the whole program.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Look up a variable. Names are case-sensitive.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Create `name` or overwrite its current value.
    pub fn assign(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
