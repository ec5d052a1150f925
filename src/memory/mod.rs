//! Memory model for the interpreter
//!
//! This module provides the core storage abstractions:
//! - [`value`]: Runtime value representation (Text, Number, Boolean)
//! - [`environment`]: The single global variable table
//!
//! # Scoping
//!
//! There is exactly one [`environment::Environment`] per interpreter run.
//! Blocks, `IF` branches and `WHILE` bodies never introduce a scope, so a
//! variable assigned inside a loop is visible after it.

pub mod environment;
pub mod value;
