//! Property-based tests for the BASIC++ lexer.
//!
//! These tests use `proptest` to verify lexer invariants over generated inputs:
//!
//! 1. **Lexer never panics**: arbitrary string input yields tokens or a `LexError`
//! 2. **EOF is always last**: a successful scan ends with exactly one EOF
//! 3. **Lines never decrease**: token line numbers are monotonic
//! 4. **Numeric literals round-trip**: `LET x = <digits>` stores the parsed float
//! 5. **Valid fragments produce no errors**: known-valid inputs lex cleanly

use proptest::prelude::*;

use super::lexer::{Lexer, TokenKind};
use crate::interpreter::engine::Interpreter;
use crate::memory::value::Value;
use crate::terminal::MockTerminal;

/// Multi-token valid fragments that should lex cleanly.
const VALID_FRAGMENTS: &[&str] = &[
    "LET x = 1",
    "PRINT \"hello\" + name",
    "INPUT \"Age? \", age",
    "TONUM a, b",
    "TOSTR a",
    "RND r, 1, 10",
    "IF a <= b AND NOT c THEN PRINT 1 ELSE PRINT 2 END",
    "WHILE i <> 10 DO LET i = i + 1 END",
    "rem a comment",
    "x >= (3.5 / -2) OR true",
];

fn valid_fragment() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_FRAGMENTS).prop_map(std::string::ToString::to_string)
}

/// Default is 256 cases; override via `PROPTEST_CASES` env var for nightly runs.
fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(256),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property 1: Lexer never panics on arbitrary string input.
    #[test]
    fn lexer_never_panics(input in "\\PC{0,500}") {
        let _result = Lexer::new(&input).tokenize();
    }

    /// Property 2: A successful scan ends with exactly one EOF.
    #[test]
    fn eof_always_last(input in "\\PC{0,500}") {
        if let Ok(tokens) = Lexer::new(&input).tokenize() {
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            let eof_count = tokens.iter().filter(|t| t.is_eof()).count();
            prop_assert_eq!(eof_count, 1, "input {:?}", input);
        }
    }

    /// Property 3: Line numbers never decrease along the token stream.
    #[test]
    fn lines_are_monotonic(input in "[a-z0-9 \n+*()<>=\"]{0,200}") {
        if let Ok(tokens) = Lexer::new(&input).tokenize() {
            for window in tokens.windows(2) {
                prop_assert!(window[0].line <= window[1].line, "input {:?}", input);
            }
        }
    }

    /// Property 4: A numeric literal assigned to a variable reads back as the same float.
    #[test]
    fn numeric_literal_round_trip(literal in "[0-9]{1,10}(\\.[0-9]{1,6})?") {
        let source = format!("LET x = {}", literal);
        let program = crate::parse_source(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;

        let mut interpreter = Interpreter::new(MockTerminal::new());
        interpreter
            .run(&program)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let expected: f64 = literal.parse().map_err(|_| TestCaseError::reject("unparsable"))?;
        prop_assert_eq!(interpreter.environment().get("x"), Some(&Value::Number(expected)));
    }

    /// Property 5: Known-valid fragments always lex cleanly.
    #[test]
    fn valid_fragments_lex_cleanly(fragment in valid_fragment()) {
        let result = Lexer::new(&fragment).tokenize();
        prop_assert!(result.is_ok(), "fragment {:?} failed: {:?}", fragment, result);
    }

    /// Stringify leaves text untouched, so converting twice changes nothing.
    #[test]
    fn stringify_is_idempotent_on_text(text in "\\PC{0,50}") {
        let once = Value::Text(text.clone()).to_string();
        let twice = Value::Text(once.clone()).to_string();
        prop_assert_eq!(&once, &text);
        prop_assert_eq!(once, twice);
    }
}
