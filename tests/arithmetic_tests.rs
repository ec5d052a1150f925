use basicpp::interpreter::engine::Interpreter;
use basicpp::memory::value::Value;
use basicpp::terminal::MockTerminal;
use std::fs;
use std::path::Path;

#[test]
fn test_arithmetic_demo() {
    let path = Path::new("demos/arithmetic.bas");
    let source = fs::read_to_string(path).expect("Failed to read demo file");

    let mut interpreter = Interpreter::with_seed(MockTerminal::new(), 0);
    basicpp::run_source(&source, &mut interpreter).expect("Execution failed");

    let output = interpreter.terminal().get_output();
    println!("Interpreter output:\n{}", output.join("\n"));

    assert_eq!(
        output,
        vec![
            "Sum: 9",
            "Difference: 5",
            "Product: 14",
            "Quotient: 3.50",
            "Negated: -7",
            "Third: 0.33",
            "Converted: 25",
            "Flag: TRUE",
            "Total: 55",
        ]
    );
    assert_eq!(interpreter.environment().get("value"), Some(&Value::Number(12.5)));
    assert_eq!(interpreter.environment().get("text"), Some(&Value::from("12.5")));
}

#[test]
fn test_precedence_with_grouping() {
    let mut interpreter = Interpreter::with_seed(MockTerminal::new(), 0);
    basicpp::run_source("PRINT (1 + 2) * 3\nPRINT 1 + 2 * 3", &mut interpreter).expect("Execution failed");

    assert_eq!(interpreter.terminal().get_output(), vec!["9", "7"]);
}

#[test]
fn test_number_formatting() {
    let source = "PRINT 3.0\nPRINT 3.14159\nPRINT 10 / 4\nPRINT 0 - 0.5\nPRINT 2 * 0.5";
    let mut interpreter = Interpreter::with_seed(MockTerminal::new(), 0);
    basicpp::run_source(source, &mut interpreter).expect("Execution failed");

    assert_eq!(
        interpreter.terminal().get_output(),
        vec!["3", "3.14", "2.50", "-0.50", "1"]
    );
}

#[test]
fn test_division_by_zero() {
    let mut interpreter = Interpreter::with_seed(MockTerminal::new(), 0);
    let err = basicpp::run_source("LET z = 0\nPRINT 1 / z", &mut interpreter).unwrap_err();

    assert_eq!(err.exit_code(), 13);
    assert_eq!(err.to_string(), "[line 2] Interpreter error: DivisionByZero");
}
