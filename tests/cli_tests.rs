// Exit statuses and console lines of the basicpp binary

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn basicpp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_basicpp"))
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to launch basicpp")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_missing_argument_prints_usage() {
    let output = basicpp(&[]);

    assert_eq!(output.status.code(), Some(10));
    assert_eq!(stdout(&output), "Usage: basicpp <input_file>\n");
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let output = basicpp(&["demos/arithmetic.bas", "--bogus"]);

    assert_eq!(output.status.code(), Some(10));
    assert!(stdout(&output).starts_with("Usage: basicpp"));
}

#[test]
fn test_unreadable_file() {
    let output = basicpp(&["demos/does_not_exist.bas"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(9));
    assert!(
        stderr.contains("Error: Failed to open input file 'demos/does_not_exist.bas'"),
        "stderr was: {}",
        stderr
    );
}

#[test]
fn test_demo_runs_to_completion() {
    let output = basicpp(&["demos/arithmetic.bas", "--seed", "1"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Total: 55"));
}

#[test]
fn test_parse_error_status_and_line() {
    let path: PathBuf = std::env::temp_dir().join(format!("basicpp_cli_{}.bas", std::process::id()));
    fs::write(&path, "PRINT 1\nfoo\n").unwrap();

    let output = basicpp(&[path.to_str().unwrap()]);
    fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(12));
    assert_eq!(
        stdout(&output),
        "[line 2] (at 'foo') Parsing error: Statement expected.\n"
    );
}
