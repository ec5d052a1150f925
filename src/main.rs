// basicpp: run a BASIC++ script from the command line

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use basicpp::interpreter::engine::Interpreter;
use basicpp::terminal::StdTerminal;

const USAGE: &str = "Usage: basicpp <input_file>";

/// Exit status when the command line cannot be parsed
const EXIT_USAGE: i32 = 10;
/// Exit status when the script file cannot be read
const EXIT_UNREADABLE_INPUT: i32 = 9;

#[derive(Debug, Parser)]
#[command(name = "basicpp", version, about = "Run a BASIC++ script")]
struct Cli {
    /// Path to the script to run
    input_file: PathBuf,

    /// Seed for RND, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            println!("{}", USAGE);
            process::exit(EXIT_USAGE);
        }
        Err(err) => {
            let _ = err.print();
            process::exit(0);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(io::stderr)
        .init();

    let source = match fs::read_to_string(&cli.input_file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!(
                "Error: Failed to open input file '{}': {}",
                cli.input_file.display(),
                e
            );
            process::exit(EXIT_UNREADABLE_INPUT);
        }
    };
    debug!(path = %cli.input_file.display(), bytes = source.len(), "loaded script");

    let terminal = StdTerminal::new();
    let mut interpreter = match cli.seed {
        Some(seed) => Interpreter::with_seed(terminal, seed),
        None => Interpreter::new(terminal),
    };

    if let Err(err) = basicpp::run_source(&source, &mut interpreter) {
        report(&err.to_string());
        process::exit(err.exit_code());
    }
}

/// Print a diagnostic line to stdout, in red when stdout is a terminal
fn report(message: &str) {
    if io::stdout().is_tty() {
        println!("{}", message.red());
    } else {
        println!("{}", message);
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "basicpp=warn",
        1 => "basicpp=debug",
        _ => "basicpp=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "basicpp=warn");
        assert_eq!(directive_for_verbosity(1), "basicpp=debug");
        assert_eq!(directive_for_verbosity(2), "basicpp=trace");
        assert_eq!(directive_for_verbosity(9), "basicpp=trace");
    }

    #[test]
    fn cli_parses_seed_and_verbosity() {
        let cli = Cli::try_parse_from(["basicpp", "script.bas", "--seed", "7", "-vv"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("script.bas"));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_requires_input_file() {
        let err = Cli::try_parse_from(["basicpp"]).unwrap_err();
        assert!(err.use_stderr());
    }
}
