// Console seam for PRINT and INPUT

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Where the interpreter sends `PRINT` output and reads `INPUT` lines from.
///
/// `line` is the source line of the statement doing the I/O. The real console
/// ignores it; [`MockTerminal`] records it next to the text.
pub trait Terminal {
    /// Write `text` as-is, without adding a terminator.
    fn print(&mut self, text: &str, line: usize) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Read one line with its terminator stripped, or `None` at end of input.
    fn read_line(&mut self, line: usize) -> io::Result<Option<String>>;
}

/// Process stdin/stdout
pub struct StdTerminal {
    stdout: io::Stdout,
    stdin: io::Stdin,
}

impl StdTerminal {
    pub fn new() -> Self {
        StdTerminal {
            stdout: io::stdout(),
            stdin: io::stdin(),
        }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for StdTerminal {
    fn print(&mut self, text: &str, _line: usize) -> io::Result<()> {
        self.stdout.lock().write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    fn read_line(&mut self, _line: usize) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        if self.stdin.lock().read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_terminator(buffer)))
    }
}

fn strip_line_terminator(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// In-memory terminal for tests: captures output and replays queued input
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    pub lines: Vec<TerminalLine>,
    input: VecDeque<String>,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal::default()
    }

    /// A terminal whose `INPUT` statements receive `lines` in order.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTerminal {
            lines: Vec::new(),
            input: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        let mut result: Vec<String> = self.output_text().split('\n').map(|s| s.to_string()).collect();
        // Remove trailing empty string if text ended with newline
        if result.last().is_some_and(|s| s.is_empty()) {
            result.pop();
        }
        result
    }

    /// Everything printed so far, concatenated.
    pub fn output_text(&self) -> String {
        self.lines.iter().map(|tl| tl.text.as_str()).collect()
    }
}

impl Terminal for MockTerminal {
    fn print(&mut self, text: &str, line: usize) -> io::Result<()> {
        if let Some(last) = self.lines.last_mut() {
            if last.line == line {
                last.text.push_str(text);
                return Ok(());
            }
        }
        self.lines.push(TerminalLine {
            text: text.to_string(),
            line,
        });
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn read_line(&mut self, _line: usize) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}

/// A chunk of terminal output with the source line that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalLine {
    pub text: String,
    pub line: usize,
}
