// Execution engine for the BASIC++ interpreter

use crate::interpreter::errors::{RuntimeError, RuntimeErrorKind};
use crate::memory::environment::Environment;
use crate::parser::ast::*;
use crate::terminal::Terminal;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

/// How a statement finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlFlow {
    Normal,
    /// `BREAK` is unwinding to the nearest `WHILE`
    Break,
    /// `CONTINUE` is unwinding to the nearest `WHILE`
    Continue,
}

/// The main interpreter that executes a BASIC++ program
pub struct Interpreter<T: Terminal> {
    /// Global variables
    pub(crate) environment: Environment,

    /// Console used by PRINT and INPUT
    pub(crate) terminal: T,

    /// Generator behind RND
    pub(crate) rng: StdRng,

    /// Line of the statement being executed
    pub(crate) current_line: usize,
}

impl<T: Terminal> Interpreter<T> {
    /// Create an interpreter whose RND generator is seeded from OS entropy
    pub fn new(terminal: T) -> Self {
        Self::with_rng(terminal, StdRng::from_entropy())
    }

    /// Create an interpreter with a fixed RND seed, for reproducible runs
    pub fn with_seed(terminal: T, seed: u64) -> Self {
        Self::with_rng(terminal, StdRng::seed_from_u64(seed))
    }

    fn with_rng(terminal: T, rng: StdRng) -> Self {
        Interpreter {
            environment: Environment::new(),
            terminal,
            rng,
            current_line: 0,
        }
    }

    /// Execute the program's top-level statements in order.
    ///
    /// The first error aborts the run. A `BREAK` or `CONTINUE` that is not
    /// inside a `WHILE` fails at the line of the top-level statement it
    /// escaped from.
    pub fn run(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for stmt in &program.statements {
            let flow = self.execute_statement(stmt).inspect_err(|err| {
                debug!(line = err.line, error = %err.kind, "execution aborted");
            })?;

            let kind = match flow {
                ControlFlow::Normal => continue,
                ControlFlow::Break => RuntimeErrorKind::BreakOutsideLoop,
                ControlFlow::Continue => RuntimeErrorKind::ContinueOutsideLoop,
            };
            debug!(line = stmt.line(), error = %kind, "loop jump escaped to top level");
            return Err(RuntimeError::new(kind, stmt.line()));
        }

        self.terminal
            .flush()
            .map_err(|e| RuntimeError::new(RuntimeErrorKind::Io(e.to_string()), self.current_line))
    }

    /// Execute a single statement
    pub(crate) fn execute_statement(&mut self, stmt: &Stmt) -> Result<ControlFlow, RuntimeError> {
        self.current_line = stmt.line();
        trace!(statement = stmt.keyword(), line = self.current_line, "execute");

        match stmt {
            Stmt::Print { expr, line } => {
                self.execute_print(expr, *line)?;
                Ok(ControlFlow::Normal)
            }

            Stmt::Input {
                prompt,
                target,
                line,
            } => {
                self.execute_input(prompt, target, *line)?;
                Ok(ControlFlow::Normal)
            }

            Stmt::Let { expr, target, .. } => {
                let value = self.evaluate_expr(expr)?;
                self.environment.assign(target, value);
                Ok(ControlFlow::Normal)
            }

            Stmt::ToNum {
                source,
                destination,
                line,
            } => {
                self.execute_to_num(source, destination.as_deref(), *line)?;
                Ok(ControlFlow::Normal)
            }

            Stmt::ToStr {
                source,
                destination,
                line,
            } => {
                self.execute_to_str(source, destination.as_deref(), *line)?;
                Ok(ControlFlow::Normal)
            }

            Stmt::Rnd {
                destination,
                low,
                high,
                line,
            } => {
                self.execute_rnd(destination, low, high, *line)?;
                Ok(ControlFlow::Normal)
            }

            Stmt::Block { statements, .. } => self.execute_block(statements),

            Stmt::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => self.execute_if(condition, then_branch, else_branch.as_deref()),

            Stmt::While {
                condition, body, ..
            } => self.execute_while(condition, body),

            Stmt::Break { .. } => Ok(ControlFlow::Break),

            Stmt::Continue { .. } => Ok(ControlFlow::Continue),
        }
    }

    /// Get the global variables
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Get the terminal
    pub fn terminal(&self) -> &T {
        &self.terminal
    }
}
