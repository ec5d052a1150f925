// AST (Abstract Syntax Tree) definitions for the BASIC++ interpreter

use crate::memory::value::Value;
use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Eq => "==",
            BinOp::Ne => "<>",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::And => "AND",
            BinOp::Or => "OR",
        };
        f.write_str(symbol)
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg, // -x
    Not, // NOT x
}

impl fmt::Display for UnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnOp::Neg => f.write_str("-"),
            UnOp::Not => f.write_str("NOT"),
        }
    }
}

/// Expression nodes. `line` is the line of the token consumed last when the
/// node was built.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal {
        value: Value,
        line: usize,
    },
    Grouping {
        inner: Box<Expr>,
        line: usize,
    },
    Unary {
        op: UnOp,
        operand: Box<Expr>,
        line: usize,
    },
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
        line: usize,
    },
    Variable {
        name: String,
        line: usize,
    },
}

impl Expr {
    /// Get the source line of this node
    pub fn line(&self) -> usize {
        match self {
            Expr::Literal { line, .. }
            | Expr::Grouping { line, .. }
            | Expr::Unary { line, .. }
            | Expr::Binary { line, .. }
            | Expr::Variable { line, .. } => *line,
        }
    }
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Print {
        expr: Expr,
        line: usize,
    },
    Input {
        prompt: Expr,
        target: String,
        line: usize,
    },
    Let {
        expr: Expr,
        target: String,
        line: usize,
    },
    /// `TONUM src [, dst]`; the result goes back into `source` without `destination`
    ToNum {
        source: String,
        destination: Option<String>,
        line: usize,
    },
    ToStr {
        source: String,
        destination: Option<String>,
        line: usize,
    },
    Rnd {
        destination: String,
        low: Expr,
        high: Expr,
        line: usize,
    },
    Block {
        statements: Vec<Stmt>,
        line: usize,
    },
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
        line: usize,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
        line: usize,
    },
    Break {
        line: usize,
    },
    Continue {
        line: usize,
    },
}

impl Stmt {
    /// Get the source line of this node
    pub fn line(&self) -> usize {
        match self {
            Stmt::Print { line, .. }
            | Stmt::Input { line, .. }
            | Stmt::Let { line, .. }
            | Stmt::ToNum { line, .. }
            | Stmt::ToStr { line, .. }
            | Stmt::Rnd { line, .. }
            | Stmt::Block { line, .. }
            | Stmt::If { line, .. }
            | Stmt::While { line, .. }
            | Stmt::Break { line }
            | Stmt::Continue { line } => *line,
        }
    }

    /// The keyword that introduces this statement, for logging.
    pub fn keyword(&self) -> &'static str {
        match self {
            Stmt::Print { .. } => "PRINT",
            Stmt::Input { .. } => "INPUT",
            Stmt::Let { .. } => "LET",
            Stmt::ToNum { .. } => "TONUM",
            Stmt::ToStr { .. } => "TOSTR",
            Stmt::Rnd { .. } => "RND",
            Stmt::Block { .. } => "block",
            Stmt::If { .. } => "IF",
            Stmt::While { .. } => "WHILE",
            Stmt::Break { .. } => "BREAK",
            Stmt::Continue { .. } => "CONTINUE",
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
