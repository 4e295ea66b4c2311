//! Parse tree nodes.
//!
//! One variant per grammar production. The parser guarantees every node it
//! builds satisfies that production's shape, recursively; evaluation may
//! still fail.

use std::fmt;

use crate::keyword::Keyword;
use crate::name::Name;

/// A complete line: statement or expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Stmt(Stmt),
    Expr(Expr),
}

/// Statements change interpreter state and produce no value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    /// `set <name> = <expr>`
    Assign { target: Name, value: Expr },
    /// `import <module>`
    Import { module: Name },
    /// `quit` or `exit`
    Terminate(TerminateKind),
}

/// Which spelling a terminate statement used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminateKind {
    Quit,
    Exit,
}

impl TerminateKind {
    pub fn keyword(self) -> Keyword {
        match self {
            TerminateKind::Quit => Keyword::Quit,
            TerminateKind::Exit => Keyword::Exit,
        }
    }
}

/// Binary arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
        }
    }

    pub fn from_symbol(token: &str) -> Option<BinaryOp> {
        match token {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    /// Production name used in diagnostics.
    pub fn production(self) -> &'static str {
        match self {
            BinaryOp::Add => "addition",
            BinaryOp::Sub => "subtraction",
        }
    }
}

/// Expressions evaluate to a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// Non-negative integer literal.
    Number(i64),
    /// String literal, quotes already stripped.
    Str(String),
    /// Variable lookup.
    Name(Name),
    /// `<op> ( <left> ) ( <right> )`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `new <path>`
    ObjectRef(ObjectPath),
    /// `call ( <receiver> <method> <args>* )`
    Call(CallExpr),
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns `true` if this expression renders as a single token.
    ///
    /// Call arguments that are not atoms must be parenthesized.
    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Number(_) | Expr::Str(_) | Expr::Name(_))
    }
}

/// Dotted path referencing a host object, e.g. `collections.Counter`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectPath {
    segments: Vec<Name>,
}

impl ObjectPath {
    /// Build a path. Returns `None` for an empty segment list.
    pub fn new(segments: Vec<Name>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(ObjectPath { segments })
        }
    }

    pub fn root(&self) -> &Name {
        &self.segments[0]
    }

    /// Segments after the root.
    pub fn rest(&self) -> &[Name] {
        &self.segments[1..]
    }

    pub fn segments(&self) -> &[Name] {
        &self.segments
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Method invocation on a bound variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpr {
    pub receiver: Name,
    /// Method name as written; resolved only at evaluation time.
    pub method: String,
    pub args: Vec<Expr>,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Stmt(stmt) => write!(f, "{stmt}"),
            Command::Expr(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Assign { target, value } => write!(f, "{} {target} = {value}", Keyword::Set),
            Stmt::Import { module } => write!(f, "{} {module}", Keyword::Import),
            Stmt::Terminate(kind) => write!(f, "{}", kind.keyword()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Str(s) => write!(f, "\"{s}\""),
            Expr::Name(name) => write!(f, "{name}"),
            Expr::Binary { op, left, right } => {
                write!(f, "{} ( {left} ) ( {right} )", op.as_symbol())
            }
            Expr::ObjectRef(path) => write!(f, "{} {path}", Keyword::New),
            Expr::Call(call) => {
                write!(f, "{} ( {} {}", Keyword::Call, call.receiver, call.method)?;
                for arg in &call.args {
                    if arg.is_atom() {
                        write!(f, " {arg}")?;
                    } else {
                        write!(f, " ( {arg} )")?;
                    }
                }
                f.write_str(" )")
            }
        }
    }
}
