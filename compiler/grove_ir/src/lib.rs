//! Grove IR - parse tree types for the Grove language.
//!
//! Every line of Grove source parses into exactly one [`Command`]: either a
//! [`Stmt`] (assignment, import, termination) or an [`Expr`]. Nodes own their
//! children directly and are never mutated after construction, so equality is
//! purely structural.
//!
//! # Canonical Form
//!
//! `Display` on every node renders the canonical source text for that node.
//! Re-tokenizing and re-parsing the canonical form yields an equal tree.

mod keyword;
mod name;
mod node;
mod stack;

pub use keyword::{is_reserved, Keyword, DELIMITERS, OPERATORS};
pub use name::{is_identifier, Name};
pub use node::{BinaryOp, CallExpr, Command, Expr, ObjectPath, Stmt, TerminateKind};
pub use stack::ensure_sufficient_stack;
