//! Grove - a line-oriented toy language.
//!
//! This crate ties the pipeline together: `grove_lexer` splits a line,
//! `grove_parse` builds a tree, `grove_eval` runs it. [`Session`] is the single
//! entry point embedders need; the `grove` binary wraps it in a REPL.

pub mod commands;
mod session;
mod tracing_setup;

pub use grove_eval::{Completion, EvalError, Value};
pub use grove_parse::{ParseError, ParseErrorKind};
pub use session::{GroveError, Session};
pub use tracing_setup::init_tracing;
