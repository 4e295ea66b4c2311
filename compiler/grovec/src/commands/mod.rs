//! Command handlers for the `grove` CLI.
//!
//! Each submodule implements one command. Handlers that read or print take
//! their streams as parameters so tests can drive them in memory.

mod debug;
mod repl;

pub use debug::{lex_line, parse_line};
pub use repl::{run_file, run_lines, run_repl, Mode, Outcome, BANNER, FAREWELL, HINT, PROMPT};
