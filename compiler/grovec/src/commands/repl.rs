//! The read-eval-print loop and the script runner.
//!
//! Both feed lines to one [`Session`]. Blank lines are skipped, results are
//! printed with `Display`, statements print nothing, and a failing line is
//! reported without stopping the loop. `quit`/`exit` or end of input ends it.

use std::io::{self, BufRead, Write};

use grove_eval::Completion;

use crate::Session;

pub const BANNER: &str = "Welcome to the Grove Interpreter!";
pub const HINT: &str = "Type `quit` or `exit` to leave.";
pub const PROMPT: &str = "> ";
pub const FAREWELL: &str = "Goodbye and thank you for using Grove!";

/// How lines are presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Banner, prompt before each line, farewell at the end.
    Interactive,
    /// Output only: results and errors.
    Script,
}

/// Summary of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Non-blank lines submitted to the session.
    pub lines: usize,
    /// Lines that failed to parse or evaluate.
    pub errors: usize,
    /// Whether the run ended on `quit`/`exit` rather than end of input.
    pub terminated: bool,
}

/// Drive `session` with every line of `input`, writing to `out`.
pub fn run_lines<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    mode: Mode,
) -> io::Result<Outcome> {
    let mut outcome = Outcome::default();
    if mode == Mode::Interactive {
        writeln!(out, "{BANNER}")?;
        writeln!(out, "{HINT}")?;
    }

    let mut lines = input.lines();
    loop {
        if mode == Mode::Interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            if mode == Mode::Interactive {
                writeln!(out)?;
            }
            break;
        };
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        outcome.lines += 1;
        match session.evaluate_line(text) {
            Ok(Completion::Value(value)) => writeln!(out, "{value}")?,
            Ok(Completion::Unit) => {}
            Ok(Completion::Exit) => {
                outcome.terminated = true;
                break;
            }
            Err(err) => {
                outcome.errors += 1;
                tracing::debug!(phase = err.phase(), line = text, "line failed");
                writeln!(out, "Error {} {text}", err.phase())?;
                writeln!(out, "{err}")?;
            }
        }
    }

    if mode == Mode::Interactive {
        writeln!(out, "{FAREWELL}")?;
    }
    Ok(outcome)
}

/// Interactive loop on stdin/stdout.
pub fn run_repl(session: &mut Session) -> io::Result<Outcome> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_lines(session, stdin.lock(), &mut stdout, Mode::Interactive)
}

/// Execute a script file line by line.
///
/// An unreadable script is an error carrying the path; nothing is run.
pub fn run_file(session: &mut Session, path: &str) -> io::Result<Outcome> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("cannot read script '{path}': {e}")))?;
    let mut stdout = io::stdout();
    run_lines(session, content.as_bytes(), &mut stdout, Mode::Script)
}
