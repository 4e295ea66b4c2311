//! Shared helpers.

use grovec::{Completion, GroveError, Session, Value};

/// Evaluate lines in order, panicking on the first failure.
pub fn session_with(lines: &[&str]) -> Session {
    let mut session = Session::new();
    for line in lines {
        if let Err(err) = session.evaluate_line(line) {
            panic!("setup line `{line}` failed: {err}");
        }
    }
    session
}

/// Evaluate an expression line and unwrap its value.
pub fn value(session: &mut Session, line: &str) -> Value {
    match session.evaluate_line(line) {
        Ok(Completion::Value(value)) => value,
        other => panic!("`{line}` should produce a value, got {other:?}"),
    }
}

/// Evaluate a line that must fail.
pub fn error(session: &mut Session, line: &str) -> GroveError {
    session
        .evaluate_line(line)
        .expect_err("line should have failed")
}
