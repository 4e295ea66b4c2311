//! Evaluator tests driven through the parser.
//!
//! - `statements`: assignment, import, terminate
//! - `expressions`: literals, names, arithmetic
//! - `host_calls`: call dispatch order, builtin methods, object references
//! - `properties`: generated arithmetic laws

#![allow(clippy::unwrap_used, clippy::expect_used)]


use crate::{Completion, EvalResult, Interpreter, Value};

/// Parse `line` (which must be valid) and evaluate it.
fn run(interp: &mut Interpreter, line: &str) -> EvalResult<Completion> {
    let command = grove_parse::parse(line).expect("test input should parse");
    interp.eval_command(&command)
}

/// Evaluate an expression line and return its value.
fn value_of(interp: &mut Interpreter, line: &str) -> EvalResult<Value> {
    run(interp, line).map(|completion| match completion {
        Completion::Value(value) => value,
        other => panic!("`{line}` should produce a value, got {other:?}"),
    })
}

/// Evaluate a sequence of statement lines, failing the test on any error.
fn setup(interp: &mut Interpreter, lines: &[&str]) {
    for line in lines {
        assert_eq!(run(interp, line), Ok(Completion::Unit), "setup line `{line}`");
    }
}
