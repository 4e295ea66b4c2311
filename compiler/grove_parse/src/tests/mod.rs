//! Parser tests.
//!
//! - `productions`: token shapes accepted and rejected by each production
//! - `dispatch`: fallthrough order, aggregate errors, registry extension
//! - `properties`: generated nesting and round-trip checks

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod properties;

use crate::{ParseErrorKind, ParseResult, Parser};
use grove_ir::{Command, Expr};

fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

fn parse_line(line: &str) -> ParseResult<Command> {
    Parser::new().parse_command(&tokens(line))
}

fn parse_expr(line: &str) -> ParseResult<Expr> {
    Parser::new().parse_expression(&tokens(line))
}

fn kind_of<T: std::fmt::Debug>(result: ParseResult<T>) -> ParseErrorKind {
    result.expect_err("expected a parse error").kind().clone()
}
