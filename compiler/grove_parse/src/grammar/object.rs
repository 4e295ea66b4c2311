//! `new <path>` references to host objects.
//!
//! Only the shape of the path is checked here. Whether the path resolves
//! depends on the environment at evaluation time.

use grove_ir::{is_identifier, Expr, Keyword, Name, ObjectPath};

use crate::error::{ParseError, ParseResult};
use crate::Parser;

const PRODUCTION: &str = "object reference";

pub(crate) fn object_ref(_: &Parser, tokens: &[&str]) -> ParseResult<Expr> {
    let [keyword, path] = tokens else {
        return Err(ParseError::malformed(
            PRODUCTION,
            format!("expected 2 tokens, found {}", tokens.len()),
            tokens,
        ));
    };
    if !Keyword::New.matches(keyword) {
        return Err(ParseError::malformed(PRODUCTION, "must begin with `new`", tokens));
    }

    let mut segments = Vec::new();
    for segment in path.split('.') {
        if !is_identifier(segment) {
            return Err(ParseError::malformed(
                PRODUCTION,
                format!("`{segment}` is not a valid path segment"),
                tokens,
            ));
        }
        segments.push(Name::new(segment));
    }

    ObjectPath::new(segments)
        .map(Expr::ObjectRef)
        .ok_or_else(|| ParseError::malformed(PRODUCTION, "empty path", tokens))
}
