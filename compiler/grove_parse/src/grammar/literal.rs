//! Single-token expressions.

use grove_ir::{is_identifier, is_reserved, Expr, Name};

use crate::error::{ParseError, ParseResult};
use crate::Parser;

const QUOTE: char = '"';

fn single<'a, 'src>(production: &'static str, tokens: &'a [&'src str]) -> ParseResult<&'src str> {
    match tokens {
        [token] => Ok(*token),
        _ => Err(ParseError::malformed(
            production,
            format!("expected 1 token, found {}", tokens.len()),
            tokens,
        )),
    }
}

pub(crate) fn number(_: &Parser, tokens: &[&str]) -> ParseResult<Expr> {
    let token = single("number", tokens)?;
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::malformed("number", "numbers contain only digits", tokens));
    }
    token
        .parse::<i64>()
        .map(Expr::Number)
        .map_err(|_| ParseError::malformed("number", "integer literal out of range", tokens))
}

/// `"text"` with no interior quote; the quotes are stripped.
pub(crate) fn string(_: &Parser, tokens: &[&str]) -> ParseResult<Expr> {
    let token = single("string", tokens)?;
    let inner = token
        .strip_prefix(QUOTE)
        .and_then(|rest| rest.strip_suffix(QUOTE))
        .ok_or_else(|| ParseError::malformed("string", "must be wrapped in double quotes", tokens))?;
    if inner.contains(QUOTE) {
        return Err(ParseError::malformed("string", "unexpected quote inside string", tokens));
    }
    Ok(Expr::Str(inner.to_owned()))
}

pub(crate) fn name(_: &Parser, tokens: &[&str]) -> ParseResult<Expr> {
    let token = single("name", tokens)?;
    bindable_name("name", token, tokens).map(Expr::Name)
}

/// Validate `token` as an identifier that is not a reserved word.
pub(crate) fn bindable_name(
    production: &'static str,
    token: &str,
    tokens: &[&str],
) -> ParseResult<Name> {
    if !is_identifier(token) {
        return Err(ParseError::malformed(
            production,
            format!("`{token}` is not an identifier"),
            tokens,
        ));
    }
    if is_reserved(token) {
        return Err(ParseError::malformed(
            production,
            format!("`{token}` is a reserved word"),
            tokens,
        ));
    }
    Ok(Name::new(token))
}
