//! Prefix arithmetic: `<op> ( <expr> ) ( <expr> )`.

use grove_ir::{BinaryOp, Expr};

use crate::error::{ParseError, ParseResult};
use crate::parens::{split_group, OPEN};
use crate::Parser;

/// Operator, two groups of at least one token each: `+ ( a ) ( b )`.
const MIN_TOKENS: usize = 7;

pub(crate) fn addition(parser: &Parser, tokens: &[&str]) -> ParseResult<Expr> {
    binary(parser, BinaryOp::Add, tokens)
}

pub(crate) fn subtraction(parser: &Parser, tokens: &[&str]) -> ParseResult<Expr> {
    binary(parser, BinaryOp::Sub, tokens)
}

fn binary(parser: &Parser, op: BinaryOp, tokens: &[&str]) -> ParseResult<Expr> {
    let production = op.production();
    if tokens.len() < MIN_TOKENS {
        return Err(ParseError::malformed(
            production,
            format!("expected at least {MIN_TOKENS} tokens, found {}", tokens.len()),
            tokens,
        ));
    }
    if BinaryOp::from_symbol(tokens[0]) != Some(op) || tokens[1] != OPEN {
        return Err(ParseError::malformed(
            production,
            format!("must begin with `{} (`", op.as_symbol()),
            tokens,
        ));
    }

    let (first, rest) = split_group(&tokens[1..])?;
    let left = parser.parse_expression(first).map_err(|e| {
        ParseError::malformed(production, format!("first operand: {}", e.kind()), tokens)
    })?;

    if rest.first() != Some(&OPEN) {
        return Err(ParseError::malformed(
            production,
            "operands must be wrapped in ( )",
            tokens,
        ));
    }
    let (second, trailing) = split_group(rest)?;
    if !trailing.is_empty() {
        return Err(ParseError::malformed(
            production,
            format!("unexpected tokens after second operand: `{}`", grove_lexer::render(trailing)),
            tokens,
        ));
    }
    let right = parser.parse_expression(second).map_err(|e| {
        ParseError::malformed(production, format!("second operand: {}", e.kind()), tokens)
    })?;

    Ok(Expr::binary(op, left, right))
}
