//! `call ( <receiver> <method> <arg>* )`.
//!
//! Each argument is either one token, parsed as an expression on its own, or
//! a parenthesized group whose interior is parsed as an expression. This
//! makes argument boundaries unambiguous at any nesting depth:
//!
//! ```text
//! call ( m gcd ( + ( 4 ) ( 8 ) ) 6 )
//!              ^^^^^^^^^^^^^^^^^ ^
//! ```
//!
//! The receiver must have identifier shape. Whether it is bound, and whether
//! the method exists, is checked at evaluation time.

use grove_ir::{is_identifier, CallExpr, Expr, Keyword};

use crate::error::{ParseError, ParseResult};
use crate::grammar::bindable_name;
use crate::parens::{match_parens, split_group, CLOSE, OPEN};
use crate::Parser;

const PRODUCTION: &str = "call";

/// `call ( r m )`
const MIN_TOKENS: usize = 5;

pub(crate) fn call(parser: &Parser, tokens: &[&str]) -> ParseResult<Expr> {
    if tokens.len() < MIN_TOKENS {
        return Err(ParseError::malformed(
            PRODUCTION,
            format!("expected at least {MIN_TOKENS} tokens, found {}", tokens.len()),
            tokens,
        ));
    }
    if !Keyword::Call.matches(tokens[0]) || tokens[1] != OPEN {
        return Err(ParseError::malformed(PRODUCTION, "must begin with `call (`", tokens));
    }
    if match_parens(&tokens[1..])? != tokens.len() - 2 {
        return Err(ParseError::malformed(
            PRODUCTION,
            "the call's `)` must be the last token",
            tokens,
        ));
    }

    let receiver = bindable_name(PRODUCTION, tokens[2], tokens)?;
    let method = tokens[3];
    if !is_identifier(method) {
        return Err(ParseError::malformed(
            PRODUCTION,
            format!("`{method}` is not a method name"),
            tokens,
        ));
    }
    let args = arguments(parser, &tokens[4..tokens.len() - 1], tokens)?;

    Ok(Expr::Call(CallExpr {
        receiver,
        method: method.to_owned(),
        args,
    }))
}

fn arguments(parser: &Parser, mut rest: &[&str], whole: &[&str]) -> ParseResult<Vec<Expr>> {
    let mut args = Vec::new();
    while let Some(&token) = rest.first() {
        let (arg_tokens, after) = if token == OPEN {
            split_group(rest)?
        } else if token == CLOSE {
            return Err(ParseError::unbalanced(whole));
        } else {
            rest.split_at(1)
        };

        let arg = parser.parse_expression(arg_tokens).map_err(|e| {
            ParseError::malformed(
                PRODUCTION,
                format!("argument {}: {}", args.len() + 1, e.kind()),
                whole,
            )
        })?;
        args.push(arg);
        rest = after;
    }
    Ok(args)
}
