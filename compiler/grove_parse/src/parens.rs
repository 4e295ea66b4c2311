//! Matching of `(` / `)` delimiters over a token slice.

use crate::error::{ParseError, ParseResult};

pub const OPEN: &str = "(";
pub const CLOSE: &str = ")";

/// Index of the `)` matching the `(` at `tokens[0]`.
///
/// Fails with `UnbalancedParens` if `tokens` has fewer than two tokens, does
/// not start with `(`, or ends before the nesting depth returns to zero.
pub fn match_parens(tokens: &[&str]) -> ParseResult<usize> {
    if tokens.len() < 2 || tokens[0] != OPEN {
        return Err(ParseError::unbalanced(tokens));
    }

    let mut depth: usize = 0;
    for (i, &token) in tokens.iter().enumerate() {
        if token == OPEN {
            depth += 1;
        } else if token == CLOSE {
            // depth >= 1 here: tokens[0] is `(` and we return as soon as it hits 0
            depth -= 1;
            if depth == 0 {
                return Ok(i);
            }
        }
    }
    Err(ParseError::unbalanced(tokens))
}

/// Split `( ... )` off the front of `tokens`.
///
/// Returns the tokens strictly inside the group and the tokens after its
/// closing delimiter.
pub fn split_group<'a, 'src>(
    tokens: &'a [&'src str],
) -> ParseResult<(&'a [&'src str], &'a [&'src str])> {
    let close = match_parens(tokens)?;
    Ok((&tokens[1..close], &tokens[close + 1..]))
}
