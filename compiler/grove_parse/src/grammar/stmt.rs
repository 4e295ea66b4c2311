//! Statement productions.

use grove_ir::{Keyword, Stmt, TerminateKind};

use crate::error::{ParseError, ParseResult};
use crate::grammar::bindable_name;
use crate::Parser;

/// `set <name> = <expr>`
pub(crate) fn assignment(parser: &Parser, tokens: &[&str]) -> ParseResult<Stmt> {
    const PRODUCTION: &str = "assignment";
    if tokens.len() < 4 {
        return Err(ParseError::malformed(PRODUCTION, "too short", tokens));
    }
    if !Keyword::Set.matches(tokens[0]) {
        return Err(ParseError::malformed(PRODUCTION, "must begin with `set`", tokens));
    }
    let target = bindable_name(PRODUCTION, tokens[1], tokens)?;
    if tokens[2] != "=" {
        return Err(ParseError::malformed(PRODUCTION, "expected `=` after the name", tokens));
    }
    let value = parser.parse_expression(&tokens[3..]).map_err(|e| {
        ParseError::malformed(PRODUCTION, format!("value: {}", e.kind()), tokens)
    })?;
    Ok(Stmt::Assign { target, value })
}

/// `quit` | `exit`
pub(crate) fn terminate(_: &Parser, tokens: &[&str]) -> ParseResult<Stmt> {
    match tokens {
        ["quit"] => Ok(Stmt::Terminate(TerminateKind::Quit)),
        ["exit"] => Ok(Stmt::Terminate(TerminateKind::Exit)),
        _ => Err(ParseError::malformed(
            "terminate",
            "expected exactly `quit` or `exit`",
            tokens,
        )),
    }
}

/// `import <module>`
pub(crate) fn import(_: &Parser, tokens: &[&str]) -> ParseResult<Stmt> {
    const PRODUCTION: &str = "import";
    let [keyword, module] = tokens else {
        return Err(ParseError::malformed(
            PRODUCTION,
            format!("expected 2 tokens, found {}", tokens.len()),
            tokens,
        ));
    };
    if !Keyword::Import.matches(keyword) {
        return Err(ParseError::malformed(PRODUCTION, "must begin with `import`", tokens));
    }
    let module = bindable_name(PRODUCTION, module, tokens)?;
    Ok(Stmt::Import { module })
}
