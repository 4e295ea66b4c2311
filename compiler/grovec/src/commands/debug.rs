//! Debug commands: `lex` and `parse` for inspecting a single line.

use std::io::{self, Write};

use grove_lexer::{tokenize, TokenTag};

use crate::Session;

/// Print each token of `line` with its category.
pub fn lex_line<W: Write>(line: &str, out: &mut W) -> io::Result<()> {
    let tokens = tokenize(line);
    writeln!(out, "Tokens for `{line}` ({} tokens):", tokens.len())?;
    for token in tokens.iter() {
        writeln!(out, "  {:<12} {token}", TokenTag::of(token).label())?;
    }
    Ok(())
}

/// Print the parse tree of `line` and its canonical source form.
///
/// Returns `false` if the line did not parse.
pub fn parse_line<W: Write>(session: &Session, line: &str, out: &mut W) -> io::Result<bool> {
    match session.parse_line(line) {
        Ok(command) => {
            writeln!(out, "{command:#?}")?;
            writeln!(out, "canonical: {command}")?;
            Ok(true)
        }
        Err(err) => {
            writeln!(out, "Error parsing {line}")?;
            writeln!(out, "{err}")?;
            Ok(false)
        }
    }
}
