//! Grove Lexer - splits a source line into tokens.
//!
//! Grove tokens are whitespace-delimited: `+ ( 1 ) ( 2 )` is six tokens and
//! `+(1)(2)` is one. No quoting is applied, so a string literal survives as a
//! single token only when it contains no whitespace.
//!
//! Tokens borrow from the source line; positions are not retained. Error
//! messages echo token spans through [`render`].

use std::fmt;
use std::ops::Deref;

use grove_ir::{is_identifier, Keyword, DELIMITERS, OPERATORS};

/// Ordered tokens of one source line. No token is ever empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList<'src> {
    tokens: Vec<&'src str>,
}

impl<'src> TokenList<'src> {
    pub fn as_slice(&self) -> &[&'src str] {
        &self.tokens
    }
}

impl<'src> Deref for TokenList<'src> {
    type Target = [&'src str];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl fmt::Display for TokenList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.tokens))
    }
}

/// Tokenize one line of source.
pub fn tokenize(line: &str) -> TokenList<'_> {
    TokenList {
        tokens: line.split_whitespace().collect(),
    }
}

/// Join a token span back into text, one space between tokens.
pub fn render(tokens: &[&str]) -> String {
    tokens.join(" ")
}

/// Coarse token category, for `grove lex` output and diagnostics.
///
/// The parser does not use this; productions inspect raw token text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenTag {
    Keyword(Keyword),
    Operator,
    Delimiter,
    Number,
    Str,
    Ident,
    /// Anything else, including dotted paths like `collections.Counter`.
    Other,
}

impl TokenTag {
    pub fn of(token: &str) -> TokenTag {
        if let Some(kw) = Keyword::from_token(token) {
            TokenTag::Keyword(kw)
        } else if OPERATORS.contains(&token) {
            TokenTag::Operator
        } else if DELIMITERS.contains(&token) {
            TokenTag::Delimiter
        } else if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            TokenTag::Number
        } else if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
            TokenTag::Str
        } else if is_identifier(token) {
            TokenTag::Ident
        } else {
            TokenTag::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TokenTag::Keyword(_) => "keyword",
            TokenTag::Operator => "operator",
            TokenTag::Delimiter => "delimiter",
            TokenTag::Number => "number",
            TokenTag::Str => "string",
            TokenTag::Ident => "ident",
            TokenTag::Other => "other",
        }
    }
}
