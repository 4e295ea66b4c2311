//! Parse error types.
//!
//! A production that rejects its input returns [`ParseErrorKind::Malformed`].
//! The dispatcher swallows those and moves on to the next production; only
//! the aggregate `Unrecognized*` error reaches the caller once every
//! production has been tried.

use grove_lexer::render;

/// Why a token span failed to parse.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unrecognized command")]
    UnrecognizedCommand,
    #[error("unrecognized statement")]
    UnrecognizedStatement,
    #[error("unrecognized expression")]
    UnrecognizedExpression,
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("empty input")]
    EmptyInput,
    /// A single production rejected the span.
    #[error("not a valid {production}: {reason}")]
    Malformed {
        production: &'static str,
        reason: String,
    },
}

/// Parse failure, carrying the offending token span verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}{}", span_suffix(.tokens))]
pub struct ParseError {
    kind: ParseErrorKind,
    tokens: String,
}

fn span_suffix(tokens: &str) -> String {
    if tokens.is_empty() {
        String::new()
    } else {
        format!(" in `{tokens}`")
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, tokens: &[&str]) -> Self {
        ParseError {
            kind,
            tokens: render(tokens),
        }
    }

    /// A production-local rejection.
    pub fn malformed(production: &'static str, reason: impl Into<String>, tokens: &[&str]) -> Self {
        Self::new(
            ParseErrorKind::Malformed {
                production,
                reason: reason.into(),
            },
            tokens,
        )
    }

    pub fn unbalanced(tokens: &[&str]) -> Self {
        Self::new(ParseErrorKind::UnbalancedParens, tokens)
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The offending tokens, joined by single spaces.
    pub fn tokens(&self) -> &str {
        &self.tokens
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
