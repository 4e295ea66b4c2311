//! Identifiers.

use std::borrow::Borrow;
use std::fmt;

use crate::keyword::is_reserved;

/// A variable or module identifier.
///
/// Construction does not validate; the parser only builds a `Name` from a
/// token that passed [`is_identifier`] and is not reserved.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Name(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this name could be produced by the parser.
    pub fn is_valid(&self) -> bool {
        is_identifier(&self.0) && !is_reserved(&self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name::new(value)
    }
}

/// Identifier shape: an ASCII letter followed by ASCII letters, digits or `_`.
///
/// Reserved words pass this check; callers that need a bindable name also
/// check [`is_reserved`](crate::is_reserved).
pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
