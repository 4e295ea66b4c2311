//! Reserved words, operators and delimiters of the Grove language.

use std::fmt;

/// Operator tokens.
pub const OPERATORS: &[&str] = &["+", "-"];

/// Delimiter tokens.
pub const DELIMITERS: &[&str] = &["(", ")", "="];

/// A reserved word. None of these can be used as a variable name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Set,
    Call,
    Import,
    Quit,
    Exit,
    New,
}

impl Keyword {
    /// Every reserved word, in declaration order.
    pub const ALL: [Keyword; 6] = [
        Keyword::Set,
        Keyword::Call,
        Keyword::Import,
        Keyword::Quit,
        Keyword::Exit,
        Keyword::New,
    ];

    /// The source spelling of this keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Set => "set",
            Keyword::Call => "call",
            Keyword::Import => "import",
            Keyword::Quit => "quit",
            Keyword::Exit => "exit",
            Keyword::New => "new",
        }
    }

    /// Look up the keyword spelled by `token`, if any.
    pub fn from_token(token: &str) -> Option<Keyword> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == token)
    }

    /// Returns `true` if `token` is exactly this keyword.
    #[inline]
    pub fn matches(self, token: &str) -> bool {
        self.as_str() == token
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` if `token` is a reserved word.
pub fn is_reserved(token: &str) -> bool {
    Keyword::from_token(token).is_some()
}
