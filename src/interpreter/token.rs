use std::fmt;

/// Classifies a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A numeric literal such as `3`, `2.5` or `.5`.
    Number,
    /// One of `+ - * / % ^ |`.
    Operator,
    /// `(` or `)`.
    Paren,
    /// `RES` or `MEM`, always uppercased.
    Command,
    /// Text the lexer rejected. Only produced by [`scan`](super::lexer::scan).
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::Operator => "OPERATOR",
            Self::Paren => "PAREN",
            Self::Command => "COMMAND",
            Self::Error => "ERROR",
        };
        f.pad(name)
    }
}

/// A positioned piece of a source line.
///
/// `position` is the character index of the token's first character and is
/// only used for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text; commands are uppercased.
    pub value:    String,
    /// What the token is.
    pub kind:     TokenKind,
    /// Character index of the first character in the source line.
    pub position: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(value: impl Into<String>, kind: TokenKind, position: usize) -> Self {
        Self { value: value.into(),
               kind,
               position }
    }

    /// Returns `true` for a parenthesis token with the given symbol.
    #[must_use]
    pub fn is_paren(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Paren && self.value == symbol
    }

    /// Returns `true` for a command token with the given name.
    #[must_use]
    pub fn is_command(&self, name: &str) -> bool {
        self.kind == TokenKind::Command && self.value == name
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
