use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while splitting a line into tokens.
///
/// Every position is the character index in the source line, starting at 0.
pub enum LexError {
    /// A character outside the calculator's alphabet.
    #[error("Error at position {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// Index of the offending character.
        position:  usize,
        /// The offending character.
        character: char,
    },
    /// A numeric literal with a second `.` or a trailing `.`.
    #[error("Error at position {position}: Malformed number '{literal}'.")]
    MalformedNumber {
        /// Index of the `.` that makes the literal invalid.
        position: usize,
        /// The whole run of digits and dots.
        literal:  String,
    },
    /// A word that is neither `RES` nor `MEM`.
    #[error("Error at position {position}: Unknown command '{word}'.")]
    UnknownCommand {
        /// Index of the first letter of the word.
        position: usize,
        /// The word as written.
        word:     String,
    },
}

impl LexError {
    /// Returns the character index the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::MalformedNumber { position, .. }
            | Self::UnknownCommand { position, .. } => *position,
        }
    }
}
