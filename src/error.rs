/// Lexical errors.
///
/// Raised while splitting a line into tokens: characters outside the alphabet,
/// malformed numeric literals and unknown command words.
pub mod lex_error;
/// Structural errors.
///
/// Raised when a token sequence is not a well-formed, possibly nested, postfix
/// expression: unbalanced parentheses, wrong arity or ordering inside a group.
pub mod syntax_error;
/// Evaluation errors.
///
/// Raised while computing a value: division by zero, missing results, stack
/// underflow or leftovers, and unparseable operands.
pub mod eval_error;

use std::path::PathBuf;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use syntax_error::SyntaxError;
use thiserror::Error;

/// Any failure produced while processing input.
///
/// The first three variants are local to a single line and never alter the
/// session. `Io` comes from the batch layer and carries the path it failed on.
#[derive(Debug, Error)]
pub enum CalcError {
    /// The line could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a valid expression.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The expression failed during evaluation.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// A file or directory could not be read.
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        /// The path being read.
        path:   PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
