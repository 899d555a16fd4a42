//! # halfrpn
//!
//! halfrpn is a Reverse Polish Notation calculator written in Rust.
//! It tokenizes, validates and evaluates postfix expressions with nested
//! groups, recall of previous results `(N RES)` and a memory cell
//! `(V MEM)` / `(MEM)`. Every value is rounded through IEEE-754 half
//! precision before it is used again.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Batch processing of sources, files and directories.
///
/// This module drives the core over many lines that share one session, and
/// surfaces I/O failures of the files it reads.
///
/// # Responsibilities
/// - Evaluates every expression line in order, skipping blanks and comments.
/// - Reports one outcome per line without stopping on failures.
/// - Reads single files or walks directories.
pub mod batch;
/// Provides unified error types for lexing, validation and evaluation.
///
/// This module defines all errors that can be raised while processing a line,
/// plus the I/O error of the batch layer. Lexical and structural errors carry
/// the character position they refer to.
///
/// # Responsibilities
/// - Defines error enums for each phase (lexer, validator, evaluator).
/// - Attaches positions and detailed messages for context.
/// - Integrates with standard error handling traits.
pub mod error;
/// Orchestrates the processing of a single line.
///
/// This module ties together lexing, validation, evaluation and the session
/// state.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, validator, evaluator.
/// - Holds the session shared across lines.
pub mod interpreter;
/// Human-readable diagnostics.
///
/// Renders token sequences as the table printed by the command line.
pub mod report;
/// Numeric helpers and the half-precision codec.
///
/// # Responsibilities
/// - Encode and decode IEEE-754 binary16 values bit for bit.
/// - Safely convert between floating-point and integer values.
pub mod util;

pub use crate::{
    error::{CalcError, EvalError, LexError, SyntaxError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::{scan, tokenize},
        session::Session,
        token::{Token, TokenKind},
        validator::validate,
    },
};

/// Tokenizes, validates and evaluates one line.
///
/// The line is checked by the lexer and the validator before the evaluator
/// runs, so structural problems are reported with a position. On success the
/// result is recorded in `session`; on any failure the session is unchanged.
///
/// # Errors
/// Returns the [`LexError`], [`SyntaxError`] or [`EvalError`] of the first
/// phase that fails, wrapped in a [`CalcError`].
///
/// # Examples
/// ```
/// use halfrpn::{CalcError, Session, process_line};
///
/// let mut session = Session::new();
///
/// // A nested expression evaluates to a single value.
/// let value = process_line("(1.5 2 *) (MEM) +", &mut session).unwrap();
/// assert_eq!(value, 3.0);
///
/// // An unknown command is rejected before evaluation.
/// let err = process_line("2 SQRT", &mut session).unwrap_err();
/// assert!(matches!(err, CalcError::Lex(_)));
/// assert_eq!(session.len(), 1);
/// ```
pub fn process_line(line: &str, session: &mut Session) -> Result<f64, CalcError> {
    let tokens = tokenize(line)?;
    validate(&tokens)?;
    Ok(evaluate(line, session)?)
}
