use std::ops::Range;

use logos::Logos;

use crate::{
    error::LexError,
    interpreter::token::{Token, TokenKind},
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Raw lexical unit recognized by the generated scanner.
///
/// Numbers and words are matched as maximal runs and checked in their
/// callbacks, which keeps the longest-match rule of the calculator's
/// grammar: `1.2.3` is one malformed run rather than `1.2` followed by `.3`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexFault)]
enum Lexeme {
    /// Maximal run of digits and dots, such as `3`, `2.5` or `.5`.
    #[regex(r"[0-9.]+", lex_number)]
    Number(String),
    /// Maximal run of letters; only `RES` and `MEM` survive the callback.
    #[regex(r"[a-zA-Z]+", lex_command)]
    Command(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `|`
    #[token("|")]
    Pipe,
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Lexeme {
    fn into_token(self, position: usize) -> Token {
        let (value, kind) = match self {
            Self::Number(text) => (text, TokenKind::Number),
            Self::Command(word) => (word, TokenKind::Command),
            Self::LParen => ("(".to_string(), TokenKind::Paren),
            Self::RParen => (")".to_string(), TokenKind::Paren),
            Self::Plus => ("+".to_string(), TokenKind::Operator),
            Self::Minus => ("-".to_string(), TokenKind::Operator),
            Self::Star => ("*".to_string(), TokenKind::Operator),
            Self::Slash => ("/".to_string(), TokenKind::Operator),
            Self::Percent => ("%".to_string(), TokenKind::Operator),
            Self::Caret => ("^".to_string(), TokenKind::Operator),
            Self::Pipe => ("|".to_string(), TokenKind::Operator),
            Self::Ignored => (String::new(), TokenKind::Error),
        };
        Token::new(value, kind, position)
    }
}

/// Failure raised inside the generated scanner, before positions are resolved
/// against the source line.
#[derive(Debug, Clone, PartialEq, Default)]
enum LexFault {
    /// No pattern matches the next character.
    #[default]
    UnexpectedCharacter,
    /// A second `.` or a trailing `.` at the given byte offset.
    MalformedNumber { offset: usize },
    /// A word other than `RES` or `MEM`.
    UnknownCommand,
}

impl LexFault {
    fn into_error(self, source: &str, span: Range<usize>) -> LexError {
        let start = char_position(source, span.start);
        match self {
            Self::UnexpectedCharacter => {
                LexError::UnexpectedCharacter { position:  start,
                                                character: source[span.start..].chars()
                                                                               .next()
                                                                               .unwrap_or_default(), }
            },
            Self::MalformedNumber { offset } => {
                LexError::MalformedNumber { position: char_position(source, offset),
                                            literal:  source[span].to_string(), }
            },
            Self::UnknownCommand => LexError::UnknownCommand { position: start,
                                                               word:     source[span].to_string(), },
        }
    }
}

/// Validates a run of digits and dots.
///
/// # Returns
/// - `Ok(String)`: The literal, when it holds at most one `.` and does not end
///   with one.
/// - `Err(LexFault::MalformedNumber)`: Pointing at the second `.`, or at the
///   trailing `.`.
fn lex_number(lex: &logos::Lexer<Lexeme>) -> Result<String, LexFault> {
    let slice = lex.slice();
    let start = lex.span().start;

    if let Some((offset, _)) = slice.match_indices('.').nth(1) {
        return Err(LexFault::MalformedNumber { offset: start + offset });
    }
    if slice.ends_with('.') {
        return Err(LexFault::MalformedNumber { offset: start + slice.len() - 1 });
    }

    Ok(slice.to_string())
}

/// Uppercases a run of letters and accepts it only if it names a command.
fn lex_command(lex: &logos::Lexer<Lexeme>) -> Result<String, LexFault> {
    let word = lex.slice().to_ascii_uppercase();
    match word.as_str() {
        "RES" | "MEM" => Ok(word),
        _ => Err(LexFault::UnknownCommand),
    }
}

/// Converts a byte offset into a character index.
fn char_position(source: &str, offset: usize) -> usize {
    source.get(..offset).map_or(offset, |prefix| prefix.chars().count())
}

/// Splits a line into positioned tokens.
///
/// Whitespace separates tokens but is otherwise ignored. Parentheses and the
/// operators `+ - * / % ^ |` are single-character tokens, numbers are maximal
/// runs of digits with at most one `.`, and words are uppercased and must be
/// `RES` or `MEM`.
///
/// # Errors
/// - `UnexpectedCharacter` for any character outside that alphabet.
/// - `MalformedNumber` at the second `.` of a literal, or at its trailing `.`.
/// - `UnknownCommand` at the first letter of any other word.
///
/// # Example
/// ```
/// use halfrpn::{LexError, TokenKind, tokenize};
///
/// let tokens = tokenize("(2 res)").unwrap();
/// assert_eq!(tokens[2].value, "RES");
/// assert_eq!(tokens[2].kind, TokenKind::Command);
/// assert_eq!(tokens[2].position, 3);
///
/// let err = tokenize("2..5").unwrap_err();
/// assert!(matches!(err, LexError::MalformedNumber { position: 2, .. }));
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        match lexeme {
            Ok(lexeme) => tokens.push(lexeme.into_token(char_position(source, lexer.span().start))),
            Err(fault) => return Err(fault.into_error(source, lexer.span())),
        }
    }

    Ok(tokens)
}

/// Splits a line into tokens without failing.
///
/// Anything [`tokenize`] would reject becomes a [`TokenKind::Error`] token
/// holding the rejected text, and scanning carries on after it. Used for
/// diagnostic listings of lines that may be invalid.
///
/// # Example
/// ```
/// use halfrpn::{TokenKind, scan};
///
/// let tokens = scan("1 $ 2.3.4 +");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::Error, TokenKind::Error, TokenKind::Operator]);
/// assert_eq!(tokens[2].value, "2.3.4");
/// ```
#[must_use]
pub fn scan(source: &str) -> Vec<Token> {
    let mut lexer = Lexeme::lexer(source);
    let mut tokens = Vec::new();

    while let Some(lexeme) = lexer.next() {
        let position = char_position(source, lexer.span().start);
        let token = match lexeme {
            Ok(lexeme) => lexeme.into_token(position),
            Err(_) => Token::new(lexer.slice(), TokenKind::Error, position),
        };
        tokens.push(token);
    }

    tokens
}
