use crate::{
    error::SyntaxError,
    interpreter::token::{Token, TokenKind},
};

/// Result type used by the validator.
pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Deepest parenthesis nesting accepted, shared with the evaluator.
pub const MAX_DEPTH: usize = 64;

/// Checks that a token sequence forms a legal expression.
///
/// Parentheses are first checked for balance, so an unmatched `(` is always
/// reported at its own position. The line is then walked once:
///
/// - The top level is a postfix sequence of operands and operators that must
///   reduce to exactly one value.
/// - Each `(` ... `)` group is either one of the special forms `N RES` (with
///   a whole-number `N`), `V MEM` and `MEM`, or exactly two operands followed
///   by one operator.
/// - An operand is a number or a nested group.
///
/// Grammar:
/// ```text
/// line    := (operand | OP)+
/// group   := "(" special ")" | "(" operand operand OP ")"
/// special := INT "RES" | NUMBER "MEM" | "MEM"
/// operand := NUMBER | group
/// ```
///
/// # Errors
/// Returns the first [`SyntaxError`] found, positioned at the offending token.
///
/// # Example
/// ```
/// use halfrpn::{SyntaxError, tokenize, validate};
///
/// assert!(validate(&tokenize("( 3 4 + ) ( 2 1 - ) *").unwrap()).is_ok());
///
/// let err = validate(&tokenize("( 1 2 +").unwrap()).unwrap_err();
/// assert_eq!(err, SyntaxError::UnclosedParen { position: 0 });
/// ```
pub fn validate(tokens: &[Token]) -> SyntaxResult<()> {
    check_balance(tokens)?;

    let mut cursor = Cursor { tokens, index: 0 };
    cursor.top_level()
}

/// Matches every `)` against the nearest open `(`.
fn check_balance(tokens: &[Token]) -> SyntaxResult<()> {
    let mut open = Vec::new();

    for token in tokens {
        if token.is_paren("(") {
            open.push(token.position);
        } else if token.is_paren(")") && open.pop().is_none() {
            return Err(SyntaxError::UnexpectedCloseParen { position: token.position });
        }
    }

    match open.pop() {
        Some(position) => Err(SyntaxError::UnclosedParen { position }),
        None => Ok(()),
    }
}

/// Forward-only walk over a balanced token sequence.
struct Cursor<'a> {
    tokens: &'a [Token],
    index:  usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.index);
        self.index += 1;
        token
    }

    fn top_level(&mut self) -> SyntaxResult<()> {
        let Some(last) = self.tokens.last() else {
            return Err(SyntaxError::EmptyExpression);
        };

        let mut values = 0usize;
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Number => {
                    self.index += 1;
                    values += 1;
                },
                TokenKind::Paren if token.value == "(" => {
                    self.group(1)?;
                    values += 1;
                },
                TokenKind::Paren => {
                    return Err(SyntaxError::UnexpectedCloseParen { position: token.position });
                },
                TokenKind::Operator => {
                    if values < 2 {
                        return Err(SyntaxError::MissingOperands { position: token.position,
                                                                  operator: token.value.clone(), });
                    }
                    self.index += 1;
                    values -= 1;
                },
                TokenKind::Command => {
                    return Err(SyntaxError::MisplacedCommand { position: token.position,
                                                               command:  token.value.clone(), });
                },
                TokenKind::Error => {
                    return Err(SyntaxError::InvalidToken { position: token.position,
                                                           value:    token.value.clone(), });
                },
            }
        }

        if values == 1 {
            Ok(())
        } else {
            Err(SyntaxError::DanglingOperands { position: last.position,
                                                values })
        }
    }

    /// Validates one group; the cursor sits on its `(` and ends past its `)`.
    fn group(&mut self, depth: usize) -> SyntaxResult<()> {
        let Some(open) = self.advance() else {
            return Err(SyntaxError::EmptyExpression);
        };
        if depth > MAX_DEPTH {
            return Err(SyntaxError::NestingTooDeep { position: open.position,
                                                     limit:    MAX_DEPTH, });
        }

        if let Some(consumed) = self.special_form()? {
            self.index += consumed;
            return Ok(());
        }

        self.operand(open, depth)?;
        self.operand(open, depth)?;

        match self.advance() {
            Some(token) if token.kind == TokenKind::Operator => {},
            Some(token) => {
                return Err(SyntaxError::ExpectedOperator { position: token.position,
                                                           found:    token.value.clone(), });
            },
            None => return Err(SyntaxError::UnclosedParen { position: open.position }),
        }

        match self.advance() {
            Some(token) if token.is_paren(")") => Ok(()),
            Some(token) => Err(SyntaxError::ExpectedCloseParen { position: token.position,
                                                                 found:    token.value.clone(), }),
            None => Err(SyntaxError::UnclosedParen { position: open.position }),
        }
    }

    /// Recognizes `N RES )`, `V MEM )` and `MEM )` right after a `(`.
    ///
    /// Returns the number of tokens the form spans, closing parenthesis
    /// included, or `None` when the group is not a special form.
    fn special_form(&self) -> SyntaxResult<Option<usize>> {
        let rest = &self.tokens[self.index..];

        match rest {
            [number, command, close, ..]
                if number.kind == TokenKind::Number
                   && command.is_command("RES")
                   && close.is_paren(")") =>
            {
                if number.value.contains('.') {
                    return Err(SyntaxError::NonIntegerResultIndex { position: number.position,
                                                                    index:    number.value.clone(), });
                }
                Ok(Some(3))
            },
            [number, command, close, ..]
                if number.kind == TokenKind::Number
                   && command.is_command("MEM")
                   && close.is_paren(")") =>
            {
                Ok(Some(3))
            },
            [command, close, ..] if command.is_command("MEM") && close.is_paren(")") => Ok(Some(2)),
            _ => Ok(None),
        }
    }

    fn operand(&mut self, open: &Token, depth: usize) -> SyntaxResult<()> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Number => {
                self.index += 1;
                Ok(())
            },
            Some(token) if token.is_paren("(") => self.group(depth + 1),
            Some(token) => Err(SyntaxError::ExpectedOperand { position: token.position,
                                                              found:    token.value.clone(), }),
            None => Err(SyntaxError::UnclosedParen { position: open.position }),
        }
    }
}
