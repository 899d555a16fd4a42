use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all structural errors found in a token sequence.
///
/// Every position is the character index of the token the error refers to.
pub enum SyntaxError {
    /// The line holds no tokens at all.
    #[error("Error at position 0: Empty expression.")]
    EmptyExpression,
    /// A `(` that is never closed.
    #[error("Error at position {position}: Parenthesis '(' is never closed.")]
    UnclosedParen {
        /// Position of the unmatched `(`.
        position: usize,
    },
    /// A `)` with no `(` to close.
    #[error("Error at position {position}: Unexpected closing parenthesis ')'.")]
    UnexpectedCloseParen {
        /// Position of the unmatched `)`.
        position: usize,
    },
    /// A number or nested group was expected inside a group.
    #[error("Error at position {position}: Expected a number or '(' but found '{found}'.")]
    ExpectedOperand {
        /// Position of the token found instead.
        position: usize,
        /// The token found instead.
        found:    String,
    },
    /// A group's two operands are not followed by an operator.
    #[error("Error at position {position}: Expected an operator but found '{found}'.")]
    ExpectedOperator {
        /// Position of the token found instead.
        position: usize,
        /// The token found instead.
        found:    String,
    },
    /// A group continues after its operator.
    #[error("Error at position {position}: Expected ')' but found '{found}'.")]
    ExpectedCloseParen {
        /// Position of the token found instead.
        position: usize,
        /// The token found instead.
        found:    String,
    },
    /// `(N RES)` with an `N` that is not a whole number.
    #[error("Error at position {position}: Result index '{index}' is not a whole number.")]
    NonIntegerResultIndex {
        /// Position of the index literal.
        position: usize,
        /// The index literal.
        index:    String,
    },
    /// `RES` or `MEM` outside of one of the three special forms.
    #[error("Error at position {position}: Command '{command}' must be written as (N RES), (V MEM) or (MEM).")]
    MisplacedCommand {
        /// Position of the command word.
        position: usize,
        /// The command word.
        command:  String,
    },
    /// An operator with fewer than two values before it.
    #[error("Error at position {position}: Operator '{operator}' needs two operands.")]
    MissingOperands {
        /// Position of the operator.
        position: usize,
        /// The operator.
        operator: String,
    },
    /// The line does not reduce to exactly one value.
    #[error("Error at position {position}: Expression leaves {values} values instead of one.")]
    DanglingOperands {
        /// Position of the last token of the line.
        position: usize,
        /// Number of values left over.
        values:   usize,
    },
    /// A token the lexer flagged as invalid.
    #[error("Error at position {position}: Invalid token '{value}'.")]
    InvalidToken {
        /// Position of the token.
        position: usize,
        /// The token text.
        value:    String,
    },
    /// Groups nested deeper than the evaluator accepts.
    #[error("Error at position {position}: Parentheses nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// Position of the `(` that crosses the limit.
        position: usize,
        /// The nesting limit.
        limit:    usize,
    },
}

impl SyntaxError {
    /// Returns the character index the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::EmptyExpression => 0,
            Self::UnclosedParen { position }
            | Self::UnexpectedCloseParen { position }
            | Self::ExpectedOperand { position, .. }
            | Self::ExpectedOperator { position, .. }
            | Self::ExpectedCloseParen { position, .. }
            | Self::NonIntegerResultIndex { position, .. }
            | Self::MisplacedCommand { position, .. }
            | Self::MissingOperands { position, .. }
            | Self::DanglingOperands { position, .. }
            | Self::InvalidToken { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}
