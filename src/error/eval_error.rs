use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur while evaluating a line.
pub enum EvalError {
    /// `/` or `%` with a zero right operand.
    #[error("Division by zero in '{operator}'.")]
    DivisionByZero {
        /// The operator that divided.
        operator: char,
    },
    /// `(N RES)` where fewer than `N + 1` results exist.
    #[error("No result {index} back: only {available} results are recorded.")]
    NoSuchResult {
        /// The requested distance from the most recent result.
        index:     usize,
        /// Number of results recorded so far.
        available: usize,
    },
    /// An operator found fewer than two values on the stack.
    #[error("Operator '{operator}' requires two operands.")]
    InsufficientOperands {
        /// The operator.
        operator: char,
    },
    /// A span finished with a stack that does not hold exactly one value.
    #[error("Invalid or incomplete expression: {count} values left on the stack.")]
    MalformedExpression {
        /// Number of values left on the stack.
        count: usize,
    },
    /// A token that is neither an operator, a parenthesis nor a number.
    #[error("Invalid token '{token}'.")]
    InvalidToken {
        /// The token text.
        token: String,
    },
    /// A negative base raised to a fractional exponent.
    #[error("Cannot raise negative base {base} to fractional exponent {exponent}.")]
    InvalidExponent {
        /// The base.
        base:     f64,
        /// The exponent.
        exponent: f64,
    },
    /// A `(` without a matching `)`.
    #[error("Unbalanced parentheses.")]
    UnbalancedParentheses,
    /// Groups nested deeper than the evaluator accepts.
    #[error("Parentheses nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The nesting limit.
        limit: usize,
    },
}
