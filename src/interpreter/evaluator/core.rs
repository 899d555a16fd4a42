use tracing::{debug, trace};

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{flatten::flatten, operator::Operator},
        session::Session,
        validator::MAX_DEPTH,
    },
    util::{half::Half, num::is_decimal_literal},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates one line against a session.
///
/// The line is split with [`flatten`] and evaluated recursively, one operand
/// stack per parenthesis level. Every value pushed on a stack is rounded to
/// half precision first. On success the result is appended to the session's
/// history and any `(V MEM)` store is kept; on failure the session is left
/// untouched.
///
/// # Errors
/// Any [`EvalError`]: division by zero, a missing result, a stack that
/// underflows or does not end with exactly one value, an unparseable token,
/// an invalid exponent, unbalanced or too deeply nested parentheses.
///
/// # Example
/// ```
/// use halfrpn::{EvalError, Session, evaluate};
///
/// let mut session = Session::new();
/// assert_eq!(evaluate("( 3 4 + ) ( 2 1 - ) *", &mut session).unwrap(), 7.0);
/// assert_eq!(evaluate("(0 RES) 2 /", &mut session).unwrap(), 3.5);
///
/// let err = evaluate("4 0 /", &mut session).unwrap_err();
/// assert_eq!(err, EvalError::DivisionByZero { operator: '/' });
/// assert_eq!(session.len(), 2);
/// ```
pub fn evaluate(line: &str, session: &mut Session) -> EvalResult<f64> {
    let tokens = flatten(line);
    let memory = session.memory_half();
    let mut evaluation = Evaluation { session: &*session,
                                      memory };

    let result = evaluation.eval_span(&tokens, 0)?;
    let memory = evaluation.memory;

    debug!(line, result = %result, "line evaluated");
    session.record(result, memory);
    Ok(result.to_f64())
}

/// Working state of one line: read access to the session and a scratch copy
/// of the memory cell, committed only if the whole line succeeds.
struct Evaluation<'s> {
    session: &'s Session,
    memory:  Half,
}

impl Evaluation<'_> {
    /// Evaluates a flat token span with its own operand stack.
    fn eval_span(&mut self, tokens: &[String], depth: usize) -> EvalResult<Half> {
        if depth > MAX_DEPTH {
            return Err(EvalError::NestingTooDeep { limit: MAX_DEPTH });
        }

        let mut stack: Vec<Half> = Vec::new();
        let mut index = 0;

        while let Some(token) = tokens.get(index) {
            match token.as_str() {
                "(" => {
                    let close = matching_close(tokens, index)?;
                    let value = self.eval_group(&tokens[index + 1..close], depth)?;
                    stack.push(value);
                    index = close + 1;
                    continue;
                },
                ")" => {},
                symbol => {
                    if let Some(op) = Operator::from_symbol(symbol) {
                        let value = Self::eval_operator(op, &mut stack)?;
                        stack.push(value);
                    } else {
                        stack.push(parse_operand(symbol)?);
                    }
                },
            }
            index += 1;
        }

        match stack.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::MalformedExpression { count: stack.len() }),
        }
    }

    /// Evaluates the inside of a group, special forms first.
    fn eval_group(&mut self, inner: &[String], depth: usize) -> EvalResult<Half> {
        match inner {
            [index, command] if command == "RES" => self.recall(index),
            [value, command] if command == "MEM" => {
                self.memory = parse_operand(value)?;
                trace!(memory = %self.memory, "memory stored");
                Ok(self.memory)
            },
            [command] if command == "MEM" => Ok(self.memory),
            _ => self.eval_span(inner, depth + 1),
        }
    }

    /// Pops `b` then `a`, and returns `a op b` rounded to half precision.
    fn eval_operator(op: Operator, stack: &mut Vec<Half>) -> EvalResult<Half> {
        let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
            return Err(EvalError::InsufficientOperands { operator: op.symbol() });
        };

        let value = Half::from_f64(op.apply(a.to_f64(), b.to_f64())?);
        trace!(%a, %b, op = %op.symbol(), %value, "operator applied");
        Ok(value)
    }

    fn recall(&self, index: &str) -> EvalResult<Half> {
        let back = index.parse::<usize>()
                        .map_err(|_| EvalError::InvalidToken { token: index.to_string() })?;

        self.session
            .recall_half(back)
            .ok_or_else(|| EvalError::NoSuchResult { index:     back,
                                                     available: self.session.len(), })
    }
}

/// Returns the index of the `)` matching the `(` at `open`.
fn matching_close(tokens: &[String], open: usize) -> EvalResult<usize> {
    let mut depth = 0usize;

    for (index, token) in tokens.iter().enumerate().skip(open) {
        match token.as_str() {
            "(" => depth += 1,
            ")" => {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            },
            _ => {},
        }
    }

    Err(EvalError::UnbalancedParentheses)
}

/// Parses a numeric literal and rounds it to half precision.
fn parse_operand(token: &str) -> EvalResult<Half> {
    if !is_decimal_literal(token) {
        return Err(EvalError::InvalidToken { token: token.to_string() });
    }

    token.parse::<f64>()
         .map(Half::from_f64)
         .map_err(|_| EvalError::InvalidToken { token: token.to_string() })
}
