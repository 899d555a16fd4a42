/// The evaluator module computes the value of a line.
///
/// The evaluator re-splits the raw line into bare strings, walks them with one
/// operand stack per parenthesis level, resolves the special forms against the
/// session and applies binary operators, rounding every intermediate value to
/// half precision.
///
/// # Responsibilities
/// - Evaluates nested postfix expressions.
/// - Resolves `(N RES)`, `(V MEM)` and `(MEM)`.
/// - Reports runtime errors such as division by zero or missing results.
pub mod evaluator;
/// The lexer module tokenizes source lines.
///
/// The lexer reads a raw line and produces positioned tokens: numbers,
/// operators, parentheses and the `RES` and `MEM` commands.
///
/// # Responsibilities
/// - Converts the input characters into typed tokens with source positions.
/// - Reports invalid characters, malformed numbers and unknown commands.
pub mod lexer;
/// Persistent calculator state.
///
/// Holds the results history and memory cell shared by the lines of a batch.
pub mod session;
/// Token types shared by the lexer, the validator and diagnostics.
pub mod token;
/// The validator module checks the structure of a token sequence.
///
/// # Responsibilities
/// - Checks parenthesis balance and reports the offending position.
/// - Checks that each group is a special form or a binary sub-expression.
/// - Checks that the top level reduces to a single value.
pub mod validator;
