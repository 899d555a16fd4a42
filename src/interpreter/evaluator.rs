/// Core evaluation logic.
///
/// Contains the recursive span evaluator, special-form handling and the
/// commit of results into the session.
pub mod core;

/// Splitting of a raw line into bare evaluator tokens.
pub mod flatten;

/// Binary operator semantics.
///
/// Defines the seven operators and the arithmetic each one performs on two
/// decoded operands.
pub mod operator;
