/// Half-precision codec.
///
/// This module implements the bit-level conversion between real numbers and
/// the IEEE-754 binary16 layout used for every value the calculator keeps.
/// Encoding truncates the mantissa and flushes subnormals to zero, so its
/// output is reproducible bit for bit.
///
/// # Responsibilities
/// - Encode `f64` values into 16-bit patterns.
/// - Decode 16-bit patterns, including subnormals and infinities.
/// - Provide the [`half::Half`] newtype used across the evaluator.
pub mod half;
/// Numeric conversion helpers.
///
/// Safe conversions between floating-point values and integer types that
/// never silently lose data.
pub mod num;
