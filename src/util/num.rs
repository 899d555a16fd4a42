/// Converts an `f64` to `i32` if and only if it is finite, integral and within
/// range.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
///
/// ## Returns
/// - `Some(i32)`: The converted value if it is exact.
/// - `None`: If the value is fractional, non-finite or out of range.
///
/// ## Example
/// ```
/// use halfrpn::util::num::f64_to_i32_exact;
///
/// assert_eq!(f64_to_i32_exact(-3.0), Some(-3));
/// assert_eq!(f64_to_i32_exact(2.5), None);
/// assert_eq!(f64_to_i32_exact(f64::INFINITY), None);
/// assert_eq!(f64_to_i32_exact(1e12), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i32_exact(value: f64) -> Option<i32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }

    Some(value as i32)
}

/// Returns `true` if `text` is a non-empty run of ASCII digits with at most one
/// `.`, the only shape the calculator accepts as a numeric literal.
///
/// ## Example
/// ```
/// use halfrpn::util::num::is_decimal_literal;
///
/// assert!(is_decimal_literal("12.5"));
/// assert!(is_decimal_literal(".5"));
/// assert!(!is_decimal_literal("1.2.3"));
/// assert!(!is_decimal_literal("inf"));
/// assert!(!is_decimal_literal(""));
/// ```
#[must_use]
pub fn is_decimal_literal(text: &str) -> bool {
    !text.is_empty()
    && text.bytes().all(|b| b.is_ascii_digit() || b == b'.')
    && text.bytes().filter(|&b| b == b'.').count() <= 1
}
