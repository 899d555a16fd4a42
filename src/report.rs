use std::fmt::Write;

use crate::interpreter::token::Token;

/// Renders tokens as a `Value | Kind | Position` table.
///
/// # Example
/// ```
/// use halfrpn::{report::token_table, scan};
///
/// let table = token_table(&scan("3 4 +"));
/// let lines: Vec<_> = table.lines().collect();
///
/// assert_eq!(lines[0], "Value      | Kind       | Position");
/// assert_eq!(lines[2], "3          | NUMBER     | 0");
/// assert_eq!(lines[4], "+          | OPERATOR   | 4");
/// ```
#[must_use]
pub fn token_table(tokens: &[Token]) -> String {
    let mut table = String::new();

    let _ = writeln!(table, "{:<10} | {:<10} | {}", "Value", "Kind", "Position");
    let _ = writeln!(table, "{}", "-".repeat(34));
    for token in tokens {
        let _ = writeln!(table, "{:<10} | {:<10} | {}", token.value, token.kind, token.position);
    }

    table
}
