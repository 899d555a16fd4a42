/// Characters that always form a token on their own.
const SINGLE_CHAR_TOKENS: &[char] = &['(', ')', '+', '-', '*', '/', '%', '^', '|'];

/// Splits a line into the bare strings the evaluator works on.
///
/// Unlike the lexer this performs no validation and keeps no positions.
/// Parentheses and operators become one-character strings, letters are
/// grouped and uppercased so `res` and `RES` read alike, and every other run
/// of non-whitespace characters is kept as written for numeric parsing.
///
/// # Example
/// ```
/// use halfrpn::interpreter::evaluator::flatten::flatten;
///
/// assert_eq!(flatten("(2 res) (3.5 MEM)+"),
///            ["(", "2", "RES", ")", "(", "3.5", "MEM", ")", "+"]);
/// ```
#[must_use]
pub fn flatten(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for c in line.chars() {
        let continues_word = word.chars()
                                 .next()
                                 .is_some_and(|first| first.is_alphabetic() == c.is_alphabetic());

        if c.is_whitespace() || SINGLE_CHAR_TOKENS.contains(&c) || !continues_word {
            flush(&mut word, &mut tokens);
        }
        if c.is_whitespace() {
            continue;
        }
        if SINGLE_CHAR_TOKENS.contains(&c) {
            tokens.push(c.to_string());
        } else {
            word.push(c);
        }
    }
    flush(&mut word, &mut tokens);

    tokens
}

fn flush(word: &mut String, tokens: &mut Vec<String>) {
    if word.is_empty() {
        return;
    }
    if word.chars().all(char::is_alphabetic) {
        tokens.push(word.to_uppercase());
    } else {
        tokens.push(word.clone());
    }
    word.clear();
}
