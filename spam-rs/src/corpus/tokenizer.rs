//! Document tokenization

/// Split text on whitespace and fold every token to uppercase.
///
/// Punctuation stays attached to its word and no stemming is applied, so
/// `"Hello, WORLD!"` yields `["HELLO,", "WORLD!"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_uppercase).collect()
}
