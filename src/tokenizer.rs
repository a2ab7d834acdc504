use log::trace;

/// Split an identifier into lowercase words, whatever its convention.
///
/// A boundary is inserted wherever an ASCII lowercase letter is directly
/// followed by an ASCII uppercase letter, then the text is split on runs of
/// `-`, `_` and whitespace. Uppercase runs are not split further, so
/// `"HTTPServer"` is a single word.
pub fn tokenize(input: &str) -> Vec<String> {
    let separated = separate_humps(input);

    let tokens: Vec<String> = separated
        .split(is_separator)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| fragment.to_ascii_lowercase())
        .collect();

    trace!("tokenized {:?} into {:?}", input, tokens);
    tokens
}

/// Whether a character separates words
pub fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

/// Insert a space at every lowercase -> uppercase transition
fn separate_humps(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let mut prev_lower = false;

    for c in input.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            result.push(' ');
        }
        result.push(c);
        prev_lower = c.is_ascii_lowercase();
    }

    result
}
