use crate::convention::Convention;

/// Render lowercase word tokens in the `target` convention.
pub fn render<S: AsRef<str>>(tokens: &[S], target: Convention) -> String {
    let words = tokens.iter().map(|t| t.as_ref());

    match target {
        Convention::CamelCase => render_camel(tokens),
        Convention::PascalCase => words.map(capitalize).collect(),
        Convention::SnakeCase => join(words.map(str::to_ascii_lowercase), "_"),
        Convention::KebabCase => join(words.map(str::to_ascii_lowercase), "-"),
        Convention::UpperCase => join(words.map(str::to_ascii_uppercase), "_"),
        Convention::LowerCase => words.map(str::to_ascii_lowercase).collect(),
    }
}

/// First character uppercased, the rest lowercased
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(word.len());
            result.push(first.to_ascii_uppercase());
            result.push_str(&chars.as_str().to_ascii_lowercase());
            result
        }
        None => String::new(),
    }
}

fn render_camel<S: AsRef<str>>(tokens: &[S]) -> String {
    match tokens {
        [] => String::new(),
        // A lone word gets its last character raised so it differs from
        // its lowercase form.
        [only] if only.as_ref().chars().count() > 1 => {
            let word = only.as_ref().to_ascii_lowercase();
            let mut chars = word.chars();
            let last = chars.next_back().map(|c| c.to_ascii_uppercase());
            let mut result: String = chars.collect();
            result.extend(last);
            result
        }
        [first, rest @ ..] => {
            let mut result = first.as_ref().to_ascii_lowercase();
            for word in rest {
                result.push_str(&capitalize(word.as_ref()));
            }
            result
        }
    }
}

fn join(words: impl Iterator<Item = String>, separator: &str) -> String {
    words.collect::<Vec<_>>().join(separator)
}
