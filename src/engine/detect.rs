use log::debug;

use crate::convention::Convention;

/// A detection rule: the convention it reports and its predicate
pub type Rule = (Convention, fn(&str) -> bool);

/// Detection rules in priority order. The first matching rule wins, so the
/// order resolves overlaps (a single uppercase word is `UPPER_CASE`, never
/// `PascalCase`).
pub const DETECTION_ORDER: [Rule; 6] = [
    (Convention::UpperCase, is_upper_case),
    (Convention::SnakeCase, is_snake_case),
    (Convention::KebabCase, is_kebab_case),
    (Convention::PascalCase, is_pascal_case),
    (Convention::LowerCase, is_lower_case),
    (Convention::CamelCase, is_camel_case),
];

/// Detect the convention `input` currently uses, `None` when no rule matches.
pub fn detect(input: &str) -> Option<Convention> {
    if input.is_empty() {
        return None;
    }

    let detected = DETECTION_ORDER
        .iter()
        .find(|(_, matches)| matches(input))
        .map(|(convention, _)| *convention);

    debug!(
        "detected {} for {:?}",
        crate::convention::describe(detected),
        input
    );
    detected
}

/// `MY_CONST`, `X`, `HTTP2`: uppercase letter first, then uppercase letters
/// and digits in groups joined by single underscores.
pub fn is_upper_case(input: &str) -> bool {
    segmented(input, '_', 0, |c| c.is_ascii_uppercase(), is_upper_or_digit)
}

/// `my_var`: lowercase groups joined by single underscores, at least one.
pub fn is_snake_case(input: &str) -> bool {
    segmented(input, '_', 1, |c| c.is_ascii_lowercase(), is_lower_or_digit)
}

/// `my-var`: lowercase groups joined by single dashes, at least one.
pub fn is_kebab_case(input: &str) -> bool {
    segmented(input, '-', 1, |c| c.is_ascii_lowercase(), is_lower_or_digit)
}

/// `MyVar`: uppercase first, letters and digits, at least one lowercase.
pub fn is_pascal_case(input: &str) -> bool {
    starts_with(input, |c| c.is_ascii_uppercase())
        && input.chars().all(|c| c.is_ascii_alphanumeric())
        && input.chars().any(|c| c.is_ascii_lowercase())
}

/// `myvar`: lowercase letters and digits, more than one character.
pub fn is_lower_case(input: &str) -> bool {
    input.len() > 1
        && starts_with(input, |c| c.is_ascii_lowercase())
        && input.chars().all(is_lower_or_digit)
}

/// `myVar`: lowercase first, letters and digits, at least one uppercase.
pub fn is_camel_case(input: &str) -> bool {
    starts_with(input, |c| c.is_ascii_lowercase())
        && input.chars().all(|c| c.is_ascii_alphanumeric())
        && input.chars().any(|c| c.is_ascii_uppercase())
}

fn is_upper_or_digit(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

fn is_lower_or_digit(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

fn starts_with(input: &str, first: impl Fn(char) -> bool) -> bool {
    input.chars().next().is_some_and(first)
}

/// Groups of `body` characters joined by single `separator`s, the first
/// character satisfying `head`, with at least `min_separators` separators.
fn segmented(
    input: &str,
    separator: char,
    min_separators: usize,
    head: impl Fn(char) -> bool,
    body: impl Fn(char) -> bool,
) -> bool {
    if !starts_with(input, head) {
        return false;
    }

    let groups: Vec<&str> = input.split(separator).collect();

    groups.len() > min_separators
        && groups
            .iter()
            .all(|group| !group.is_empty() && group.chars().all(&body))
}
