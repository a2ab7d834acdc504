//! Convention engine: detection, rendering, conversion and cycling

pub mod detect;
pub mod render;

use std::fmt;

use log::debug;

use crate::convention::{describe, Convention};
use crate::tokenizer::tokenize;

pub use detect::detect;
pub use render::render;

/// Result of a single "next format" step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleStep {
    /// Convention the input was detected as (`None` = unknown)
    pub from: Option<Convention>,
    /// Convention the output is rendered in
    pub to: Convention,
    /// Replacement text
    pub output: String,
}

impl fmt::Display for CycleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Converted from {} to {}", describe(self.from), self.to)
    }
}

/// Convert `input` to `target`, taking the fast path when the input is
/// already canonical.
pub fn convert(input: &str, target: Convention) -> String {
    if let Some(output) = fast_path(input, target) {
        debug!("fast path {:?} -> {} = {:?}", input, target, output);
        return output;
    }
    convert_full(input, target)
}

/// Convert `input` to `target` by tokenizing and rendering.
pub fn convert_full(input: &str, target: Convention) -> String {
    render(&tokenize(input), target)
}

/// Shortcut for input that needs no re-tokenizing.
///
/// Returns `Some` only when the result is exactly what [`convert_full`]
/// would produce:
/// - canonical PascalCase to PascalCase: unchanged
/// - canonical camelCase to camelCase: unchanged
/// - canonical PascalCase with an interior hump to camelCase: first
///   character lowercased
pub fn fast_path(input: &str, target: Convention) -> Option<String> {
    if !is_canonical(input) {
        return None;
    }

    match (detect(input)?, target) {
        (Convention::PascalCase, Convention::PascalCase)
        | (Convention::CamelCase, Convention::CamelCase) => Some(input.to_string()),
        (Convention::PascalCase, Convention::CamelCase) if has_interior_hump(input) => {
            let mut chars = input.chars();
            let first = chars.next()?;
            let mut result = String::with_capacity(input.len());
            result.push(first.to_ascii_lowercase());
            result.push_str(chars.as_str());
            Some(result)
        }
        _ => None,
    }
}

/// Detect the convention of `input` and convert it to the next one in
/// [`crate::convention::CYCLE_ORDER`]. Unknown input steps as if it were
/// camelCase.
pub fn cycle(input: &str) -> CycleStep {
    let from = detect(input);
    let to = Convention::after(from);
    let output = convert_full(input, to);

    debug!("cycle {:?}: {} -> {} = {:?}", input, describe(from), to, output);
    CycleStep { from, to, output }
}

/// ASCII letters and digits only, and every uppercase letter after the first
/// character directly follows a lowercase letter.
fn is_canonical(input: &str) -> bool {
    let bytes = input.as_bytes();

    bytes.iter().all(u8::is_ascii_alphanumeric)
        && bytes
            .windows(2)
            .all(|pair| !pair[1].is_ascii_uppercase() || pair[0].is_ascii_lowercase())
}

fn has_interior_hump(input: &str) -> bool {
    input.bytes().skip(1).any(|b| b.is_ascii_uppercase())
}
