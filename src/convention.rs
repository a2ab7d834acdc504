use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A supported identifier naming convention.
///
/// Variants are declared in cycle order; [`CYCLE_ORDER`] lists the same
/// sequence explicitly and is the single source for stepping.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Convention {
    /// `myVariableName`
    #[serde(rename = "camelCase", alias = "camel")]
    #[strum(to_string = "camelCase", serialize = "camel")]
    CamelCase,
    /// `MyVariableName`
    #[serde(rename = "PascalCase", alias = "pascal")]
    #[strum(to_string = "PascalCase", serialize = "pascal")]
    PascalCase,
    /// `my_variable_name`
    #[serde(rename = "snake_case", alias = "snake")]
    #[strum(to_string = "snake_case", serialize = "snake")]
    SnakeCase,
    /// `MY_VARIABLE_NAME`
    #[serde(rename = "UPPER_CASE", alias = "upper")]
    #[strum(to_string = "UPPER_CASE", serialize = "upper")]
    UpperCase,
    /// `my-variable-name`
    #[serde(rename = "kebab-case", alias = "kebab")]
    #[strum(to_string = "kebab-case", serialize = "kebab")]
    KebabCase,
    /// `myvariablename`
    #[serde(rename = "lowercase", alias = "lower")]
    #[strum(to_string = "lowercase", serialize = "lower")]
    LowerCase,
}

/// Order used by the "next format" operation.
pub const CYCLE_ORDER: [Convention; 6] = [
    Convention::CamelCase,
    Convention::PascalCase,
    Convention::SnakeCase,
    Convention::UpperCase,
    Convention::KebabCase,
    Convention::LowerCase,
];

/// Display name of the unknown sentinel.
pub const UNKNOWN: &str = "unknown";

impl Convention {
    /// Canonical name, e.g. `"snake_case"`
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Position in [`CYCLE_ORDER`]
    pub fn cycle_index(self) -> usize {
        CYCLE_ORDER
            .iter()
            .position(|c| *c == self)
            .unwrap_or(0)
    }

    /// The convention after this one, wrapping around
    pub fn next(self) -> Convention {
        CYCLE_ORDER[(self.cycle_index() + 1) % CYCLE_ORDER.len()]
    }

    /// Successor of a detection result; unknown counts as the first entry.
    pub fn after(detected: Option<Convention>) -> Convention {
        detected.unwrap_or(CYCLE_ORDER[0]).next()
    }
}

/// Name of a detection result, `"unknown"` for `None`
pub fn describe(detected: Option<Convention>) -> &'static str {
    detected.map_or(UNKNOWN, Convention::name)
}
