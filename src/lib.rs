//! Detect the naming convention of an identifier, convert it to another
//! convention, or step it to the next one in a fixed cycle.
//!
//! ```
//! use case_cycle::{convert, cycle, detect, Convention};
//!
//! assert_eq!(convert("myVariableName", Convention::SnakeCase), "my_variable_name");
//! assert_eq!(detect("kebab-case-example"), Some(Convention::KebabCase));
//!
//! let step = cycle("foo");
//! assert_eq!(step.to, Convention::CamelCase);
//! assert_eq!(step.output, "foO");
//! ```

pub mod config;
pub mod convention;
pub mod engine;
pub mod host;
pub mod pipeline;
pub mod tokenizer;

pub use convention::{Convention, CYCLE_ORDER};
pub use engine::{convert, convert_full, cycle, detect, render, CycleStep};
pub use tokenizer::tokenize;
