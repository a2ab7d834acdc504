use clap::{Parser, Subcommand};
use std::path::PathBuf;

use case_cycle::config::DEFAULT_CONFIG_FILE;
use case_cycle::convention::Convention;
use case_cycle::host::Selection;

/// Detect and convert identifier naming conventions
#[derive(Parser, Debug)]
#[command(name = "case-cycle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file [default: case-cycle.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert text to a naming convention
    Convert {
        /// Target convention (camelCase, PascalCase, snake_case, UPPER_CASE, kebab-case, lowercase)
        #[arg(short, long)]
        to: Option<Convention>,

        /// Text to convert; reads stdin when omitted
        text: Vec<String>,
    },

    /// Convert text to the next convention in the cycle
    Cycle {
        /// Text to convert; reads stdin when omitted
        text: Vec<String>,
    },

    /// Print the convention text currently uses
    Detect {
        /// Text to inspect; reads stdin when omitted
        text: Vec<String>,
    },

    /// Convert words in a file in place
    Edit {
        /// File to edit
        file: PathBuf,

        /// Target convention
        #[arg(short, long, conflicts_with = "cycle", required_unless_present = "cycle")]
        to: Option<Convention>,

        /// Step the primary selection to its next convention instead
        #[arg(long, default_value = "false")]
        cycle: bool,

        /// Byte offset (cursor) or range START..END; repeatable
        #[arg(short, long = "at", value_parser = parse_selection, required = true)]
        at: Vec<Selection>,
    },

    /// Initialize a new configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(short, long, default_value = "false")]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Parse `N` as a cursor or `N..M` as a range
fn parse_selection(s: &str) -> Result<Selection, String> {
    let offset = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid offset {:?}: {}", part, e))
    };

    match s.split_once("..") {
        Some((start, end)) => Ok(Selection::new(offset(start)?, offset(end)?)),
        None => Ok(Selection::cursor(offset(s)?)),
    }
}
