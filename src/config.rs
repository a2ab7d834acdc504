use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::convention::Convention;
use crate::host::DEFAULT_WORD_CHARS;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "case-cycle.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub document: DocumentConfig,
}

/// Conversion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Target used by `convert` when none is given on the command line
    #[serde(default = "default_target")]
    pub default_target: Convention,
    /// Skip tokenizing input that is already canonical camelCase/PascalCase
    #[serde(default = "default_true")]
    pub fast_path: bool,
}

/// How text read from stdin is split into independent pieces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Treat every line as its own selection
    #[serde(default = "default_true")]
    pub split_lines: bool,
    /// Strip surrounding whitespace before converting
    #[serde(default = "default_true")]
    pub trim: bool,
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report "Converted from X to Y" after cycling
    #[serde(default = "default_true")]
    pub notify: bool,
}

/// Settings for editing documents in place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Characters besides letters and digits that belong to a word
    #[serde(default = "default_word_chars")]
    pub word_chars: String,
}

fn default_target() -> Convention {
    Convention::SnakeCase
}

fn default_true() -> bool {
    true
}

fn default_word_chars() -> String {
    DEFAULT_WORD_CHARS.to_string()
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            default_target: default_target(),
            fast_path: true,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            split_lines: true,
            trim: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig { notify: true }
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        DocumentConfig {
            word_chars: default_word_chars(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Load `path` if given; otherwise load [`DEFAULT_CONFIG_FILE`] from the
    /// working directory when it exists, falling back to built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        Config::load_or_fallback(path, Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Same as [`Config::load_or_default`] with an explicit default location
    pub fn load_or_fallback(path: Option<&Path>, default_path: &Path) -> Result<Self> {
        match path {
            Some(path) => Config::load(path),
            None if default_path.exists() => Config::load(default_path),
            None => {
                debug!("No {} found, using defaults", default_path.display());
                Ok(Config::default())
            }
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if let Some(c) = self
            .document
            .word_chars
            .chars()
            .find(|c| c.is_alphanumeric() || c.is_whitespace())
        {
            anyhow::bail!(
                "Invalid document.word_chars: {:?} is a letter, digit or whitespace",
                c
            );
        }

        Ok(())
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
