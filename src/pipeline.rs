//! Command pipeline: turns command-line input into conversions, edits files,
//! and writes configuration files.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::convention::Convention;
use crate::engine::{self, CycleStep};
use crate::host::{convert_selections, cycle_selection, Document, Edit, Selection};

/// What `edit` does to the selected words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Convert every selection; `None` uses the configured default target
    Convert(Option<Convention>),
    /// Step the primary selection to its next convention
    Cycle,
}

/// What `edit` changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Converted(Vec<Edit>),
    Cycled(CycleStep),
}

/// Runs commands against one configuration
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Pipeline { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Split raw stdin text into pieces per `input.split_lines` and
    /// `input.trim`.
    pub fn split_input(&self, raw: &str) -> Vec<String> {
        let pieces = if self.config.input.split_lines {
            raw.lines().map(str::to_string).collect()
        } else {
            vec![raw.to_string()]
        };
        self.prepare(pieces)
    }

    /// Apply `input.trim` to pieces given directly
    pub fn prepare(&self, pieces: Vec<String>) -> Vec<String> {
        if !self.config.input.trim {
            return pieces;
        }
        pieces
            .into_iter()
            .map(|piece| piece.trim().to_string())
            .collect()
    }

    /// Convert one piece, honouring `convert.default_target` and
    /// `convert.fast_path`
    pub fn convert(&self, piece: &str, target: Option<Convention>) -> String {
        let target = target.unwrap_or(self.config.convert.default_target);
        if self.config.convert.fast_path {
            engine::convert(piece, target)
        } else {
            engine::convert_full(piece, target)
        }
    }

    /// Cycle one piece, logging the step when `output.notify` is set
    pub fn cycle(&self, piece: &str) -> CycleStep {
        let step = engine::cycle(piece);
        self.notify(&step);
        step
    }

    /// Apply `action` to the words of the file at `path` and rewrite it.
    ///
    /// Cycling only touches the first selection.
    pub fn edit_file(
        &self,
        path: &Path,
        action: EditAction,
        selections: &[Selection],
    ) -> Result<EditOutcome> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let mut doc =
            Document::new(content).with_word_chars(self.config.document.word_chars.clone());

        let outcome = match action {
            EditAction::Cycle => {
                let primary = selections.first().copied().context("No selection given")?;
                let step = cycle_selection(&mut doc, primary)
                    .with_context(|| format!("Failed to edit {}", path.display()))?;
                self.notify(&step);
                EditOutcome::Cycled(step)
            }
            EditAction::Convert(target) => {
                let target = target.unwrap_or(self.config.convert.default_target);
                let edits = convert_selections(&mut doc, selections, target)
                    .with_context(|| format!("Failed to edit {}", path.display()))?;
                debug!("Applied {} edit(s) to {}", edits.len(), path.display());
                EditOutcome::Converted(edits)
            }
        };

        fs::write(path, doc.into_text())
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        Ok(outcome)
    }

    fn notify(&self, step: &CycleStep) {
        if self.config.output.notify {
            info!("{}", step);
        }
    }
}

/// Write a default configuration file, refusing to overwrite unless `force`
pub fn init_config(path: &Path, force: bool) -> Result<Config> {
    if path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    let config = Config::default();
    config.save(path)?;

    Ok(config)
}
