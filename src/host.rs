//! In-memory text host
//!
//! Models the editor side of the conversion commands: a document, selections
//! that may be empty cursors, the word under a cursor, and edits that are
//! applied all together or not at all.

use std::ops::Range;

use log::{debug, warn};
use thiserror::Error;

use crate::convention::Convention;
use crate::engine::{self, CycleStep};

/// Extra word characters besides ASCII letters and digits
pub const DEFAULT_WORD_CHARS: &str = "_-";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("No selection to operate on")]
    NoSelection,
    #[error("No text selected or word found under cursor")]
    NothingToConvert,
    #[error("Edit range {start}..{end} is outside the document (length {len})")]
    OutOfBounds { start: usize, end: usize, len: usize },
    #[error("Edit range {start}..{end} does not fall on character boundaries")]
    NotCharBoundary { start: usize, end: usize },
    #[error("Edit ranges overlap at offset {0}")]
    Overlap(usize),
}

/// A selection as byte offsets; `anchor == head` is a bare cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Selection { anchor, head }
    }

    /// Empty selection at `pos`
    pub fn cursor(pos: usize) -> Self {
        Selection::new(pos, pos)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Ordered byte range covered by the selection
    pub fn range(&self) -> Range<usize> {
        self.anchor.min(self.head)..self.anchor.max(self.head)
    }
}

/// A replacement of `range` by `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<usize>,
    pub text: String,
}

/// A text buffer that conversions are applied to
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    word_chars: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Document {
            text: text.into(),
            word_chars: DEFAULT_WORD_CHARS.to_string(),
        }
    }

    /// Override the extra characters counted as part of a word
    pub fn with_word_chars(mut self, word_chars: impl Into<String>) -> Self {
        self.word_chars = word_chars.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    fn is_word_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || self.word_chars.contains(c)
    }

    /// Range of the word touching `pos`, if any.
    ///
    /// A cursor right after the last character of a word still selects it.
    pub fn word_range_at(&self, pos: usize) -> Option<Range<usize>> {
        if pos > self.text.len() || !self.text.is_char_boundary(pos) {
            return None;
        }

        let start = self.text[..pos]
            .char_indices()
            .rev()
            .take_while(|(_, c)| self.is_word_char(*c))
            .last()
            .map_or(pos, |(i, _)| i);

        let end = self.text[pos..]
            .char_indices()
            .find(|(_, c)| !self.is_word_char(*c))
            .map_or(self.text.len(), |(i, _)| pos + i);

        (start < end).then_some(start..end)
    }

    /// Range a selection operates on: itself, or the word under the cursor
    pub fn resolve(&self, selection: Selection) -> Option<Range<usize>> {
        if selection.is_empty() {
            self.word_range_at(selection.head)
        } else {
            let range = selection.range();
            (range.end <= self.text.len()).then_some(range)
        }
    }

    /// Text in `range`, `None` when the range is invalid
    pub fn slice(&self, range: Range<usize>) -> Option<&str> {
        self.text.get(range)
    }

    /// Apply all edits or none.
    pub fn apply(&mut self, mut edits: Vec<Edit>) -> Result<(), HostError> {
        edits.sort_by_key(|edit| edit.range.start);

        let len = self.text.len();
        let mut last_end = 0;
        for edit in &edits {
            let Range { start, end } = edit.range;
            if start > end || end > len {
                return Err(HostError::OutOfBounds { start, end, len });
            }
            if !self.text.is_char_boundary(start) || !self.text.is_char_boundary(end) {
                return Err(HostError::NotCharBoundary { start, end });
            }
            if start < last_end {
                return Err(HostError::Overlap(start));
            }
            last_end = end;
        }

        // Back to front so earlier offsets stay valid
        for edit in edits.into_iter().rev() {
            self.text.replace_range(edit.range, &edit.text);
        }

        Ok(())
    }
}

/// Convert every selection to `target` and apply the results as one edit.
///
/// Selections that resolve to no text are skipped; if none resolves the
/// document is left untouched.
pub fn convert_selections(
    doc: &mut Document,
    selections: &[Selection],
    target: Convention,
) -> Result<Vec<Edit>, HostError> {
    if selections.is_empty() {
        return Err(HostError::NoSelection);
    }

    let mut edits = Vec::with_capacity(selections.len());
    for selection in selections {
        let resolved = doc
            .resolve(*selection)
            .and_then(|range| doc.slice(range.clone()).map(|text| (range, text)));
        let Some((range, original)) = resolved else {
            warn!("Skipping selection {:?}: no text under it", selection);
            continue;
        };
        edits.push(Edit {
            range,
            text: engine::convert(original, target),
        });
    }

    if edits.is_empty() {
        return Err(HostError::NothingToConvert);
    }

    debug!("Applying {} edit(s) for {}", edits.len(), target);
    doc.apply(edits.clone())?;
    Ok(edits)
}

/// Cycle the text under the primary selection to its next convention.
pub fn cycle_selection(doc: &mut Document, selection: Selection) -> Result<CycleStep, HostError> {
    let range = doc.resolve(selection).ok_or(HostError::NothingToConvert)?;
    let original = doc.slice(range.clone()).ok_or(HostError::NothingToConvert)?;

    let step = engine::cycle(original);
    doc.apply(vec![Edit {
        range,
        text: step.output.clone(),
    }])?;

    Ok(step)
}
