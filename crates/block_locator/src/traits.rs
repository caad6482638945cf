// crates/block_locator/src/traits.rs

use crate::document::{TextDocument, TextRange};
use crate::error::DocumentError;

/// An inclusive range of lines making up one logical block.
///
/// Always satisfies `start <= end`. Never stored; recomputed per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub start: usize,
    pub end: usize,
}

impl BlockRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "block start {} after end {}", start, end);
        Self { start, end }
    }

    /// The degraded result: the queried line on its own.
    pub fn single(line: usize) -> Self {
        Self { start: line, end: line }
    }

    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_single_line(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }

    /// The text range from column 0 of the first line to the end of the last line.
    pub fn to_text_range(&self, document: &dyn TextDocument) -> Result<TextRange, DocumentError> {
        let last = document.line_at(self.end)?;
        Ok(TextRange::from_coords(self.start, 0, self.end, last.char_count()))
    }
}

/// Finds the logical block a given line belongs to.
pub trait BlockLocator {
    /// Given a `document` and a zero-based `line`, returns the block containing it.
    /// Fails only when `line` is outside the document.
    fn locate(
        &self,
        document: &dyn TextDocument,
        line: usize,
    ) -> Result<BlockRange, DocumentError>;
}
