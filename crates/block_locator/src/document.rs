// crates/block_locator/src/document.rs

//! The document accessor the locator reads from, plus an in-memory
//! implementation backed by a list of lines.

use crate::error::DocumentError;

/// A zero-based line/character position. `character` counts Unicode scalar
/// values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A span between two positions. The end character is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    /// Builds a range, swapping the endpoints if `end` comes before `start`.
    pub fn new(start: Position, end: Position) -> Self {
        if end < start {
            Self { start: end, end: start }
        } else {
            Self { start, end }
        }
    }

    pub fn from_coords(
        start_line: usize,
        start_char: usize,
        end_line: usize,
        end_char: usize,
    ) -> Self {
        Self::new(Position::new(start_line, start_char), Position::new(end_line, end_char))
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A single line of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLine<'a> {
    pub line_number: usize,
    pub text: &'a str,
}

impl TextLine<'_> {
    /// Length of the line in characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty_or_whitespace(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// The minimal read-only view of a text buffer the locator needs.
pub trait TextDocument {
    /// Number of lines in the document.
    fn line_count(&self) -> usize;

    /// Returns the line at `index`, or `LineOutOfRange` if `index >= line_count()`.
    fn line_at(&self, index: usize) -> Result<TextLine<'_>, DocumentError>;

    /// With no range returns the whole document; otherwise the exact text
    /// spanned by `range`, with lines joined by `\n`.
    fn get_text(&self, range: Option<&TextRange>) -> Result<String, DocumentError>;
}

/// An in-memory document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    text: String,
    lines: Vec<String>,
}

impl SourceDocument {
    /// Splits `text` on `\n`. A trailing newline yields a final empty line.
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self {
            text: lines.join("\n"),
            lines,
        }
    }

    fn check_line(&self, index: usize) -> Result<&str, DocumentError> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or(DocumentError::LineOutOfRange {
                line: index,
                line_count: self.lines.len(),
            })
    }
}

impl TextDocument for SourceDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_at(&self, index: usize) -> Result<TextLine<'_>, DocumentError> {
        let text = self.check_line(index)?;
        Ok(TextLine {
            line_number: index,
            text,
        })
    }

    fn get_text(&self, range: Option<&TextRange>) -> Result<String, DocumentError> {
        let range = match range {
            Some(range) => range,
            None => return Ok(self.text.clone()),
        };
        let (start, end) = (range.start, range.end);
        self.check_line(start.line)?;
        self.check_line(end.line)?;

        let mut parts = Vec::with_capacity(end.line.saturating_sub(start.line) + 1);
        for index in start.line..=end.line {
            let line = self.lines[index].as_str();
            let from = if index == start.line { start.character } else { 0 };
            let to = if index == end.line { end.character } else { usize::MAX };
            parts.push(char_slice(line, from, to));
        }
        Ok(parts.join("\n"))
    }
}

/// Slices `s` by character offsets, clamping both ends to the string length.
fn char_slice(s: &str, from: usize, to: usize) -> &str {
    let byte_at = |chars: usize| s.char_indices().nth(chars).map(|(b, _)| b).unwrap_or(s.len());
    let start = byte_at(from);
    let end = byte_at(to);
    if start >= end {
        ""
    } else {
        &s[start..end]
    }
}
