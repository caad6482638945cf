// crates/block_locator/src/error.rs

use thiserror::Error;

/// Failures raised by a [`crate::document::TextDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("Line {line} out of range (document has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },
}
