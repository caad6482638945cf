// crates/block_locator/src/selection.rs

//! Chooses between an explicit selection and the block under the cursor.

use crate::api::get_code_block_with_policy;
use crate::document::{Position, TextDocument, TextRange};
use crate::error::DocumentError;
use crate::factory::AnchorPolicy;

/// An editor selection. `active` is the cursor end; `anchor` is where the
/// selection began. Equal positions mean nothing is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// A bare cursor with nothing highlighted.
    pub fn cursor(line: usize, character: usize) -> Self {
        let at = Position::new(line, character);
        Self { anchor: at, active: at }
    }

    pub fn is_empty(&self) -> bool {
        self.range().is_empty()
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(self.anchor, self.active)
    }
}

/// Returns the code to run for `selection`: the highlighted text verbatim if
/// there is any, otherwise the block containing the cursor line.
pub fn code_for_selection(
    document: &dyn TextDocument,
    selection: &Selection,
    policy: AnchorPolicy,
) -> Result<String, DocumentError> {
    if selection.is_empty() {
        log::debug!("empty selection; locating block at line {}", selection.active.line);
        get_code_block_with_policy(document, selection.active.line, policy)
    } else {
        document.get_text(Some(&selection.range()))
    }
}

/// True if `code` has nothing but whitespace in it.
pub fn is_nothing_to_run(code: &str) -> bool {
    code.trim().is_empty()
}
