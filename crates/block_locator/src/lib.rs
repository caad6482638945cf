// crates/block_locator/src/lib.rs

//! Finds the logical block of indentation-structured (Python-like) source that
//! contains a given line, using indentation alone.

pub mod indentation;
pub mod classifier;
pub mod document;
pub mod error;
pub mod traits;
pub mod default;
mod factory;  // internal
pub mod api;
pub mod selection;

pub use api::{get_code_block, get_code_block_with_policy, resolve_block, resolve_block_with_policy};
pub use classifier::is_block_start;
pub use document::{Position, SourceDocument, TextDocument, TextLine, TextRange};
pub use error::DocumentError;
pub use factory::AnchorPolicy;
pub use indentation::get_indentation_level;
pub use selection::{code_for_selection, is_nothing_to_run, Selection};
pub use traits::{BlockLocator, BlockRange};
