// crates/block_locator/src/classifier.rs

//! Lexical guess at whether a line opens an indented block.
//!
//! This is a heuristic over the trimmed line text, not a grammar: any
//! non-comment line ending in `:` counts as an opener, valid syntax or not.

use once_cell::sync::Lazy;
use regex::Regex;

// Matches `def `, `class `, `if `, `for `, `while `, `with ` at the start of the trimmed line.
static KEYWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:def|class|if|for|while|with) ").unwrap());

/// Returns true if the trimmed text of `line` begins a new indented block.
pub fn is_block_start(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    KEYWORD_RE.is_match(trimmed)
        || trimmed.starts_with('@')
        || trimmed.starts_with("try:")
        || (trimmed.ends_with(':') && !trimmed.starts_with('#'))
}
