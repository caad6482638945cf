// crates/block_locator/src/default.rs

use crate::classifier::is_block_start;
use crate::document::TextDocument;
use crate::error::DocumentError;
use crate::indentation::get_indentation_level;
use crate::traits::{BlockLocator, BlockRange};

/// Anchors indented lines at the nearest top-level block-start above them,
/// so a query anywhere inside a function returns the whole outermost
/// statement it belongs to.
pub struct OutermostBlockLocator;

impl OutermostBlockLocator {
    /// Scans upward from the line above `line` for a block-start at indentation 0.
    fn find_top_level_ancestor(
        document: &dyn TextDocument,
        line: usize,
    ) -> Result<Option<usize>, DocumentError> {
        for index in (0..line).rev() {
            let text = document.line_at(index)?.text;
            if get_indentation_level(text) == 0 && is_block_start(text) {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }
}

impl BlockLocator for OutermostBlockLocator {
    fn locate(
        &self,
        document: &dyn TextDocument,
        line: usize,
    ) -> Result<BlockRange, DocumentError> {
        let target = document.line_at(line)?.text;

        let start = if get_indentation_level(target) == 0 {
            if !is_block_start(target) {
                log::debug!("line {} is a plain top-level statement", line);
                return Ok(BlockRange::single(line));
            }
            line
        } else {
            match Self::find_top_level_ancestor(document, line)? {
                Some(ancestor) => ancestor,
                None => {
                    log::debug!(
                        "line {} has no top-level block-start above it; falling back",
                        line
                    );
                    return Ok(BlockRange::single(line));
                }
            }
        };

        block_from(document, line, start)
    }
}

/// Anchors a block-start line at itself, and any other indented line at the
/// nearest block-start above it with a shallower indentation.
pub struct InnermostBlockLocator;

impl InnermostBlockLocator {
    fn find_enclosing_start(
        document: &dyn TextDocument,
        line: usize,
        indent: usize,
    ) -> Result<Option<usize>, DocumentError> {
        for index in (0..line).rev() {
            let text = document.line_at(index)?.text;
            if get_indentation_level(text) < indent && is_block_start(text) {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }
}

impl BlockLocator for InnermostBlockLocator {
    fn locate(
        &self,
        document: &dyn TextDocument,
        line: usize,
    ) -> Result<BlockRange, DocumentError> {
        let target = document.line_at(line)?.text;
        let indent = get_indentation_level(target);

        let start = if is_block_start(target) {
            line
        } else if indent == 0 {
            log::debug!("line {} is a plain top-level statement", line);
            return Ok(BlockRange::single(line));
        } else {
            match Self::find_enclosing_start(document, line, indent)? {
                Some(parent) => parent,
                None => {
                    log::debug!("line {} has no enclosing block-start; falling back", line);
                    return Ok(BlockRange::single(line));
                }
            }
        };

        block_from(document, line, start)
    }
}

fn block_from(
    document: &dyn TextDocument,
    line: usize,
    start: usize,
) -> Result<BlockRange, DocumentError> {
    let block = BlockRange::new(start, find_block_end(document, start)?);
    log::debug!(
        "line {} resolved to block {}..={} ({} lines)",
        line,
        block.start,
        block.end,
        block.line_count()
    );
    Ok(block)
}

/// Scans downward from `start` and returns the last line of its block.
///
/// The block stops before the first blank line or the first line indented at
/// or below the start line.
pub(crate) fn find_block_end(
    document: &dyn TextDocument,
    start: usize,
) -> Result<usize, DocumentError> {
    let block_indent = get_indentation_level(document.line_at(start)?.text);
    let mut end = start;
    while end + 1 < document.line_count() {
        let next = document.line_at(end + 1)?;
        if next.is_empty_or_whitespace() || get_indentation_level(next.text) <= block_indent {
            break;
        }
        end += 1;
    }
    Ok(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SourceDocument;

    #[test]
    fn test_block_end_stops_at_blank_line() {
        let doc =
            SourceDocument::from_lines(["def test():", "    return 1", "", "    x = 2"]);
        assert_eq!(find_block_end(&doc, 0).unwrap(), 1);
    }

    #[test]
    fn test_block_end_stops_at_dedent() {
        let doc = SourceDocument::from_lines(["if x > 0:", "    a", "    b", "else:", "    c"]);
        assert_eq!(find_block_end(&doc, 0).unwrap(), 2);
    }

    #[test]
    fn test_block_end_stops_at_whitespace_only_line() {
        let doc = SourceDocument::from_lines(["def test():", "    ", "    return 1"]);
        assert_eq!(find_block_end(&doc, 0).unwrap(), 0);
    }

    #[test]
    fn test_block_end_runs_to_end_of_document() {
        let doc = SourceDocument::from_lines(["class A:", "    def f(self):", "        pass"]);
        assert_eq!(find_block_end(&doc, 0).unwrap(), 2);
    }

    #[test]
    fn test_block_line_count() {
        let doc = SourceDocument::from_lines(["class A:", "    def f(self):", "        pass"]);
        let block = OutermostBlockLocator.locate(&doc, 2).unwrap();
        assert_eq!(block.line_count(), 3);
        assert_eq!(BlockRange::single(4).line_count(), 1);
    }

    #[test]
    fn test_outermost_anchors_nested_start_at_top_level() {
        let doc = SourceDocument::from_lines([
            "def outer():",
            "    def inner():",
            "        return 1",
            "    return inner()",
        ]);
        assert_eq!(OutermostBlockLocator.locate(&doc, 1).unwrap(), BlockRange::new(0, 3));
        assert_eq!(OutermostBlockLocator.locate(&doc, 2).unwrap(), BlockRange::new(0, 3));
    }

    #[test]
    fn test_outermost_skips_indented_block_starts_when_scanning_up() {
        let doc = SourceDocument::from_lines([
            "x = 0",
            "    if y:",
            "        z = 1",
        ]);
        assert_eq!(OutermostBlockLocator.locate(&doc, 2).unwrap(), BlockRange::single(2));
    }

    #[test]
    fn test_outermost_ignores_top_level_comment_with_colon() {
        let doc = SourceDocument::from_lines(["# Setup:", "    x = 1"]);
        assert_eq!(OutermostBlockLocator.locate(&doc, 1).unwrap(), BlockRange::single(1));
    }

    #[test]
    fn test_innermost_returns_nested_start_itself() {
        let doc = SourceDocument::from_lines([
            "def outer():",
            "    def inner():",
            "        return 1",
            "    return inner()",
        ]);
        assert_eq!(InnermostBlockLocator.locate(&doc, 1).unwrap(), BlockRange::new(1, 2));
    }

    #[test]
    fn test_innermost_anchors_body_line_at_its_parent() {
        let doc = SourceDocument::from_lines([
            "def outer():",
            "    if condition:",
            "        print(\"nested\")",
            "    return True",
        ]);
        assert_eq!(InnermostBlockLocator.locate(&doc, 2).unwrap(), BlockRange::new(1, 2));
        assert_eq!(InnermostBlockLocator.locate(&doc, 3).unwrap(), BlockRange::new(0, 3));
    }

    #[test]
    fn test_innermost_top_level_matches_outermost() {
        let doc = SourceDocument::from_lines(["x = 1", "for i in xs:", "    print(i)"]);
        for line in 0..doc.line_count() {
            assert_eq!(
                InnermostBlockLocator.locate(&doc, line).unwrap(),
                OutermostBlockLocator.locate(&doc, line).unwrap(),
                "policies disagree on line {}",
                line
            );
        }
    }

    #[test]
    fn test_out_of_range_line_is_an_error() {
        let doc = SourceDocument::from_lines(["x = 1"]);
        assert!(OutermostBlockLocator.locate(&doc, 1).is_err());
        assert!(InnermostBlockLocator.locate(&doc, 7).is_err());
    }
}
