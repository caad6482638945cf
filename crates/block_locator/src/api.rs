// crates/block_locator/src/api.rs

use crate::document::TextDocument;
use crate::error::DocumentError;
use crate::factory::{create_block_locator, AnchorPolicy};
use crate::traits::BlockRange;

/// Resolves the block containing `line` using the default (outermost) policy.
pub fn resolve_block(
    document: &dyn TextDocument,
    line: usize,
) -> Result<BlockRange, DocumentError> {
    resolve_block_with_policy(document, line, AnchorPolicy::default())
}

pub fn resolve_block_with_policy(
    document: &dyn TextDocument,
    line: usize,
    policy: AnchorPolicy,
) -> Result<BlockRange, DocumentError> {
    create_block_locator(policy).locate(document, line)
}

/// Returns the text of the block containing `line`, from column 0 of its first
/// line through the end of its last line.
pub fn get_code_block(document: &dyn TextDocument, line: usize) -> Result<String, DocumentError> {
    get_code_block_with_policy(document, line, AnchorPolicy::default())
}

pub fn get_code_block_with_policy(
    document: &dyn TextDocument,
    line: usize,
    policy: AnchorPolicy,
) -> Result<String, DocumentError> {
    let block = resolve_block_with_policy(document, line, policy)?;
    let range = block.to_text_range(document)?;
    document.get_text(Some(&range))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SourceDocument;

    #[test]
    fn test_single_line_for_non_block_statement() {
        let doc = SourceDocument::from_lines(["x = 1", "y = 2"]);
        assert_eq!(get_code_block(&doc, 0).unwrap(), "x = 1");
    }

    #[test]
    fn test_complete_function_definition() {
        let doc = SourceDocument::from_lines(["def test():", "    return 1", "", "x = 2"]);
        assert_eq!(resolve_block(&doc, 0).unwrap(), BlockRange::new(0, 1));
        assert_eq!(get_code_block(&doc, 0).unwrap(), "def test():\n    return 1");
    }

    #[test]
    fn test_if_block_stops_at_else() {
        let doc = SourceDocument::from_lines([
            "if x > 0:",
            "    print(\"positive\")",
            "    y = 1",
            "else:",
            "    print(\"negative\")",
        ]);
        assert_eq!(
            get_code_block(&doc, 0).unwrap(),
            "if x > 0:\n    print(\"positive\")\n    y = 1"
        );
    }

    #[test]
    fn test_body_line_returns_enclosing_function() {
        let doc =
            SourceDocument::from_lines(["def f(a):", "    b = a * 2", "    return b", "f(3)"]);
        assert_eq!(
            get_code_block(&doc, 2).unwrap(),
            "def f(a):\n    b = a * 2\n    return b"
        );
    }

    #[test]
    fn test_fallback_keeps_the_line_text() {
        let doc = SourceDocument::from_lines(["    x = 1", "y = 2"]);
        let code = get_code_block(&doc, 0).unwrap();
        assert_eq!(code, "    x = 1");
        assert_eq!(code.trim(), "x = 1");
    }

    #[test]
    fn test_innermost_policy_text() {
        let doc = SourceDocument::from_lines([
            "def outer():",
            "    if condition:",
            "        print(\"nested\")",
            "    return True",
        ]);
        assert_eq!(
            get_code_block_with_policy(&doc, 1, AnchorPolicy::Innermost).unwrap(),
            "    if condition:\n        print(\"nested\")"
        );
    }

    #[test]
    fn test_out_of_range_propagates() {
        let doc = SourceDocument::from_lines(["x = 1"]);
        assert_eq!(
            get_code_block(&doc, 3).unwrap_err(),
            DocumentError::LineOutOfRange { line: 3, line_count: 1 }
        );
    }
}
