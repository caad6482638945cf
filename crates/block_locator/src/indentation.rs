// crates/block_locator/src/indentation.rs

/// Returns the number of leading space characters (`' '`) on `line`.
///
/// Only literal spaces count. A tab stops the count just like any other
/// non-space character, so tab-indented sources measure as top-level. A line
/// made only of spaces measures as its full length.
pub fn get_indentation_level(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}
