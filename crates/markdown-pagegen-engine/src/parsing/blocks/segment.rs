/// Separator between blocks: one blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into blocks on blank lines.
///
/// Each block is trimmed; empty pieces (from runs of blank lines) are dropped.
/// Blocks borrow from `markdown`.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
