/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// True when every line starts with [`Self::PREFIX`].
    pub fn all_quoted(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips the prefix run at the start of the block, then outer whitespace.
    ///
    /// Prefixes on later lines are kept: `">a\n>b"` becomes `"a\n>b"`.
    pub fn strip(block: &str) -> &str {
        block.trim_start_matches(Self::PREFIX).trim()
    }
}
