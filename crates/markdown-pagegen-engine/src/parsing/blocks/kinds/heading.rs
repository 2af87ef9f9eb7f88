/// ATX heading block type: `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;
    /// One to six markers followed by a space, at the start of the block.
    pub const PATTERN: &'static str = r"^#{1,6} ";

    /// Number of leading markers, capped at [`Self::MAX_LEVEL`].
    pub fn level(block: &str) -> usize {
        block
            .chars()
            .take_while(|&c| c == Self::MARKER)
            .count()
            .min(Self::MAX_LEVEL)
    }

    /// Heading text with the marker run and surrounding whitespace removed.
    pub fn strip(block: &str) -> &str {
        block.trim_start_matches(Self::MARKER).trim()
    }
}
