/// Fenced code block type. Only backtick fences are recognised.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TICK: char = '`';

    /// True when the block both opens and closes with a backtick fence.
    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS) && block.ends_with(Self::BACKTICKS)
    }

    /// Code text with the backtick runs at both ends and surrounding
    /// whitespace removed.
    pub fn strip(block: &str) -> &str {
        block.trim_matches(Self::TICK).trim()
    }
}
