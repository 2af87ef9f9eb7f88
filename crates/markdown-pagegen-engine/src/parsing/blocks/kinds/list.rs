/// Unordered list block type: every line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const PREFIX: &'static str = "- ";
    /// Markers stripped from the start of an item line.
    pub const MARKERS: [char; 2] = ['-', '*'];

    pub fn all_items(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Item text with one leading marker and surrounding whitespace removed.
    pub fn item_text(line: &str) -> &str {
        let line = line.trim_start();
        line.strip_prefix(Self::MARKERS)
            .unwrap_or(line)
            .trim()
    }
}

/// Ordered list block type: line `i` (1-based) starts with `"{i}. "`.
pub struct OrderedList;

impl OrderedList {
    pub fn prefix(number: usize) -> String {
        format!("{number}. ")
    }

    /// True when every line carries its expected, consecutive number prefix.
    pub fn all_numbered(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::prefix(i + 1)))
    }

    /// Item text after the `"{number}. "` prefix, trimmed. `None` if the line
    /// does not carry that prefix.
    pub fn item_text(line: &str, number: usize) -> Option<&str> {
        line.strip_prefix(&Self::prefix(number)).map(str::trim)
    }
}
