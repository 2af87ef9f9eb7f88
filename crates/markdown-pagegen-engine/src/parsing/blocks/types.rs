/// The structural type of a block, derived from its text shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Default when no other shape matches.
    Paragraph,
    /// `#` to `######` followed by a space.
    Heading,
    /// Opens and closes with a backtick fence.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Line `i` starts with `"{i}. "`.
    OrderedList,
}
