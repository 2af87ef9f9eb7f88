use std::sync::OnceLock;

use regex::Regex;

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX.get_or_init(|| Regex::new(Heading::PATTERN).expect("Invalid heading regex"))
}

/// Classifies whole blocks by their structural prefixes.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    /// Classifies a trimmed, non-empty block into a [`BlockType`].
    ///
    /// First match wins: heading, code, quote, unordered list, ordered list,
    /// then paragraph. Every block gets exactly one type.
    pub fn classify(&self, block: &str) -> BlockType {
        if heading_regex().is_match(block) {
            BlockType::Heading
        } else if CodeFence::is_fenced(block) {
            BlockType::Code
        } else if BlockQuote::all_quoted(block) {
            BlockType::Quote
        } else if UnorderedList::all_items(block) {
            BlockType::UnorderedList
        } else if OrderedList::all_numbered(block) {
            BlockType::OrderedList
        } else {
            BlockType::Paragraph
        }
    }
}

/// Shorthand for [`MarkdownBlockClassifier::classify`].
pub fn block_to_block_type(block: &str) -> BlockType {
    MarkdownBlockClassifier.classify(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("This is a simple paragraph with no special formatting.", BlockType::Paragraph)]
    #[case("# Heading 1", BlockType::Heading)]
    #[case("## Heading 2", BlockType::Heading)]
    #[case("###### Heading 6", BlockType::Heading)]
    #[case("####### Too deep", BlockType::Paragraph)]
    #[case("#NoSpace", BlockType::Paragraph)]
    #[case("```\nprint('Hello World')\n```", BlockType::Code)]
    #[case("```\nunclosed", BlockType::Paragraph)]
    #[case(">This is a quote", BlockType::Quote)]
    #[case(">Line 1\n>Line 2", BlockType::Quote)]
    #[case(">Line 1\nLine 2", BlockType::Paragraph)]
    #[case("- Item 1", BlockType::UnorderedList)]
    #[case("- Item 1\n- Item 2\n- Item 3", BlockType::UnorderedList)]
    #[case("- Item 1\nItem 2", BlockType::Paragraph)]
    #[case("1. Item 1", BlockType::OrderedList)]
    #[case("1. a\n2. b", BlockType::OrderedList)]
    #[case("1. a\n3. b", BlockType::Paragraph)]
    #[case("2. starts late", BlockType::Paragraph)]
    fn classifies_blocks(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(block_to_block_type(block), expected);
    }

    #[test]
    fn heading_beats_other_shapes() {
        // Starts like a heading, ends like a fence.
        assert_eq!(block_to_block_type("# Title ```"), BlockType::Heading);
    }

    #[test]
    fn code_beats_quote() {
        assert_eq!(block_to_block_type("```\n> quoted\n```"), BlockType::Code);
    }
}
