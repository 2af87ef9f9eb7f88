pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::{error::ConvertError, html::HtmlNode};

use blocks::{MarkdownBlockClassifier, block_to_html_node, markdown_to_blocks};

/// Tag of the container wrapping every block of a converted document.
pub const ROOT_TAG: &str = "div";

/// Parses a whole Markdown document into one root node.
///
/// Each block becomes a child of the root, in source order. The first block
/// that fails aborts the conversion.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let classifier = MarkdownBlockClassifier;

    let children = markdown_to_blocks(markdown)
        .into_iter()
        .map(|block| block_to_html_node(block, classifier.classify(block)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::parent(ROOT_TAG, children))
}
