use crate::{
    error::ConvertError,
    html::HtmlNode,
    parsing::inline::text_to_children,
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Builds the HTML subtree for one classified block.
///
/// Textual content goes through the inline pipeline; code blocks are kept
/// as literal text.
pub fn block_to_html_node(block: &str, block_type: BlockType) -> Result<HtmlNode, ConvertError> {
    match block_type {
        BlockType::Paragraph => paragraph_node(block),
        BlockType::Heading => heading_node(block),
        BlockType::Code => Ok(code_node(block)),
        BlockType::Quote => quote_node(block),
        BlockType::UnorderedList => unordered_list_node(block),
        BlockType::OrderedList => ordered_list_node(block),
    }
}

fn paragraph_node(block: &str) -> Result<HtmlNode, ConvertError> {
    Ok(HtmlNode::parent("p", text_to_children(block)?))
}

fn heading_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let level = Heading::level(block);
    let children = text_to_children(Heading::strip(block))?;
    Ok(HtmlNode::parent(format!("h{level}"), children))
}

fn code_node(block: &str) -> HtmlNode {
    let code = HtmlNode::parent("code", vec![HtmlNode::text(CodeFence::strip(block))]);
    HtmlNode::parent("pre", vec![code])
}

fn quote_node(block: &str) -> Result<HtmlNode, ConvertError> {
    Ok(HtmlNode::parent(
        "blockquote",
        text_to_children(BlockQuote::strip(block))?,
    ))
}

fn unordered_list_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let items = block
        .lines()
        .map(UnorderedList::item_text)
        .filter(|text| !text.is_empty())
        .map(list_item_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("ul", items))
}

fn ordered_list_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let items = block
        .lines()
        .enumerate()
        .filter_map(|(i, line)| OrderedList::item_text(line, i + 1))
        .filter(|text| !text.is_empty())
        .map(list_item_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("ol", items))
}

fn list_item_node(text: &str) -> Result<HtmlNode, ConvertError> {
    Ok(HtmlNode::parent("li", text_to_children(text)?))
}
