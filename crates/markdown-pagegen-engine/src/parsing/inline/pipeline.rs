use crate::{error::ConvertError, html::HtmlNode};

use super::{
    delimiter::split_nodes_delimiter,
    kinds::DELIMITER_ORDER,
    links::{split_nodes_image, split_nodes_link},
    types::{TextKind, TextSpan},
};

/// Splits raw inline text into typed spans.
///
/// Order: bold, italic, code, then images, then links. Images go before links
/// so `![alt](url)` is never read as a link.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, ConvertError> {
    let mut spans = vec![TextSpan::plain(text)];
    for (delimiter, kind) in DELIMITER_ORDER {
        spans = split_nodes_delimiter(spans, delimiter, kind)?;
    }
    let spans = split_nodes_image(spans);
    Ok(split_nodes_link(spans))
}

/// Converts a single span into its HTML node.
///
/// # Errors
/// [`ConvertError::InvalidSpanKind`] when the span's destination does not
/// match its kind.
pub fn text_span_to_html_node(span: TextSpan) -> Result<HtmlNode, ConvertError> {
    let TextSpan {
        text,
        kind,
        destination,
    } = span;

    if kind.has_destination() != destination.is_some() {
        return Err(ConvertError::InvalidSpanKind { kind });
    }

    let url = destination.unwrap_or_default();
    let node = match kind {
        TextKind::Plain => HtmlNode::text(text),
        TextKind::Bold => HtmlNode::leaf("b", text),
        TextKind::Italic => HtmlNode::leaf("i", text),
        TextKind::Code => HtmlNode::leaf("code", text),
        TextKind::Link => HtmlNode::leaf("a", text).with_attribute("href", url),
        TextKind::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", text),
    };
    Ok(node)
}

/// Runs the inline pipeline over `text` and returns the resulting nodes.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    text_to_spans(text)?
        .into_iter()
        .map(text_span_to_html_node)
        .collect()
}
