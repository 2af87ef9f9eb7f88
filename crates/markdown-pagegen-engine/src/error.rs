use crate::parsing::inline::TextKind;

/// Errors raised while converting Markdown text into an HTML node tree.
///
/// Every variant is fatal to the conversion call that produced it; no
/// partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// An inline delimiter was opened but never closed within the same span.
    #[error("No closing delimiter found for {delimiter}")]
    MalformedInlineMarkup { delimiter: String },
    /// A span's kind and destination disagree, so it cannot become a node.
    #[error("Invalid text span kind: {kind:?}")]
    InvalidSpanKind { kind: TextKind },
    /// The document has no `# ` heading line to use as a title.
    #[error("No h1 header found in markdown")]
    MissingTitle,
}
