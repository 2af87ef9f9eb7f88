use crate::{error::ConvertError, html::HtmlNode, parsing::markdown_to_html_node};

/// Prefix of the line that supplies a document's title.
pub const TITLE_PREFIX: &str = "# ";

/// A converted Markdown document: its title and HTML node tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub root: HtmlNode,
}

impl Document {
    /// Converts `markdown` and extracts its title.
    ///
    /// Fails if the body cannot be converted or there is no `# ` line.
    pub fn from_markdown(markdown: &str) -> Result<Self, ConvertError> {
        let root = markdown_to_html_node(markdown)?;
        let title = extract_title(markdown)?;
        Ok(Self { title, root })
    }

    /// Rendered HTML of the document body.
    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}

/// Returns the text of the first line that starts with `# ` once trimmed.
///
/// # Errors
/// [`ConvertError::MissingTitle`] when no such line exists.
pub fn extract_title(markdown: &str) -> Result<String, ConvertError> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(ConvertError::MissingTitle)
}

/// Converts `markdown` straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    Ok(markdown_to_html_node(markdown)?.to_html())
}
