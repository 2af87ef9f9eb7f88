pub mod document;
pub mod error;
pub mod html;
pub mod io;
pub mod page;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::{Document, extract_title, markdown_to_html};
pub use error::ConvertError;
pub use html::{Attributes, HtmlNode};
pub use io::IoError;
pub use page::{PageError, Template, generate_page, generate_pages_recursive, render_page};
pub use parsing::markdown_to_html_node;
