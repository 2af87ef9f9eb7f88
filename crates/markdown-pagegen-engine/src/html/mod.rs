//! # HTML Node Tree
//!
//! A homogeneous tree of [`HtmlNode`]s built from parsed Markdown, and its
//! serialization to HTML text.
//!
//! - **`node`**: `HtmlNode` and its insertion-ordered `Attributes`
//! - **`render`**: `HtmlNode::to_html` and the `Display` impl
//!
//! Payload text is written verbatim. Only attribute values are escaped.

pub mod node;
pub mod render;

pub use node::{Attributes, HtmlNode};
pub use render::VOID_ELEMENTS;
