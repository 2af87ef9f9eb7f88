//! # Inline Parsing
//!
//! Splits a run of inline text into typed spans and maps them to HTML nodes.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! paragraphs, headings, quotes and list items. Code blocks never reach it.
//!
//! The text starts as one plain span. Each pass splits only plain spans and
//! leaves already-typed spans alone:
//! 1. delimiter pairs in order `**`, `_`, `` ` `` (`delimiter`)
//! 2. images, then links (`links`)
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `TextKind`
//! - **`kinds`**: Inline-specific types with owned delimiters and patterns
//! - **`delimiter`**: `split_nodes_delimiter`
//! - **`links`**: `split_nodes_image`, `split_nodes_link` and the raw extractors
//! - **`pipeline`**: `text_to_spans`, `text_span_to_html_node`, `text_to_children`

pub mod delimiter;
pub mod kinds;
pub mod links;
pub mod pipeline;
pub mod types;

pub use delimiter::split_nodes_delimiter;
pub use links::{
    extract_markdown_images, extract_markdown_links, split_nodes_image, split_nodes_link,
};
pub use pipeline::{text_span_to_html_node, text_to_children, text_to_spans};
pub use types::{TextKind, TextSpan};
