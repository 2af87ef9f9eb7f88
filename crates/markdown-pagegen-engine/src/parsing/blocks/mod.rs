//! # Block Parsing
//!
//! Two-phase block parsing over a whole document.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines into
//!    trimmed blocks
//! 2. **Classification** (`classify`): each block gets a `BlockType` from its
//!    structural prefixes
//! 3. **Construction** (`builder`): each `(block, BlockType)` pair becomes an
//!    `HtmlNode` subtree, with inline content handed to the inline pipeline
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList); paragraphs are the fallback
//!   and own no syntax
//! - **`segment`**: `markdown_to_blocks`
//! - **`classify`**: `MarkdownBlockClassifier` and `block_to_block_type`
//! - **`builder`**: `block_to_html_node`
//!
//! ## Key Invariants
//!
//! - Classification is total: every non-empty block has exactly one type
//! - Code blocks are raw zones: no inline parsing inside
//! - No nesting: quotes and lists hold inline content only

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use builder::block_to_html_node;
pub use classify::{MarkdownBlockClassifier, block_to_block_type};
pub use segment::markdown_to_blocks;
pub use types::BlockType;
