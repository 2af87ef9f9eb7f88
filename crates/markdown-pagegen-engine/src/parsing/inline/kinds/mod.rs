//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Strong`**: `DELIMITER = "**"` - bold
//! - **`Emphasis`**: `DELIMITER = "_"` - italic
//! - **`CodeSpan`**: `DELIMITER = "\`"` - code
//! - **`Image`** / **`Link`**: regex patterns for `![alt](url)` and `[text](url)`;
//!   links never start directly after `Link::EXCLUDED_PREFIX`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in splitter code.

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod strong;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Image, Link};
pub use strong::Strong;

use super::TextKind;

/// Delimiter pairs in the order the inline pipeline splits them.
pub const DELIMITER_ORDER: [(&str, TextKind); 3] = [
    (Strong::DELIMITER, Strong::KIND),
    (Emphasis::DELIMITER, Emphasis::KIND),
    (CodeSpan::DELIMITER, CodeSpan::KIND),
];
