use crate::parsing::inline::TextKind;

/// Bold (`**text**`) inline type.
///
/// Split first: `**` must be consumed before the single-character
/// delimiters are looked for.
pub struct Strong;

impl Strong {
    pub const DELIMITER: &'static str = "**";
    pub const KIND: TextKind = TextKind::Bold;
}
