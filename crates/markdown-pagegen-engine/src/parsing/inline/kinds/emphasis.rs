use crate::parsing::inline::TextKind;

/// Italic (`_text_`) inline type.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITER: &'static str = "_";
    pub const KIND: TextKind = TextKind::Italic;
}
