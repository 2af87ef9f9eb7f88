use crate::parsing::inline::TextKind;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are split last, after bold and italic, so a backtick inside an
/// already-split bold or italic run is left alone.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const DELIMITER: &'static str = "`";
    pub const KIND: TextKind = TextKind::Code;
}
