use crate::error::ConvertError;

use super::types::{TextKind, TextSpan};

/// Splits every plain span on `delimiter` pairs, turning the delimited text
/// into spans of `kind`.
///
/// Non-plain spans pass through untouched. Within a plain span every pair is
/// consumed left to right, so `"**a** and **b**"` yields two bold spans.
/// Text before and after a pair is kept as plain spans when non-empty; the
/// delimited text itself is always emitted, even when empty.
///
/// # Errors
/// [`ConvertError::MalformedInlineMarkup`] if a delimiter has no closing
/// partner within the same span.
pub fn split_nodes_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: TextKind,
) -> Result<Vec<TextSpan>, ConvertError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if delimiter.is_empty() || !span.is_plain() || !span.text.contains(delimiter) {
            out.push(span);
            continue;
        }
        split_plain(&span.text, delimiter, kind, &mut out)?;
    }

    Ok(out)
}

fn split_plain(
    text: &str,
    delimiter: &str,
    kind: TextKind,
    out: &mut Vec<TextSpan>,
) -> Result<(), ConvertError> {
    let mut rest = text;

    while let Some(start) = rest.find(delimiter) {
        let inner_start = start + delimiter.len();
        let Some(inner_len) = rest[inner_start..].find(delimiter) else {
            return Err(ConvertError::MalformedInlineMarkup {
                delimiter: delimiter.to_string(),
            });
        };
        let inner_end = inner_start + inner_len;

        push_plain(out, &rest[..start]);
        out.push(TextSpan::new(&rest[inner_start..inner_end], kind));
        rest = &rest[inner_end + delimiter.len()..];
    }

    push_plain(out, rest);
    Ok(())
}

fn push_plain(out: &mut Vec<TextSpan>, text: &str) {
    if !text.is_empty() {
        out.push(TextSpan::plain(text));
    }
}
