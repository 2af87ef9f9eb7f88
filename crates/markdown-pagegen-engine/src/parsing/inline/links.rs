use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{
    kinds::{Image, Link},
    types::TextSpan,
};

/// One `[text](url)` or `![alt](url)` occurrence within a string.
#[derive(Debug, Clone, PartialEq, Eq)]
struct InlineMatch {
    /// Byte range of the whole construct, including `!`, brackets and parentheses.
    range: Range<usize>,
    text: String,
    url: String,
}

impl InlineMatch {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let whole = caps.get(0)?;
        let group = |i| caps.get(i).map_or("", |m| m.as_str()).to_string();
        Some(Self {
            range: whole.range(),
            text: group(1),
            url: group(2),
        })
    }
}

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(Image::PATTERN).expect("Invalid image regex"))
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(Link::PATTERN).expect("Invalid link regex"))
}

fn find_images(text: &str) -> Vec<InlineMatch> {
    image_regex()
        .captures_iter(text)
        .filter_map(|caps| InlineMatch::from_captures(&caps))
        .collect()
}

/// Finds links left to right, skipping any candidate that directly follows
/// `!`. A skipped candidate resumes the search one byte later, so a link
/// nested after the rejected `[` can still be found.
fn find_links(text: &str) -> Vec<InlineMatch> {
    let re = link_regex();
    let mut out = vec![];
    let mut pos = 0;

    while let Some(caps) = re.captures_at(text, pos) {
        let Some(found) = InlineMatch::from_captures(&caps) else {
            break;
        };
        if text[..found.range.start].ends_with(Link::EXCLUDED_PREFIX) {
            // `[` is a single byte
            pos = found.range.start + 1;
            continue;
        }
        pos = found.range.end;
        out.push(found);
    }

    out
}

/// Returns `(alt, url)` for every `![alt](url)` in `text`, in order.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

/// Returns `(text, url)` for every `[text](url)` in `text` that is not an image.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

/// Splits image syntax out of plain spans into [`TextKind::Image`](super::TextKind::Image) spans.
pub fn split_nodes_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, find_images, TextSpan::image)
}

/// Splits link syntax out of plain spans into [`TextKind::Link`](super::TextKind::Link) spans.
///
/// Run after [`split_nodes_image`] so image syntax is already consumed.
pub fn split_nodes_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, find_links, TextSpan::link)
}

fn split_matches(
    spans: Vec<TextSpan>,
    find: fn(&str) -> Vec<InlineMatch>,
    make: fn(String, String) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let found = find(&span.text);
        if found.is_empty() {
            out.push(span);
            continue;
        }

        let mut cursor = 0;
        for m in found {
            if m.range.start > cursor {
                out.push(TextSpan::plain(&span.text[cursor..m.range.start]));
            }
            out.push(make(m.text, m.url));
            cursor = m.range.end;
        }
        if cursor < span.text.len() {
            out.push(TextSpan::plain(&span.text[cursor..]));
        }
    }

    out
}
