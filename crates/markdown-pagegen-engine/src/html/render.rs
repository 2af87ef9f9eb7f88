use std::fmt;

use super::node::HtmlNode;

/// Elements rendered self-closed when they have no children.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl HtmlNode {
    /// Serializes this node and its subtree to HTML.
    ///
    /// Payload text is written as-is; attribute values are escaped for a
    /// double-quoted context.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let Some(tag) = self.tag() else {
            if self.children.is_empty() {
                out.push_str(&self.value);
            } else {
                for child in &self.children {
                    child.write_html(out);
                }
            }
            return;
        };

        out.push('<');
        out.push_str(tag);
        self.write_attributes(out);

        if self.children.is_empty() && VOID_ELEMENTS.contains(&tag) {
            out.push_str(" />");
            return;
        }
        out.push('>');

        if self.children.is_empty() {
            out.push_str(&self.value);
        } else {
            for child in &self.children {
                child.write_html(out);
            }
        }

        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    fn write_attributes(&self, out: &mut String) {
        for (name, value) in self.attributes.iter() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        }
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
