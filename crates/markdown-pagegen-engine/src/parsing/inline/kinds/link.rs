/// Image inline type: `![alt](url)`.
pub struct Image;

impl Image {
    /// Alt text may not contain brackets, the URL may not contain parentheses.
    pub const PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";
}

/// Link inline type: `[text](url)`.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[([^\[\]]*)\]\(([^\(\)]*)\)";
    /// A match directly after this character is an image, not a link.
    pub const EXCLUDED_PREFIX: char = '!';
}
