/// The kind of an inline text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// Text outside any inline construct.
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl TextKind {
    /// Returns true for kinds that carry a destination URL.
    #[must_use]
    pub fn has_destination(self) -> bool {
        matches!(self, TextKind::Link | TextKind::Image)
    }
}

/// A typed run of inline text produced by the inline pipeline.
///
/// `destination` is present iff `kind` is [`TextKind::Link`] or
/// [`TextKind::Image`]. The constructors keep that invariant; node conversion
/// rejects spans that break it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// Span text. For links this is the link text, for images the alt text.
    pub text: String,
    pub kind: TextKind,
    /// Target URL of a link or source URL of an image.
    pub destination: Option<String>,
}

impl TextSpan {
    /// Creates a span without a destination.
    pub fn new(text: impl Into<String>, kind: TextKind) -> Self {
        Self {
            text: text.into(),
            kind,
            destination: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TextKind::Link,
            destination: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: TextKind::Image,
            destination: Some(url.into()),
        }
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.kind == TextKind::Plain
    }
}
