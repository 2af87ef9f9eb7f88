/// HTML attributes in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`. An existing attribute keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.0.push((name, value)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

/// A node in the HTML tree.
///
/// A node with children renders as its children and ignores `value`; a node
/// without children renders `value`. A node without a tag is raw text (or a
/// bare sequence of its children).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlNode {
    /// Element name, `None` for raw text.
    pub tag: Option<String>,
    /// Text payload, used only when there are no children.
    pub value: String,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

impl HtmlNode {
    /// A tagless node holding raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// An element with a text payload and no children.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
            ..Self::default()
        }
    }

    /// An element wrapping `children`.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns children whose tag equals `tag`.
    #[cfg(test)]
    pub fn children_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a HtmlNode> {
        self.children.iter().filter(move |c| c.tag() == Some(tag))
    }
}
