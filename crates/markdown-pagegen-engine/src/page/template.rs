use std::path::Path;

use crate::io::{IoError, read_file};

/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub const TITLE_PLACEHOLDER: &'static str = "{{ Title }}";
    pub const CONTENT_PLACEHOLDER: &'static str = "{{ Content }}";

    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Loads a template from disk.
    pub fn load(path: &Path) -> Result<Self, IoError> {
        let template = Self::new(read_file(path)?);
        for placeholder in template.missing_placeholders() {
            log::warn!(
                "Template {} has no {placeholder} placeholder",
                path.display()
            );
        }
        Ok(template)
    }

    /// Placeholders that never occur in the template.
    pub fn missing_placeholders(&self) -> Vec<&'static str> {
        [Self::TITLE_PLACEHOLDER, Self::CONTENT_PLACEHOLDER]
            .into_iter()
            .filter(|p| !self.source.contains(*p))
            .collect()
    }

    /// Replaces every title placeholder, then every content placeholder.
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(Self::TITLE_PLACEHOLDER, title)
            .replace(Self::CONTENT_PLACEHOLDER, content)
    }
}
