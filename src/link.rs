//! Markdown link entries.

use std::fmt;

use url::Url;

/// Prefix that marks a line as a link entry.
pub const LINK_MARKER: &str = "- [";

/// A single `- [label](url)` bullet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// Text shown for the link.
    label: String,
    /// Link target.
    url: String,
}

impl LinkEntry {
    /// Create a link entry from a label and a url.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Check that the url parses as an absolute url.
    pub(crate) fn validate_url(&self) -> Result<(), String> {
        Url::parse(&self.url)
            .map(|_| ())
            .map_err(|error| format!("'{}' is not a valid url: {error}", self.url))
    }
}

impl fmt::Display for LinkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- [{}]({})", self.label, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::{LINK_MARKER, LinkEntry};

    #[test]
    fn formats_markdown_bullet() {
        let link = LinkEntry::new("Example", "https://example.com");
        assert_eq!(link.to_string(), "- [Example](https://example.com)");
        assert!(link.to_string().starts_with(LINK_MARKER));
    }

    #[test]
    fn flags_relative_urls() {
        let link = LinkEntry::new("Example", "example.com/post");
        let message = link.validate_url().expect_err("relative url");
        assert!(message.contains("example.com/post"));
        assert!(LinkEntry::new("Ok", "https://example.com").validate_url().is_ok());
    }
}
