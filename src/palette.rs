//! Color palette and styling for CLI output.

use owo_colors::{OwoColorize, Style};

/// Style for group headings.
pub fn heading() -> Style {
    Style::new().cyan().bold()
}

/// Style for link entries.
pub fn link() -> Style {
    Style::new().green()
}

/// Style for path values.
pub fn path() -> Style {
    Style::new().white()
}

/// Style for dimmed status text like the commit message echo.
pub fn subdued() -> Style {
    Style::new().dimmed()
}

/// Apply a style when color is enabled.
fn styled(text: &str, style: Style, use_color: bool) -> String {
    if use_color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Format a group heading with styling.
pub fn fmt_heading(text: &str, use_color: bool) -> String {
    styled(text, heading(), use_color)
}

/// Format a link entry with styling.
pub fn fmt_link(text: &str, use_color: bool) -> String {
    styled(text, link(), use_color)
}

/// Format a path with styling.
pub fn fmt_path(text: &str, use_color: bool) -> String {
    styled(text, path(), use_color)
}

/// Format subdued text with styling.
pub fn fmt_subdued(text: &str, use_color: bool) -> String {
    styled(text, subdued(), use_color)
}

#[cfg(test)]
mod tests {
    use super::{fmt_heading, fmt_link};

    #[test]
    fn leaves_text_plain_without_color() {
        assert_eq!(fmt_heading("### Tools", false), "### Tools");
        assert_eq!(fmt_link("- [A](https://a.example)", false), "- [A](https://a.example)");
    }

    #[test]
    fn wraps_text_in_escapes_with_color() {
        let colored = fmt_heading("### Tools", true);
        assert!(colored.contains("### Tools"));
        assert_ne!(colored, "### Tools");
    }
}
