//! Diff rendering for dry runs.

use owo_colors::OwoColorize;
use similar::TextDiff;

/// Render a unified diff between two texts.
pub fn unified_diff(old_label: &str, new_label: &str, old: &str, new: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(old_label, new_label)
        .to_string()
}

/// Colorize a unified diff string when enabled.
pub fn colorize_diff(diff: &str, color: bool) -> String {
    if !color {
        return diff.to_string();
    }

    let mut output = String::new();
    for line in diff.lines() {
        let colored = if line.starts_with("+++") || line.starts_with("---") {
            line.bold().to_string()
        } else if line.starts_with("@@") {
            line.cyan().to_string()
        } else if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else {
            line.to_string()
        };
        output.push_str(&colored);
        output.push('\n');
    }

    if !diff.ends_with('\n') && output.ends_with('\n') {
        output.pop();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::{colorize_diff, unified_diff};

    #[test]
    fn shows_added_link_line() {
        let old = "### Tools\n- [A](https://a.example)\n";
        let new = "### Tools\n- [A](https://a.example)\n- [B](https://b.example)\n";
        let diff = unified_diff("a/posts.md", "b/posts.md", old, new);
        assert!(diff.contains("+- [B](https://b.example)"));
        assert!(diff.contains("--- a/posts.md"));
    }

    #[test]
    fn no_diff_for_identical_text() {
        let text = "### Tools\n";
        assert!(unified_diff("a", "b", text, text).is_empty());
        assert_eq!(colorize_diff("", true), "");
    }
}
