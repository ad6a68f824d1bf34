//! Path expansion and normalization utilities.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use path_clean::PathClean;

use crate::error::{Error, Result};

/// Posts file location relative to the site root.
pub const DEFAULT_POSTS_PATH: &str = "content/posts/intersting_posts.md";

/// Config file looked up in the site root when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "posts.toml";

/// Expand a user-provided path and resolve it relative to a base directory.
pub fn expand_path(raw: &str, base_dir: &Path) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).map_err(|error| Error::PathExpansion {
        path: raw.to_string(),
        source: error,
    })?;
    let expanded_path = PathBuf::from(expanded.as_ref());
    let resolved = if expanded_path.is_relative() {
        base_dir.join(expanded_path)
    } else {
        expanded_path
    };
    Ok(normalize_path(&resolved))
}

/// Normalize a path by cleaning and canonicalizing when possible.
pub fn normalize_path(path: &Path) -> PathBuf {
    match dunce::canonicalize(path) {
        Ok(canonical) => canonical,
        Err(_) => path.clean(),
    }
}

/// Render a path for display, using a tilde prefix for the home directory.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempfile::tempdir;

    use super::{expand_path, normalize_path};

    #[test]
    fn resolves_relative_paths_against_base() {
        let dir = tempdir().expect("tempdir");
        let resolved = expand_path("content/posts/links.md", dir.path()).expect("expand");
        assert!(resolved.ends_with(Path::new("content/posts/links.md")));
        assert!(resolved.starts_with(dir.path()));
    }

    #[test]
    fn keeps_absolute_paths() {
        let dir = tempdir().expect("tempdir");
        let absolute = dir.path().join("links.md");
        let raw = absolute.to_str().expect("utf-8 path");
        let resolved = expand_path(raw, Path::new("/elsewhere")).expect("expand");
        assert_eq!(resolved, normalize_path(&absolute));
    }

    #[test]
    fn cleans_missing_paths() {
        let cleaned = normalize_path(Path::new("/no/such/dir/../posts.md"));
        assert_eq!(cleaned, Path::new("/no/such/posts.md"));
    }
}
