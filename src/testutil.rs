//! Test utilities for setting up throwaway site directories.
//!
//! `SiteFixture` creates a temporary site root with an optional posts file
//! and config, mirroring the layout the CLI expects in a real site checkout.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::{
    document::PostsDocument,
    frontmatter::FrontMatter,
    paths::{DEFAULT_CONFIG_NAME, DEFAULT_POSTS_PATH},
};

/// Render a posts file from `(group, link)` pairs using the default header.
pub fn posts_file(entries: &[(&str, &str)]) -> String {
    let mut document = PostsDocument::default();
    for (group, link) in entries {
        document.append_link(group, *link);
    }
    document
        .render(&FrontMatter::default())
        .expect("render posts file")
}

/// Temporary site root for command tests.
pub struct SiteFixture {
    /// Temp directory holding the site.
    root: TempDir,
}

impl SiteFixture {
    /// Create an empty site root.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write the posts file at its default location.
    pub fn with_posts(self, contents: &str) -> Self {
        self.with_file(DEFAULT_POSTS_PATH, contents)
    }

    /// Write the site config file.
    pub fn with_config(self, contents: &str) -> Self {
        self.with_file(DEFAULT_CONFIG_NAME, contents)
    }

    /// Write a file relative to the site root, creating parent directories.
    pub fn with_file(self, relative: &str, contents: &str) -> Self {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, contents).expect("write file");
        self
    }

    /// Site root directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Default posts file path.
    pub fn posts_path(&self) -> PathBuf {
        self.root.path().join(DEFAULT_POSTS_PATH)
    }
}
