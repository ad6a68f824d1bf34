//! Configuration loading and validation.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    frontmatter::FrontMatter,
    paths::{self, DEFAULT_CONFIG_NAME, DEFAULT_POSTS_PATH},
};

/// Remote pushed to when none is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Git program used when none is configured.
pub const DEFAULT_GIT: &str = "git";

/// Parsed configuration for the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resolved path of the posts file.
    file: PathBuf,
    /// Remote that receives the push.
    remote: String,
    /// Git command line, split later into program and arguments.
    git: String,
    /// Values emitted in the generated page header.
    front_matter: FrontMatter,
}

/// Raw config file structure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    /// Posts file path, relative to the config file directory.
    file: Option<String>,
    /// Remote name for `git push`.
    remote: Option<String>,
    /// Git command line.
    git: Option<String>,
    /// Page title.
    title: Option<String>,
    /// Page date.
    date: Option<String>,
    /// Page draft flag.
    draft: Option<bool>,
    /// Header line shown above the groups.
    header: Option<String>,
}

impl Config {
    /// Load the config for a site rooted at `site_root`.
    ///
    /// An explicit path must exist. Without one, `posts.toml` in the site root
    /// is used when present and built-in defaults otherwise.
    pub(crate) fn load(site_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::ConfigMissing {
                        path: path.to_path_buf(),
                    });
                }
                Self::load_from(path)
            }
            None => {
                let path = site_root.join(DEFAULT_CONFIG_NAME);
                match fs::metadata(&path) {
                    Ok(_) => Self::load_from(&path),
                    Err(error) if error.kind() == ErrorKind::NotFound => {
                        Self::from_raw(RawConfig::default(), site_root)
                    }
                    Err(error) => Err(Error::ConfigRead { path, source: error }),
                }
            }
        }
    }

    /// Load a config file from an explicit path.
    pub(crate) fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|error| Error::ConfigRead {
            path: path.to_path_buf(),
            source: error,
        })?;

        let raw: RawConfig = toml::from_str(&contents).map_err(|error| Error::ConfigParse {
            path: path.to_path_buf(),
            source: error,
        })?;

        let base_dir = path.parent().unwrap_or(Path::new("."));
        Self::from_raw(raw, base_dir)
    }

    /// Apply defaults to raw values and resolve paths against `base_dir`.
    fn from_raw(raw: RawConfig, base_dir: &Path) -> Result<Self> {
        let file = raw.file.as_deref().unwrap_or(DEFAULT_POSTS_PATH);
        let file = paths::expand_path(file, base_dir)?;

        let defaults = FrontMatter::default();
        let front_matter = FrontMatter {
            title: raw.title.unwrap_or(defaults.title),
            date: raw.date.unwrap_or(defaults.date),
            draft: raw.draft.unwrap_or(defaults.draft),
            header: raw.header.unwrap_or(defaults.header),
        };

        Ok(Self {
            file,
            remote: raw.remote.unwrap_or_else(|| DEFAULT_REMOTE.to_string()),
            git: raw.git.unwrap_or_else(|| DEFAULT_GIT.to_string()),
            front_matter,
        })
    }

    /// Replace the posts file path.
    pub(crate) fn set_file(&mut self, file: PathBuf) {
        self.file = file;
    }

    /// Return the posts file path.
    pub(crate) fn file(&self) -> &Path {
        &self.file
    }

    /// Return the push remote.
    pub(crate) fn remote(&self) -> &str {
        &self.remote
    }

    /// Return the git command line.
    pub(crate) fn git(&self) -> &str {
        &self.git
    }

    /// Return the page header values.
    pub(crate) fn front_matter(&self) -> &FrontMatter {
        &self.front_matter
    }
}
