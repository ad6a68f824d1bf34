//! Error types for the posts CLI.

use std::{
    env::VarError,
    io,
    path::PathBuf,
    process::{ExitCode, ExitStatus},
    result::Result as StdResult,
};

use thiserror::Error;
use toml::de::Error as TomlError;

/// Result type for posts operations.
pub type Result<T> = StdResult<T, Error>;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// The command line could not be parsed.
    #[error("{message}")]
    Usage {
        /// Rendered usage message.
        message: String,
    },
    /// The posts file could not be read.
    #[error("Failed to read posts file at {path}: {source}")]
    PostsRead {
        /// Path to the posts file.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The posts file could not be written.
    #[error("Failed to write posts file at {path}: {source}")]
    PostsWrite {
        /// Path to the posts file.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {path}")]
    ConfigMissing {
        /// Path to the config file.
        path: PathBuf,
    },
    /// The configuration file could not be read.
    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The configuration file could not be parsed.
    #[error("Failed to parse config at {path}: {source}")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        source: TomlError,
    },
    /// A configured path could not be expanded.
    #[error("Invalid path in config: {path}: {source}")]
    PathExpansion {
        /// Input path that failed to expand.
        path: String,
        /// Underlying expansion error.
        source: shellexpand::LookupError<VarError>,
    },
    /// The configured git command could not be parsed.
    #[error("Invalid git command: {message}")]
    GitCommand {
        /// Error message describing the parse failure.
        message: String,
    },
    /// A git step could not be spawned or waited on.
    #[error("Failed to run `{command}`: {source}")]
    GitSpawn {
        /// Command line that failed to run.
        command: String,
        /// Underlying spawn error.
        source: io::Error,
    },
    /// A git step exited with a non-zero status.
    #[error("`{command}` exited with status {status}")]
    GitStatus {
        /// Command line that exited.
        command: String,
        /// Exit status returned by git.
        status: ExitStatus,
    },
    /// The page header template could not be rendered.
    #[error("Failed to render page header: {message}")]
    TemplateRender {
        /// Error message describing the render failure.
        message: String,
    },
}

impl Error {
    /// Map errors to exit codes for CLI termination.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }

    /// Whether this error should be reported on stdout as usage help.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}
