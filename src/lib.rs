#![warn(missing_docs)]
//! Library support for the posts CLI.

/// Command-line interface wiring and dispatch.
mod cli;
/// Command implementations.
mod commands;
/// Configuration loading and validation.
mod config;
/// Common diagnostics and warning aggregation.
mod diagnostics;
/// Unified diff rendering helpers.
mod diff;
/// Grouped link list parsing and rendering.
mod document;
/// Error handling for the crate.
mod error;
/// Front matter and page header rendering.
mod frontmatter;
/// Markdown link entries.
mod link;
/// Color palette and styling for CLI output.
mod palette;
/// Path expansion and normalization utilities.
mod paths;
/// Git stage, commit and push steps.
mod publish;
/// Test fixtures for site directories.
#[cfg(test)]
mod testutil;

pub use crate::error::{Error, Result};

/// Run the CLI, returning a structured error on failure.
pub fn run() -> Result<()> {
    cli::run()
}
