//! CLI command implementations.

use std::io::{self, IsTerminal};

/// Output color handling selection.
#[derive(Debug, Clone, Copy)]
pub enum ColorChoice {
    /// Colorize only when output is a TTY.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}

impl ColorChoice {
    /// Determine whether color output should be enabled.
    pub(crate) fn enabled(self) -> bool {
        match self {
            Self::Auto => io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Add-link command implementation.
pub mod add;
