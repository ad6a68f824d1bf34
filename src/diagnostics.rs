//! Warning aggregation and verbose progress notes.

/// Aggregates warnings for a command run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// Whether progress notes are printed.
    verbose: bool,
    /// Collected warning messages.
    warnings: Vec<String>,
}

impl Diagnostics {
    /// Create a new diagnostics collector.
    pub(crate) fn new(verbose: bool) -> Self {
        Self {
            verbose,
            warnings: Vec::new(),
        }
    }

    /// Record a warning and print it immediately.
    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("Warning: {message}");
        self.warnings.push(message);
    }

    /// Print a progress line when verbose output is enabled.
    pub(crate) fn note(&self, message: impl Into<String>) {
        if self.verbose {
            eprintln!("{}", message.into());
        }
    }

    /// Number of warnings recorded so far.
    pub(crate) fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Print a warning summary when warnings were emitted.
    pub(crate) fn print_warning_summary(&self) {
        let count = self.warning_count();
        if count == 0 {
            return;
        }

        eprintln!("Completed with {count} warning(s).");
    }
}
