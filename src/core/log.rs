//! Logging configuration passed explicitly through the pipeline.

use colored::Colorize;

/// How chatty the pipeline should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only warnings and errors.
    Quiet,
    /// Per-language status lines plus warnings and errors.
    #[default]
    Normal,
    /// Everything, including per-file progress.
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Operator-facing output sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct Log {
    verbosity: Verbosity,
}

impl Log {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Progress detail, shown only in verbose mode.
    pub fn info(&self, message: impl AsRef<str>) {
        if self.is_verbose() {
            println!("{}", message.as_ref());
        }
    }

    /// Per-language status, hidden in quiet mode.
    pub fn status(&self, message: impl AsRef<str>) {
        if self.verbosity != Verbosity::Quiet {
            println!("{}", message.as_ref());
        }
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        eprintln!("{} {}", "warning:".bold().yellow(), message.as_ref());
    }

    pub fn error(&self, message: impl AsRef<str>) {
        eprintln!("{} {}", "error:".bold().red(), message.as_ref());
    }
}
