//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `localize`: Create or update `lexicon.json` and `strings.json` for every
//!   language listed in `framework_config.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::{DEFAULT_EXTENSION, DEFAULT_MARKER};
use crate::core::Verbosity;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Command> {
        if self.command.is_none() {
            Self::command().print_help().ok();
        }
        self.command
    }
}

/// Output flags shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Print per-file progress
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CommonArgs {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}

#[derive(Debug, Args)]
pub struct LocalizeCommand {
    /// Application directory (must contain appinfo.json)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Name of the localization call to harvest
    #[arg(long, env = "LEXI_MARKER", default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Extension of the source files to scan
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create or update localization files
    Localize(LocalizeCommand),
}
