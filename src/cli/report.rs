//! Run summary printing.
//!
//! Per-language progress and failures are logged while the pipeline runs;
//! this module prints the closing line.

use std::io::{self, Write};

use colored::Colorize;

use crate::config::APP_CONFIG_FILE_NAME;
use crate::core::{LocalizeSummary, Verbosity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_summary(summary: &LocalizeSummary, verbosity: Verbosity) {
    print_summary_to(summary, verbosity, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(summary: &LocalizeSummary, verbosity: Verbosity, writer: &mut W) {
    if !summary.is_success() {
        let total = summary.updated.len() + summary.failures.len();
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Failed to update {} of {} {}",
                summary.failures.len(),
                total,
                plural(total, "language", "languages")
            )
            .red()
        );
        return;
    }

    if verbosity == Verbosity::Quiet {
        return;
    }

    let harvested = format!(
        "{} {} from {} source {}",
        summary.keys,
        plural(summary.keys, "key", "keys"),
        summary.source_files,
        plural(summary.source_files, "file", "files")
    );

    let msg = if summary.updated.is_empty() {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Found {} - no languages configured in {}",
                harvested, APP_CONFIG_FILE_NAME
            )
            .green()
        )
    } else {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Localized {} for {} {}",
                harvested,
                summary.updated.len(),
                plural(summary.updated.len(), "language", "languages")
            )
            .green()
        )
    };
    let _ = writeln!(writer, "{}", msg);
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
