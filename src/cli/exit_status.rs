use std::process::ExitCode;

use crate::core::LocalizeSummary;

/// Exit status of a `lexi` invocation.
///
/// - `Success` (0): every configured language was updated
/// - `Failure` (1): at least one language could not be updated
/// - `Error` (2): the run could not start (not an application directory, bad config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<&LocalizeSummary> for ExitStatus {
    fn from(summary: &LocalizeSummary) -> Self {
        if summary.is_success() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
