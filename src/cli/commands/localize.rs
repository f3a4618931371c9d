use anyhow::{Result, bail};

use super::super::args::LocalizeCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_summary;
use crate::config::{APP_MANIFEST_FILE_NAME, LocalizeOptions, is_app_dir};
use crate::core::{Log, localize_with};

pub fn localize(cmd: LocalizeCommand) -> Result<ExitStatus> {
    let verbosity = cmd.common.verbosity();
    let log = Log::new(verbosity);

    if !is_app_dir(&cmd.path) {
        bail!(
            "'{}' is not an application directory (no {} found)",
            cmd.path.display(),
            APP_MANIFEST_FILE_NAME
        );
    }

    let options = LocalizeOptions {
        marker: cmd.marker,
        extension: cmd.extension.trim_start_matches('.').to_string(),
        ..Default::default()
    };

    let summary = localize_with(&cmd.path, &options, &log)?;
    print_summary(&summary, verbosity);

    Ok(ExitStatus::from(&summary))
}
