use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

mod args;
mod commands;
mod exit_status;
mod report;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(command) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Localize(cmd) => commands::localize::localize(cmd),
    }
}
