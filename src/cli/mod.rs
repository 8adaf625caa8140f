//! Command-line interface layer.
//!
//! Commands build a `CommandResult`; printing and exit status are derived
//! from it here so the commands themselves stay free of output concerns.

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(ExitStatus::Success.into());
    };

    Ok(run::run(command)?.into())
}
