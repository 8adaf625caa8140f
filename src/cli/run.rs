use anyhow::{Result, bail};

use super::{
    args::Command,
    commands::{build::build, check::check, init::init, transform::transform},
    exit_status::ExitStatus,
    report,
};

/// Dispatch to the command handler and print its result.
///
/// # Returns
/// - `Ok(ExitStatus)` once the command ran, `Failure` when it found issues
/// - `Err` if the command could not run (e.g., invalid config, unreadable file)
pub fn run(command: Command) -> Result<ExitStatus> {
    let result = match command {
        Command::Check(cmd) => check(cmd)?,
        Command::Build(cmd) => build(cmd)?,
        Command::Transform(cmd) => transform(cmd)?,
        Command::Init => return init(),
        Command::Serve => {
            // Serve command is handled in main.rs before calling run()
            bail!("Serve command should be handled before run()")
        }
    };

    report::print(&result);
    Ok(result.exit_status())
}
