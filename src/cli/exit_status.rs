use std::process::ExitCode;

/// Exit status of the `cls-extended` binary.
///
/// - `Success` (0): Command completed, nothing to report
/// - `Failure` (1): Command completed but reported unknown breakpoints or unparseable files
/// - `Error` (2): Command could not run (invalid config, unreadable input, write failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
