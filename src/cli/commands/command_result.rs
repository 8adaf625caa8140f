use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Build(BuildSummary),
    Transform(TransformSummary),
}

#[derive(Debug, Default)]
pub struct CheckSummary {
    /// Call sites that would be rewritten.
    pub call_count: usize,
}

#[derive(Debug)]
pub struct BuildSummary {
    pub out_dir: PathBuf,
    pub rewritten_count: usize,
    pub copied_count: usize,
    /// Source map sidecars written next to rewritten files.
    pub map_count: usize,
    pub call_count: usize,
}

#[derive(Debug)]
pub struct TransformSummary {
    /// Text printed to stdout, the original source when nothing changed.
    pub code: String,
}

/// Result of running a cls-extended command
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 is returned when any issue was found.
    /// If false, always exit 0 (the command's output is still usable).
    pub exit_on_issues: bool,
    /// All issues found, sorted.
    pub issues: Vec<Issue>,
    /// Number of files that failed to read or parse.
    pub parse_error_count: usize,
    /// Number of source files that were processed.
    pub source_files_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.exit_on_issues && !self.issues.is_empty() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
