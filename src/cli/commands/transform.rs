use std::fs;

use anyhow::{Context, Result};

use super::super::args::TransformCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary, TransformSummary},
};
use crate::{
    core::{TransformOutcome, context::load_project_config, try_transform},
    issues::{Issue, ParseErrorIssue},
};

pub fn transform(cmd: TransformCommand) -> Result<CommandResult> {
    let config = load_project_config(&cmd.common)?.resolve();

    let source = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read file: {:?}", cmd.file))?;
    let id = cmd.file.to_string_lossy().replace('\\', "/");

    let (code, issues) = match try_transform(&source, &id, &config) {
        Ok(TransformOutcome::Rewritten(result)) => {
            let issues = result
                .warnings
                .into_iter()
                .map(Issue::UnknownBreakpoint)
                .collect();
            (result.code, issues)
        }
        Ok(TransformOutcome::Unchanged) => (source, Vec::new()),
        Err(e) => {
            let issue = Issue::ParseError(ParseErrorIssue {
                file_path: id,
                error: e.to_string(),
            });
            (source, vec![issue])
        }
    };

    // Warnings never fail this command.
    Ok(finish(
        CommandSummary::Transform(TransformSummary { code }),
        issues,
        1,
        false,
    ))
}
