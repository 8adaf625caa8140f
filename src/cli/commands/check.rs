use anyhow::{Ok, Result};

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CheckSummary, CommandResult, CommandSummary},
};
use crate::{
    core::{ProjectContext, TransformOutcome},
    issues::Issue,
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let transforms = ctx.transforms();

    let mut all_issues: Vec<Issue> = transforms.iter().flat_map(|t| t.issues()).collect();
    all_issues.extend(
        ctx.transform_errors()
            .iter()
            .cloned()
            .map(Issue::ParseError),
    );

    let call_count = transforms
        .iter()
        .map(|t| match &t.outcome {
            TransformOutcome::Rewritten(result) => result.calls.len(),
            TransformOutcome::Unchanged => 0,
        })
        .sum();

    Ok(finish(
        CommandSummary::Check(CheckSummary { call_count }),
        all_issues,
        ctx.files.len(),
        true,
    ))
}
