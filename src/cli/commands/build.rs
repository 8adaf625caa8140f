use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::super::args::BuildCommand;
use super::{
    helper::finish,
    {BuildSummary, CommandResult, CommandSummary},
};
use crate::{
    core::{FileTransform, ProjectContext, TransformOutcome},
    issues::Issue,
};

/// What was written for one input file.
enum Written {
    Rewritten { calls: usize, with_map: bool },
    Copied,
}

pub fn build(cmd: BuildCommand) -> Result<CommandResult> {
    let mut ctx = ProjectContext::new(&cmd.common)?;

    fs::create_dir_all(&cmd.out_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", cmd.out_dir))?;

    // Never feed a previous build back in when the output lives under the root.
    if let Some(prefix) = nested_prefix(&ctx.root_dir, &cmd.out_dir) {
        ctx.files.retain(|file| !file.relative.starts_with(&prefix));
    }

    let transforms = ctx.transforms();
    let written = transforms
        .par_iter()
        .map(|t| write_output(&cmd.out_dir, t))
        .collect::<Result<Vec<_>>>()?;

    let mut summary = BuildSummary {
        out_dir: cmd.out_dir.clone(),
        rewritten_count: 0,
        copied_count: 0,
        map_count: 0,
        call_count: 0,
    };
    for entry in written {
        match entry {
            Written::Rewritten { calls, with_map } => {
                summary.rewritten_count += 1;
                summary.call_count += calls;
                if with_map {
                    summary.map_count += 1;
                }
            }
            Written::Copied => summary.copied_count += 1,
        }
    }

    let mut all_issues: Vec<Issue> = transforms.iter().flat_map(|t| t.issues()).collect();
    all_issues.extend(
        ctx.transform_errors()
            .iter()
            .cloned()
            .map(Issue::ParseError),
    );

    Ok(finish(
        CommandSummary::Build(summary),
        all_issues,
        ctx.files.len(),
        true,
    ))
}

fn write_output(out_dir: &Path, transform: &FileTransform) -> Result<Written> {
    let target = out_dir.join(&transform.file.relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    match &transform.outcome {
        TransformOutcome::Unchanged => {
            fs::write(&target, &transform.source)
                .with_context(|| format!("Failed to write file: {:?}", target))?;
            Ok(Written::Copied)
        }
        TransformOutcome::Rewritten(result) => {
            fs::write(&target, &result.code)
                .with_context(|| format!("Failed to write file: {:?}", target))?;

            if let Some(map) = &result.map {
                let map_path = map_path_for(&target);
                fs::write(&map_path, map.to_json()?)
                    .with_context(|| format!("Failed to write source map: {:?}", map_path))?;
            }

            Ok(Written::Rewritten {
                calls: result.calls.len(),
                with_map: result.map.is_some(),
            })
        }
    }
}

/// `app.tsx` -> `app.tsx.map`
fn map_path_for(target: &Path) -> PathBuf {
    let mut path = target.as_os_str().to_owned();
    path.push(".map");
    PathBuf::from(path)
}

/// Relative prefix (`dist/`) of `out_dir` when it sits inside `root`.
fn nested_prefix(root: &Path, out_dir: &Path) -> Option<String> {
    let root = root.canonicalize().ok()?;
    let out_dir = out_dir.canonicalize().ok()?;
    let relative = out_dir.strip_prefix(&root).ok()?;
    if relative.as_os_str().is_empty() {
        return None;
    }
    Some(format!("{}/", relative.to_string_lossy().replace('\\', "/")))
}
