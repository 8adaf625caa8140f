use std::{cell::OnceCell, fs, path::PathBuf};

use anyhow::{Result, anyhow};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, ResolvedConfig, load_config},
    core::{
        file_scanner::{SourceFile, scan_files},
        transform::{TransformOutcome, try_transform},
    },
    issues::{Issue, ParseErrorIssue},
};

/// One discovered file after the transform ran over it.
pub struct FileTransform {
    pub file: SourceFile,
    /// Original text as read from disk.
    pub source: String,
    pub outcome: TransformOutcome,
}

impl FileTransform {
    /// Unknown breakpoint warnings of this file as reportable issues.
    pub fn issues(&self) -> impl Iterator<Item = Issue> + '_ {
        let warnings = match &self.outcome {
            TransformOutcome::Rewritten(result) => result.warnings.as_slice(),
            TransformOutcome::Unchanged => &[][..],
        };
        warnings.iter().cloned().map(Issue::UnknownBreakpoint)
    }
}

/// Everything a host command needs about one project.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--function-name cls`)
/// 2. `.clsrc.json` config file
/// 3. Built-in defaults
pub struct ProjectContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// The option set every file is transformed with.
    pub resolved: ResolvedConfig,

    /// Directory the config was searched from and files are scanned under.
    pub root_dir: PathBuf,

    /// Files selected by the include/exclude filters, sorted.
    pub files: Vec<SourceFile>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Initialized on first call to `transforms()`.
    transforms: OnceCell<Vec<FileTransform>>,

    /// Files that could not be read or parsed. Populated with `transforms`.
    transform_errors: OnceCell<Vec<ParseErrorIssue>>,
}

impl ProjectContext {
    /// Load configuration and discover source files.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or an override produces an
    /// invalid configuration.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        if !root_dir.is_dir() {
            return Err(anyhow!("Source root is not a directory: {:?}", root_dir));
        }

        let config = load_project_config(common_args)?;

        let scan_result = scan_files(&root_dir, &config.includes, &config.excludes, verbose);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            resolved: config.resolve(),
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            transforms: OnceCell::new(),
            transform_errors: OnceCell::new(),
        })
    }

    /// Read and transform every discovered file (lazy initialization).
    ///
    /// Files are read and transformed in parallel; each transform parses into
    /// its own swc state, so only the resolved configuration is shared.
    /// Unreadable files are left out and unparseable ones kept as `Unchanged`;
    /// both are reported through `transform_errors()`.
    pub fn transforms(&self) -> &[FileTransform] {
        self.transforms.get_or_init(|| {
            let resolved = &self.resolved;
            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|file| {
                    let result = fs::read_to_string(&file.path)
                        .map_err(|e| anyhow!("Failed to read file: {}", e))
                        .map(|source| {
                            let outcome = try_transform(&source, &file.relative, resolved);
                            (source, outcome)
                        });
                    (file, result)
                })
                .collect();

            let mut transforms = Vec::with_capacity(results.len());
            let mut errors = Vec::new();

            for (file, result) in results {
                let mut report = |e: anyhow::Error| {
                    if self.verbose {
                        eprintln!("Warning: {} - {}", file.relative, e);
                    }
                    errors.push(ParseErrorIssue {
                        file_path: file.relative.clone(),
                        error: e.to_string(),
                    });
                };

                let (source, outcome) = match result {
                    Ok(read) => read,
                    Err(e) => {
                        report(e);
                        continue;
                    }
                };
                // Unparseable files pass through unchanged.
                let outcome = outcome.unwrap_or_else(|e| {
                    report(e);
                    TransformOutcome::Unchanged
                });

                transforms.push(FileTransform {
                    file: file.clone(),
                    source,
                    outcome,
                });
            }

            let _ = self.transform_errors.set(errors);
            transforms
        })
    }

    /// Files that failed to read or parse.
    ///
    /// Populated when `transforms()` is first called.
    pub fn transform_errors(&self) -> &[ParseErrorIssue] {
        self.transform_errors.get_or_init(Vec::new)
    }
}

/// Load the config file for `common_args.source_root` and apply CLI overrides.
pub fn load_project_config(common_args: &CommonArgs) -> Result<Config> {
    let root_dir = common_args
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let config_result = load_config(&root_dir)?;
    if common_args.verbose && !config_result.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    let mut config = config_result.config;

    if common_args.no_sourcemap {
        config.sourcemap = false;
    }
    if common_args.enable_variants {
        config.enable_variants = true;
    }
    if let Some(ref function_name) = common_args.function_name {
        config.function_name = function_name.clone();
        config.validate()?;
    }

    Ok(config)
}
