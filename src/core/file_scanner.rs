//! Source file discovery.
//!
//! Hosts apply the include/exclude filters here before any file reaches the
//! transform. Patterns are matched against paths relative to the source root,
//! always with `/` separators.

use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// A file selected for transformation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    /// Path relative to the source root, `/`-separated. Used as the file id.
    pub relative: String,
    pub path: PathBuf,
}

/// Result of scanning files.
pub struct ScanResult {
    /// Sorted by relative path.
    pub files: Vec<SourceFile>,
    pub skipped_count: usize,
}

pub fn scan_files(
    source_root: &Path,
    includes: &[String],
    excludes: &[String],
    verbose: bool,
) -> ScanResult {
    let include_patterns = compile_patterns(includes, "include", verbose);
    let exclude_patterns = compile_patterns(excludes, "exclude", verbose);

    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(source_root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(source_root) else {
            continue;
        };
        let relative = relative.to_string_lossy().replace('\\', "/");

        if !include_patterns.iter().any(|p| p.matches(&relative)) {
            continue;
        }
        if exclude_patterns.iter().any(|p| p.matches(&relative)) {
            continue;
        }

        files.push(SourceFile {
            relative,
            path: path.to_path_buf(),
        });
    }

    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}

fn compile_patterns(patterns: &[String], kind: &str, verbose: bool) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid {} pattern '{}': {}",
                        "warning:".bold().yellow(),
                        kind,
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect()
}
