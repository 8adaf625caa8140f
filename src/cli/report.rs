//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow cls-extended to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{BuildSummary, CheckSummary, CommandResult, CommandSummary};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
///
/// Issues are sorted and displayed with severity, location, source context,
/// and details.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message to a custom writer.
pub fn print_check_success_to<W: Write>(
    source_files: usize,
    summary: &CheckSummary,
    writer: &mut W,
) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {}, {} call {} - no issues found",
            source_files,
            plural(source_files, "file", "files"),
            summary.call_count,
            plural(summary.call_count, "site", "sites"),
        )
        .green()
    );
}

/// Print what a build wrote to a custom writer.
pub fn print_build_to<W: Write>(summary: &BuildSummary, writer: &mut W) {
    let written = summary.rewritten_count + summary.copied_count;
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} {} to {}",
            written,
            plural(written, "file", "files"),
            summary.out_dir.display()
        )
        .green()
    );
    let _ = writeln!(
        writer,
        "  - rewritten: {} ({} call {})",
        summary.rewritten_count,
        summary.call_count,
        plural(summary.call_count, "site", "sites"),
    );
    let _ = writeln!(writer, "  - copied: {}", summary.copied_count);
    if summary.map_count > 0 {
        let _ = writeln!(writer, "  - source maps: {}", summary.map_count);
    }
}

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check(summary) => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_check_success_to(
                    result.source_files_checked,
                    summary,
                    &mut io::stdout().lock(),
                );
            }
        }
        CommandSummary::Build(summary) => {
            report(&result.issues);
            print_build_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Transform(summary) => {
            // stdout carries the code only.
            let mut stdout = io::stdout().lock();
            let _ = stdout.write_all(summary.code.as_bytes());
            let _ = stdout.flush();
            report_to(&result.issues, &mut io::stderr().lock());
        }
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Source(ctx) => {
            let line = ctx.line();
            let col = ctx.col();
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                line,
                col
            );

            let caret_char = match severity {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };

            let _ = writeln!(
                writer,
                "{:>width$} {}",
                "",
                "|".blue(),
                width = max_line_width
            );
            let _ = writeln!(
                writer,
                "{:>width$} {} {}",
                line.to_string().blue(),
                "|".blue(),
                ctx.source_line,
                width = max_line_width
            );

            // col is 1-based
            let prefix = if col > 1 {
                ctx.source_line.chars().take(col - 1).collect::<String>()
            } else {
                String::new()
            };
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            let _ = writeln!(
                writer,
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                caret_char,
                width = max_line_width,
                padding = caret_padding
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            plural(total_problems, "problem", "problems"),
            total_errors,
            plural(total_errors, "error", "errors").red(),
            total_warnings,
            plural(total_warnings, "warning", "warnings").yellow()
        );
    }
}

fn sort_key<'a>(issue: &'a Issue) -> (&'a str, usize, usize) {
    match issue.location() {
        ReportLocation::Source(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
        ReportLocation::File { path } => (path, 0, 0),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    sort_key(a).cmp(&sort_key(b))
}

// ============================================================
// Tests
// ============================================================
