//! Issue types reported by the transform and its hosts.
//!
//! The transform never logs. Every diagnostic it produces is one of these
//! values, returned to the caller, which decides whether to print, collect or
//! fail on it.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::core::SourceContext;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnknownBreakpoint,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnknownBreakpoint => write!(f, "unknown-breakpoint"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A responsive key that is not a configured breakpoint while variants are
/// disabled. The key was dropped from the generated string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnknownBreakpointIssue {
    /// Location of the call the key belongs to.
    pub context: SourceContext,
    pub breakpoint: String,
}

impl UnknownBreakpointIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnknownBreakpoint
    }
}

/// A source file the parser rejected. The file is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A diagnostic found while scanning or transforming.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Issue {
    UnknownBreakpoint(UnknownBreakpointIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnknownBreakpoint(_) => UnknownBreakpointIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::UnknownBreakpoint(_) => UnknownBreakpointIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }

    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(context) => context.file_path(),
            ReportLocation::File { path } => path,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for UnknownBreakpointIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("Unknown breakpoint: {}", self.breakpoint)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("add it to \"breakpoints\" or set \"enableVariants\": true")
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "the \"{}\" classes were left out of the generated string",
            self.breakpoint
        ))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        "File could not be parsed".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.error.clone())
    }
}

// ============================================================
// Serializable view (MCP)
// ============================================================

/// Flat, serializable form of an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDto {
    pub rule: String,
    pub severity: String,
    pub message: String,
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
}

impl From<&Issue> for IssueDto {
    fn from(issue: &Issue) -> Self {
        let (line, col) = match issue.location() {
            ReportLocation::Source(context) => (Some(context.line()), Some(context.col())),
            ReportLocation::File { .. } => (None, None),
        };
        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity().to_string(),
            message: issue.message(),
            file_path: issue.file_path().to_string(),
            line,
            col,
        }
    }
}
