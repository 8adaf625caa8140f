use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::{CallRecord, SourceMapV3, TransformOutcome};
use crate::issues::{Issue, IssueDto};

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Directory to search for .clsrc.json from
    pub project_root_path: String,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub sourcemap: bool,
    pub breakpoints: BTreeMap<String, String>,
    pub enable_variants: bool,
    pub function_name: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            includes: c.includes,
            excludes: c.excludes,
            sourcemap: c.sourcemap,
            breakpoints: c.breakpoints,
            enable_variants: c.enable_variants,
            function_name: c.function_name,
        }
    }
}

// ============================================================
// Scan Types (scan_calls)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanCallsParams {
    /// JS/TS/JSX/TSX source text
    pub source: String,
    /// Call name to look for (default: "tw")
    pub function_name: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveItem {
    /// Breakpoint or variant name
    pub breakpoint: String,
    pub classes: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallItem {
    pub base_classes: String,
    /// In source order
    pub responsive_classes: Vec<ResponsiveItem>,
    /// Byte offsets `[start, end)` of the call in the source
    pub start: usize,
    pub end: usize,
}

impl From<&CallRecord> for CallItem {
    fn from(record: &CallRecord) -> Self {
        Self {
            base_classes: record.base_classes.clone(),
            responsive_classes: record
                .responsive_classes
                .iter()
                .map(|(breakpoint, classes)| ResponsiveItem {
                    breakpoint: breakpoint.to_string(),
                    classes: classes.to_string(),
                })
                .collect(),
            start: record.span.start,
            end: record.span.end,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanCallsResult {
    pub total_count: usize,
    pub items: Vec<CallItem>,
}

// ============================================================
// Transform Types (transform_source)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransformSourceParams {
    /// JS/TS/JSX/TSX source text
    pub source: String,
    /// File identifier used in the source map and warnings (default: "input.tsx")
    pub id: Option<String>,
    /// Directory to load .clsrc.json from (default: built-in configuration)
    pub project_root_path: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarningItem {
    pub rule: String,
    pub message: String,
    pub file_path: String,
    pub line: Option<usize>,
    pub col: Option<usize>,
}

impl From<IssueDto> for WarningItem {
    fn from(dto: IssueDto) -> Self {
        Self {
            rule: dto.rule,
            message: dto.message,
            file_path: dto.file_path,
            line: dto.line,
            col: dto.col,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransformSourceResult {
    /// False when the source had no call to rewrite
    pub changed: bool,
    pub code: String,
    /// Source Map v3 JSON, when source maps are enabled and the code changed
    pub map: Option<String>,
    pub call_count: usize,
    pub warnings: Vec<WarningItem>,
}

impl TransformSourceResult {
    pub fn from_outcome(
        source: String,
        outcome: TransformOutcome,
    ) -> serde_json::Result<Self> {
        match outcome {
            TransformOutcome::Unchanged => Ok(Self {
                changed: false,
                code: source,
                map: None,
                call_count: 0,
                warnings: Vec::new(),
            }),
            TransformOutcome::Rewritten(result) => Ok(Self {
                changed: true,
                map: result.map.as_ref().map(map_json).transpose()?,
                call_count: result.calls.len(),
                warnings: result
                    .warnings
                    .into_iter()
                    .map(|w| WarningItem::from(IssueDto::from(&Issue::UnknownBreakpoint(w))))
                    .collect(),
                code: result.code,
            }),
        }
    }
}

fn map_json(map: &SourceMapV3) -> serde_json::Result<String> {
    serde_json::to_string(map)
}
