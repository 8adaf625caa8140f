//! Top-level transform entry.
//!
//! Ties the scanner, the generator and the rewriter together for one source
//! text. Safe to call from many threads at once: every call parses into its
//! own swc state and only reads the shared configuration.

use anyhow::Result;

use crate::config::ResolvedConfig;
use crate::core::extract::parse_calls;
use crate::core::rewrite::{EditList, SourceMapV3, quote_js_string};
use crate::core::{CallRecord, LineIndex, generate};
use crate::issues::UnknownBreakpointIssue;

/// Output of a transform that replaced at least one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub code: String,
    /// Present when source maps are enabled.
    pub map: Option<SourceMapV3>,
    /// Call sites that were rewritten, in document order.
    pub calls: Vec<CallRecord>,
    /// Breakpoints dropped from the generated strings.
    pub warnings: Vec<UnknownBreakpointIssue>,
}

/// Whether the source needs to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    /// No qualifying call; the host should keep the source as it is.
    Unchanged,
    Rewritten(TransformResult),
}

impl TransformOutcome {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, TransformOutcome::Unchanged)
    }

    /// The resulting code, borrowing `source` when nothing changed.
    pub fn code<'a>(&'a self, source: &'a str) -> &'a str {
        match self {
            TransformOutcome::Unchanged => source,
            TransformOutcome::Rewritten(result) => &result.code,
        }
    }
}

/// Replace every qualifying call in `source` with its static class string.
///
/// `id` is an opaque file identifier; it labels the source map and the
/// warnings and is otherwise unused. Unparseable source is `Unchanged`.
///
/// # Examples
///
/// ```
/// use cls_extended::config::ResolvedConfig;
/// use cls_extended::core::{TransformOutcome, transform};
///
/// let outcome = transform(r#"tw("p-4", { md: "p-6" })"#, "app.tsx", &ResolvedConfig::default());
/// let TransformOutcome::Rewritten(result) = outcome else { panic!() };
/// assert_eq!(result.code, r#""p-4 md:p-6""#);
/// ```
pub fn transform(source: &str, id: &str, config: &ResolvedConfig) -> TransformOutcome {
    try_transform(source, id, config).unwrap_or(TransformOutcome::Unchanged)
}

/// Like [`transform`], but surfaces parse errors instead of treating the
/// source as having nothing to rewrite.
///
/// Source that does not mention the function name is never parsed, so it
/// can't produce an error.
pub fn try_transform(source: &str, id: &str, config: &ResolvedConfig) -> Result<TransformOutcome> {
    // Without the name in the text there cannot be a call to it.
    if !source.contains(config.function_name.as_str()) {
        return Ok(TransformOutcome::Unchanged);
    }

    let calls = parse_calls(source, id, &config.function_name)?;
    if calls.is_empty() {
        return Ok(TransformOutcome::Unchanged);
    }

    let line_index = LineIndex::new(source);
    let mut edits = EditList::new();
    let mut warnings = Vec::new();

    for call in &calls {
        let generated = generate(call, config);

        warnings.extend(generated.unknown_breakpoints.into_iter().map(|breakpoint| {
            UnknownBreakpointIssue {
                context: line_index.context(id, call.span.start),
                breakpoint,
            }
        }));

        let accepted = edits.replace(call.span, quote_js_string(&generated.value));
        debug_assert!(accepted, "scanner produced overlapping call spans");
    }

    let rewritten = edits.apply(source);
    let map = config
        .sourcemap
        .then(|| SourceMapV3::from_mappings(id, source, &rewritten.code, &rewritten.mappings));

    Ok(TransformOutcome::Rewritten(TransformResult {
        code: rewritten.code,
        map,
        calls,
        warnings,
    }))
}
