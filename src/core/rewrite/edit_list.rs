use crate::core::Span;

/// Replace `span` of the original text with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub span: Span,
    pub replacement: String,
}

/// A point in the output that corresponds to a point in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    /// Byte offset in the rewritten text.
    pub generated: usize,
    /// Byte offset in the original text.
    pub original: usize,
}

/// Result of applying an edit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub code: String,
    /// Sorted by `generated`. One entry at the start of every untouched region
    /// and at each line start inside it, plus one per replacement.
    pub mappings: Vec<Mapping>,
}

/// Non-overlapping replacements keyed by original offsets.
///
/// Offsets always refer to the original text; nothing is spliced until
/// [`EditList::apply`], so the order edits are added in does not matter.
#[derive(Debug, Clone, Default)]
pub struct EditList {
    edits: Vec<Edit>,
}

impl EditList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a replacement. Returns `false` and leaves the list untouched if
    /// `span` overlaps an edit already in the list.
    pub fn replace(&mut self, span: Span, replacement: impl Into<String>) -> bool {
        if self.edits.iter().any(|edit| edit.span.overlaps(&span)) {
            return false;
        }
        self.edits.push(Edit {
            span,
            replacement: replacement.into(),
        });
        true
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Materialize the edits over `original` in one pass.
    pub fn apply(&self, original: &str) -> Rewritten {
        let mut ordered: Vec<&Edit> = self.edits.iter().collect();
        ordered.sort_by_key(|edit| edit.span.start);

        let mut code = String::with_capacity(original.len());
        let mut mappings = Vec::with_capacity(ordered.len() * 2 + 1);
        let mut cursor = 0;

        for edit in ordered {
            copy_untouched(original, cursor, edit.span.start, &mut code, &mut mappings);
            mappings.push(Mapping {
                generated: code.len(),
                original: edit.span.start,
            });
            code.push_str(&edit.replacement);
            cursor = edit.span.end;
        }
        copy_untouched(original, cursor, original.len(), &mut code, &mut mappings);

        Rewritten { code, mappings }
    }
}

fn copy_untouched(
    original: &str,
    start: usize,
    end: usize,
    code: &mut String,
    mappings: &mut Vec<Mapping>,
) {
    if start >= end {
        return;
    }
    let region = &original[start..end];

    mappings.push(Mapping {
        generated: code.len(),
        original: start,
    });
    for (newline, _) in region.match_indices('\n') {
        let line_start = newline + 1;
        if line_start < region.len() {
            mappings.push(Mapping {
                generated: code.len() + line_start,
                original: start + line_start,
            });
        }
    }

    code.push_str(region);
}

/// Render `value` as a double-quoted JavaScript string literal.
///
/// JSON string escaping covers quotes, backslashes and control characters;
/// U+2028 and U+2029 are escaped as well since pre-ES2019 engines reject them
/// inside string literals.
pub fn quote_js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string())
        .to_string()
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
