//! Class string synthesis.
//!
//! Pure function from a call record and the resolved configuration to the
//! static class string that replaces the call.

use crate::config::ResolvedConfig;
use crate::core::CallRecord;

/// Output of [`generate`] for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClasses {
    /// The composed class string.
    pub value: String,
    /// Breakpoints dropped because they are unknown and variants are disabled,
    /// in the order they appeared.
    pub unknown_breakpoints: Vec<String>,
}

/// Compose the class string for one call.
///
/// The base classes come first, then every responsive entry in its source
/// order with each of its tokens prefixed by `<breakpoint>:`. Pieces that are
/// empty contribute no separator. Repeated tokens are kept.
///
/// # Examples
///
/// ```
/// use cls_extended::config::ResolvedConfig;
/// use cls_extended::core::{CallRecord, Span, generate};
///
/// let record = CallRecord {
///     base_classes: "p-4".to_string(),
///     responsive_classes: [("md", "p-6 p-8")].into_iter().collect(),
///     span: Span::new(0, 1),
/// };
/// let generated = generate(&record, &ResolvedConfig::default());
/// assert_eq!(generated.value, "p-4 md:p-6 md:p-8");
/// ```
pub fn generate(record: &CallRecord, config: &ResolvedConfig) -> GeneratedClasses {
    let mut pieces: Vec<String> = vec![record.base_classes.clone()];
    let mut unknown_breakpoints = Vec::new();

    for (breakpoint, classes) in record.responsive_classes.iter() {
        if !config.breakpoints.contains_key(breakpoint) && !config.enable_variants {
            unknown_breakpoints.push(breakpoint.to_string());
            continue;
        }

        let prefixed = classes
            .split_whitespace()
            .map(|class| format!("{breakpoint}:{class}"))
            .collect::<Vec<_>>()
            .join(" ");
        pieces.push(prefixed);
    }

    let value = pieces
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    GeneratedClasses {
        value,
        unknown_breakpoints,
    }
}
