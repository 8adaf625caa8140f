//! Span-accurate text replacement.
//!
//! Replacements are collected in an [`EditList`] keyed by original offsets and
//! materialized in a single pass, which also derives the offset mappings that
//! [`SourceMapV3`] encodes.

pub mod edit_list;
pub mod source_map;

pub use edit_list::{Edit, EditList, Mapping, Rewritten, quote_js_string};
pub use source_map::SourceMapV3;
