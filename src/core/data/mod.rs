//! Core data types used across all pipeline stages.
//!
//! ## Module Structure
//!
//! - `source`: Spans, source locations and the byte-offset line index

pub mod source;

pub use source::{LineIndex, SourceContext, SourceLocation, Span};
