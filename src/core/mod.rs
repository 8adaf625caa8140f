//! Core transform engine.
//!
//! The pipeline is strictly one way:
//! source text → syntax tree → ordered call records → class strings → rewritten text.
//!
//! ## Module Structure
//!
//! - `data`: Spans, source locations and the line index shared by all stages
//! - `parsers`: swc-based JSX/TSX parser
//! - `extract`: Call-site scanner producing `CallRecord`s
//! - `generate`: Class string synthesis from a call record and the resolved config
//! - `rewrite`: Edit list materialization and source map generation
//! - `transform`: Top-level entry tying the stages together
//! - `file_scanner`: Include/exclude file discovery for hosts
//! - `context`: Project-level configuration, file list and parallel transform

pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod generate;
pub mod parsers;
pub mod rewrite;
pub mod transform;

pub use context::{FileTransform, ProjectContext};
pub use data::{LineIndex, SourceContext, SourceLocation, Span};
pub use extract::{CallRecord, ResponsiveClasses, parse_calls, scan, scan_with};
pub use generate::{GeneratedClasses, generate};
pub use rewrite::{EditList, Rewritten, SourceMapV3};
pub use transform::{TransformOutcome, TransformResult, transform, try_transform};
