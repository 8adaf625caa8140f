//! Call-site extraction.
//!
//! Walks a parsed module and collects every qualifying `tw(...)` call as a
//! `CallRecord` in document order. Calls whose arguments cannot be resolved
//! statically are skipped here and left for the runtime implementation.

pub mod call_record;
pub mod scanner;


pub use call_record::{CallRecord, ResponsiveClasses};
pub use scanner::{CallScanner, parse_calls, scan, scan_with};
