//! Source Map v3 encoding of rewrite mappings.
//!
//! Columns are UTF-16 code units, which is what browsers and bundlers expect.
//! Segments follow the Source Map Revision 3 layout: lines separated by `;`,
//! segments by `,`, each segment holding the generated column, source index,
//! original line and original column as base64 VLQ deltas from the previous
//! segment (the generated column resets at every line).

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::LineIndex;
use crate::core::rewrite::Mapping;

const BASE64_DIGITS: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// A version 3 source map relating a rewritten file to its original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMapV3 {
    pub version: u8,
    pub file: String,
    pub sources: Vec<String>,
    pub sources_content: Vec<String>,
    pub names: Vec<String>,
    pub mappings: String,
}

impl SourceMapV3 {
    /// Encode `mappings` (sorted by generated offset) for one source file.
    pub fn from_mappings(id: &str, original: &str, generated: &str, mappings: &[Mapping]) -> Self {
        let original_index = LineIndex::new(original);
        let generated_index = LineIndex::new(generated);

        let mut encoded = String::new();
        let mut generated_line = 0;
        let mut previous_generated_col = 0;
        let mut previous_source_line = 0;
        let mut previous_source_col = 0;
        let mut first_in_line = true;

        for mapping in mappings {
            let (line, col) = generated_index.utf16_position(mapping.generated);
            let (source_line, source_col) = original_index.utf16_position(mapping.original);

            while generated_line < line {
                encoded.push(';');
                generated_line += 1;
                previous_generated_col = 0;
                first_in_line = true;
            }
            if !first_in_line {
                encoded.push(',');
            }
            first_in_line = false;

            encode_vlq(&mut encoded, col as i64 - previous_generated_col as i64);
            encode_vlq(&mut encoded, 0);
            encode_vlq(&mut encoded, source_line as i64 - previous_source_line as i64);
            encode_vlq(&mut encoded, source_col as i64 - previous_source_col as i64);

            previous_generated_col = col;
            previous_source_line = source_line;
            previous_source_col = source_col;
        }

        Self {
            version: 3,
            file: id.to_string(),
            sources: vec![id.to_string()],
            sources_content: vec![original.to_string()],
            names: Vec::new(),
            mappings: encoded,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize source map")
    }
}

/// Append one base64 VLQ value.
fn encode_vlq(out: &mut String, value: i64) {
    let mut vlq = if value < 0 {
        ((-value) << 1) | 1
    } else {
        value << 1
    };
    loop {
        let mut digit = vlq & 0b11111;
        vlq >>= 5;
        if vlq > 0 {
            digit |= 0b100000;
        }
        out.push(BASE64_DIGITS[digit as usize] as char);
        if vlq == 0 {
            break;
        }
    }
}
