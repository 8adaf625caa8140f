use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{BytePos, FileName, GLOBALS, Globals, SourceMap, Span as SwcSpan};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::core::data::Span;

/// A parsed module plus what is needed to turn swc spans back into offsets.
pub struct ParsedJSX {
    pub module: Module,
    /// Position of the first byte of this file inside the swc source map.
    pub start_pos: BytePos,
    /// Bytes dropped ahead of `start_pos` (a leading BOM, which swc strips).
    pub skipped_prefix: usize,
}

impl ParsedJSX {
    /// Convert an swc span into a byte range of the original text.
    pub fn offsets(&self, span: SwcSpan) -> Span {
        Span {
            start: (span.lo.0 - self.start_pos.0) as usize + self.skipped_prefix,
            end: (span.hi.0 - self.start_pos.0) as usize + self.skipped_prefix,
        }
    }
}

/// Parse JSX/TSX source code string into an AST.
///
/// Every call owns a fresh `SourceMap` and runs under its own `GLOBALS`, so
/// parses on different threads never share state.
pub fn parse_jsx_source(code: &str, file_path: &str) -> Result<ParsedJSX> {
    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.to_string());

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e.kind()))?;

        // Recovered errors still mean the file is not valid source.
        if let Some(e) = parser.take_errors().first() {
            return Err(anyhow!("Failed to parse {}: {:?}", file_path, e.kind()));
        }

        Ok(ParsedJSX {
            module,
            start_pos: source_file.start_pos,
            skipped_prefix: code.len().saturating_sub(source_file.src.len()),
        })
    })
}
