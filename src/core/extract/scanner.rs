//! Call-site scanner over the swc AST.
//!
//! Matching is purely lexical: a callee qualifies when it is the reserved
//! identifier, a member access on it (`tw.div(...)`, `tw["div"](...)`), or a
//! member access ending in it (`styles.tw(...)`). No scope analysis is done,
//! so a local binding that shadows the reserved name is still matched.

use anyhow::Result;
use swc_ecma_ast::{
    CallExpr, Callee, Expr, ExprOrSpread, Lit, MemberProp, ObjectLit, Prop, PropName,
    PropOrSpread,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::config::DEFAULT_FUNCTION_NAME;
use crate::core::extract::{CallRecord, ResponsiveClasses};
use crate::core::parsers::jsx::{ParsedJSX, parse_jsx_source};

/// File name handed to the parser when the caller has none.
const ANONYMOUS_FILE: &str = "input.tsx";

/// Find all `tw(...)` calls in `source`.
///
/// Never fails: unparseable source yields no records.
pub fn scan(source: &str) -> Vec<CallRecord> {
    scan_with(source, DEFAULT_FUNCTION_NAME)
}

/// Like [`scan`], matching `function_name` instead of `tw`.
pub fn scan_with(source: &str, function_name: &str) -> Vec<CallRecord> {
    parse_calls(source, ANONYMOUS_FILE, function_name).unwrap_or_default()
}

/// Parse `source` and collect its call records, surfacing parse failures.
///
/// `file_path` only labels parser errors.
pub fn parse_calls(source: &str, file_path: &str, function_name: &str) -> Result<Vec<CallRecord>> {
    let parsed = parse_jsx_source(source, file_path)?;
    let mut scanner = CallScanner::new(&parsed, function_name);
    parsed.module.visit_with(&mut scanner);
    Ok(scanner.finish())
}

/// Visitor collecting call records from one parsed module.
pub struct CallScanner<'a> {
    parsed: &'a ParsedJSX,
    function_name: &'a str,
    records: Vec<CallRecord>,
}

impl<'a> CallScanner<'a> {
    pub fn new(parsed: &'a ParsedJSX, function_name: &'a str) -> Self {
        Self {
            parsed,
            function_name,
            records: Vec::new(),
        }
    }

    /// Records in document order.
    pub fn finish(mut self) -> Vec<CallRecord> {
        self.records.sort_by_key(|record| record.span.start);
        self.records
    }

    fn is_target_callee(&self, callee: &Callee) -> bool {
        let Callee::Expr(expr) = callee else {
            return false;
        };

        match &**expr {
            Expr::Ident(ident) => ident.sym.as_str() == self.function_name,
            Expr::Member(member) => {
                let on_target = matches!(
                    &*member.obj,
                    Expr::Ident(obj) if obj.sym.as_str() == self.function_name
                );
                let names_target = matches!(
                    &member.prop,
                    MemberProp::Ident(prop) if prop.sym.as_str() == self.function_name
                );
                on_target || names_target
            }
            _ => false,
        }
    }

    /// Build a record from a qualifying call, or `None` if its base argument
    /// is missing or not a string literal.
    fn extract_record(&self, node: &CallExpr) -> Option<CallRecord> {
        let base_classes = node.args.first().and_then(string_literal)?;

        let mut responsive_classes = ResponsiveClasses::new();
        if let Some(arg) = node.args.get(1)
            && arg.spread.is_none()
            && let Expr::Object(obj) = &*arg.expr
        {
            collect_responsive_classes(obj, &mut responsive_classes);
        }

        Some(CallRecord {
            base_classes,
            responsive_classes,
            span: self.parsed.offsets(node.span),
        })
    }
}

impl Visit for CallScanner<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if self.is_target_callee(&node.callee)
            && let Some(record) = self.extract_record(node)
        {
            // The whole call gets replaced, so nothing inside it may produce
            // a second, overlapping record.
            self.records.push(record);
            return;
        }

        node.visit_children_with(self);
    }
}

/// Value of a non-spread plain string literal argument.
fn string_literal(arg: &ExprOrSpread) -> Option<String> {
    if arg.spread.is_some() {
        return None;
    }
    match &*arg.expr {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
        _ => None,
    }
}

/// Keep `key: "literal"` properties with identifier or string keys, drop the rest.
fn collect_responsive_classes(obj: &ObjectLit, out: &mut ResponsiveClasses) {
    for prop in &obj.props {
        let PropOrSpread::Prop(prop) = prop else {
            continue;
        };
        if let Prop::KeyValue(kv) = &**prop
            && let Some(breakpoint) = prop_key(&kv.key)
            && let Expr::Lit(Lit::Str(s)) = &*kv.value
            && let Some(classes) = s.value.as_str()
        {
            out.insert(breakpoint, classes);
        }
    }
}

fn prop_key(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s
            .value
            .as_str()
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string()),
        _ => None,
    }
}
