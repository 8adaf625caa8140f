//! Call records produced by the call-site scanner.
//!
//! A `CallRecord` is the handoff point between the scanner and the generator:
//! it holds the literal arguments of one `tw(...)` call and the span of the
//! whole call in the original text.

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::core::Span;

/// Ordered breakpoint → class-list mapping taken from the second argument.
///
/// Keeps the source order of the object literal's properties. Inserting a key
/// that is already present replaces its value in place, so a duplicated key
/// keeps the position of its first occurrence with the value of its last one.
/// That is the order `Object.entries` reports for the same literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponsiveClasses(Vec<(String, String)>);

impl ResponsiveClasses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, breakpoint: impl Into<String>, classes: impl Into<String>) {
        let breakpoint = breakpoint.into();
        let classes = classes.into();
        match self.0.iter_mut().find(|(key, _)| *key == breakpoint) {
            Some((_, existing)) => *existing = classes,
            None => self.0.push((breakpoint, classes)),
        }
    }

    pub fn get(&self, breakpoint: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == breakpoint)
            .map(|(_, classes)| classes.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResponsiveClasses {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut classes = Self::new();
        for (k, v) in iter {
            classes.insert(k, v);
        }
        classes
    }
}

/// Serialized as a JSON object in insertion order.
impl Serialize for ResponsiveClasses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (breakpoint, classes) in &self.0 {
            map.serialize_entry(breakpoint, classes)?;
        }
        map.end()
    }
}

/// One recognized `tw(...)` invocation.
///
/// # Examples
///
/// ```ignore
/// // base_classes = "p-4", responsive_classes = [("md", "p-6 p-8")]
/// tw("p-4", { md: "p-6 p-8" })
///
/// // Namespaced spellings produce the same record shape
/// tw.div("p-4")
/// styles.tw("p-4", { lg: "p-8" })
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    /// The literal first argument, verbatim.
    pub base_classes: String,
    /// Literal properties of the second argument, in source order.
    pub responsive_classes: ResponsiveClasses,
    /// The whole call expression, closing parenthesis included.
    pub span: Span,
}
