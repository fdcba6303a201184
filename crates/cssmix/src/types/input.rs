//! Style inputs accepted by the merger.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use super::value::{StyleValue, format_number, impl_number_from};
use crate::Result;

/// Anything that can be passed to [`merge`](crate::merge).
///
/// Strings are parsed as `key: value;` declarations, lists are flattened
/// in order, and mappings contribute their valid entries. Every other
/// variant is ignored at the top level.
///
/// # Example
///
/// ```
/// use cssmix::prelude::*;
///
/// let input = StyleInput::from(vec![
///     StyleInput::from("color: red;"),
///     StyleInput::from(StyleMapping::new().set("padding", 4)),
///     StyleInput::Null,
/// ]);
///
/// let merged = merge([input]);
/// assert_eq!(merged.get("color").unwrap(), &"red");
/// assert_eq!(merged.get("padding").unwrap(), &4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StyleInput {
    /// Nothing. Ignored.
    #[default]
    Undefined,
    /// Explicit null. Ignored.
    Null,
    /// A boolean. Ignored at the top level.
    Bool(bool),
    /// A bare number. Ignored at the top level.
    Number(f64),
    /// CSS-like declaration text, e.g. `"color: red; font-size: 16px;"`.
    Text(String),
    /// An ordered sequence of inputs.
    List(Vec<StyleInput>),
    /// A property mapping, possibly nested.
    Map(StyleMapping),
}

impl StyleInput {
    /// Decode an input from JSON text.
    ///
    /// Objects become mappings, arrays become lists and strings become
    /// declaration text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)?;
        Ok(Self::from(value))
    }

    /// Short name of the variant, used in trace output.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleInput::Undefined => "undefined",
            StyleInput::Null => "null",
            StyleInput::Bool(_) => "bool",
            StyleInput::Number(_) => "number",
            StyleInput::Text(_) => "string",
            StyleInput::List(_) => "list",
            StyleInput::Map(_) => "mapping",
        }
    }
}

impl_number_from!(StyleInput::Number, f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<bool> for StyleInput {
    fn from(value: bool) -> Self {
        StyleInput::Bool(value)
    }
}

impl From<&str> for StyleInput {
    fn from(value: &str) -> Self {
        StyleInput::Text(value.to_string())
    }
}

impl From<String> for StyleInput {
    fn from(value: String) -> Self {
        StyleInput::Text(value)
    }
}

impl From<&String> for StyleInput {
    fn from(value: &String) -> Self {
        StyleInput::Text(value.clone())
    }
}

impl From<()> for StyleInput {
    fn from(_: ()) -> Self {
        StyleInput::Undefined
    }
}

impl From<StyleMapping> for StyleInput {
    fn from(value: StyleMapping) -> Self {
        StyleInput::Map(value)
    }
}

impl From<StyleValue> for StyleInput {
    fn from(value: StyleValue) -> Self {
        match value {
            StyleValue::Undefined => StyleInput::Undefined,
            StyleValue::Null => StyleInput::Null,
            StyleValue::Bool(flag) => StyleInput::Bool(flag),
            StyleValue::Number(n) => StyleInput::Number(n),
            StyleValue::Str(s) => StyleInput::Text(s),
        }
    }
}

impl<T: Into<StyleInput>> From<Option<T>> for StyleInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleInput::Null, Into::into)
    }
}

impl<T: Into<StyleInput>> From<Vec<T>> for StyleInput {
    fn from(value: Vec<T>) -> Self {
        StyleInput::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<StyleInput>, const N: usize> From<[T; N]> for StyleInput {
    fn from(value: [T; N]) -> Self {
        StyleInput::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<JsonValue> for StyleInput {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => StyleInput::Null,
            JsonValue::Bool(flag) => StyleInput::Bool(flag),
            JsonValue::Number(n) => n.as_f64().map_or(StyleInput::Undefined, StyleInput::Number),
            JsonValue::String(s) => StyleInput::Text(s),
            JsonValue::Array(items) => StyleInput::List(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(object) => StyleInput::Map(StyleMapping::from(object)),
        }
    }
}

/// Value stored under a key of a [`StyleMapping`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEntry {
    /// A leaf value.
    Value(StyleValue),
    /// A nested mapping whose keys are joined onto the outer key.
    Nested(StyleMapping),
}

impl From<StyleValue> for StyleEntry {
    fn from(value: StyleValue) -> Self {
        StyleEntry::Value(value)
    }
}

impl From<StyleMapping> for StyleEntry {
    fn from(value: StyleMapping) -> Self {
        StyleEntry::Nested(value)
    }
}

/// An insertion-ordered mapping from property names to values.
///
/// Keys are kept exactly as given; canonicalization happens when the
/// mapping is merged. Setting an existing key replaces its value in place.
///
/// # Example
///
/// ```
/// use cssmix::prelude::*;
///
/// let mapping = StyleMapping::new()
///     .set("padding", "5px")
///     .nest("margin", StyleMapping::new().set("top", "10px"));
///
/// let merged = merge([mapping]);
/// assert_eq!(merged.get("marginTop").unwrap(), &"10px");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleMapping {
    entries: IndexMap<String, StyleEntry>,
}

impl StyleMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a leaf value, builder style.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value.into());
        self
    }

    /// Set a nested mapping, builder style.
    pub fn nest(mut self, key: impl Into<String>, nested: StyleMapping) -> Self {
        self.insert(key, nested);
        self
    }

    /// Insert an entry, returning the previous entry for the key.
    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<StyleEntry>) -> Option<StyleEntry> {
        self.entries.insert(key.into(), entry.into())
    }

    /// Get the entry for a key.
    pub fn get(&self, key: &str) -> Option<&StyleEntry> {
        self.entries.get(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<StyleEntry>> FromIterator<(K, V)> for StyleMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, entry) in iter {
            mapping.insert(key, entry);
        }
        mapping
    }
}

impl From<serde_json::Map<String, JsonValue>> for StyleMapping {
    fn from(object: serde_json::Map<String, JsonValue>) -> Self {
        object
            .into_iter()
            .map(|(key, value)| {
                let entry = match value {
                    JsonValue::Object(nested) => StyleEntry::Nested(StyleMapping::from(nested)),
                    other => StyleEntry::Value(json_leaf(other)),
                };
                (key, entry)
            })
            .collect()
    }
}

/// Convert a non-object JSON value into a leaf value.
///
/// Arrays have no structural meaning under a key, so they are flattened to
/// comma-joined text.
fn json_leaf(value: JsonValue) -> StyleValue {
    match value {
        JsonValue::Null => StyleValue::Null,
        JsonValue::Bool(flag) => StyleValue::Bool(flag),
        JsonValue::Number(n) => n.as_f64().map_or(StyleValue::Undefined, StyleValue::Number),
        JsonValue::String(s) => StyleValue::Str(s),
        array @ JsonValue::Array(_) => StyleValue::Str(json_text(&array)),
        JsonValue::Object(_) => StyleValue::Str("[object Object]".to_string()),
    }
}

fn json_text(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::Bool(flag) => flag.to_string(),
        JsonValue::Number(n) => n.as_f64().map(format_number).unwrap_or_default(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(items) => items.iter().map(json_text).collect::<Vec<_>>().join(","),
        JsonValue::Object(_) => "[object Object]".to_string(),
    }
}
