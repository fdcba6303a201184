//! The merged, flat style map.

use indexmap::IndexMap;
use serde::Serialize;

use super::value::StyleOutput;
use crate::canonical::to_kebab;

/// Flat mapping from canonical property name to value.
///
/// Keys keep the position of their first insertion; later writes replace
/// the value in place. Two maps compare equal when they hold the same
/// key/value pairs, regardless of order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleMap {
    properties: IndexMap<String, StyleOutput>,
}

impl StyleMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleOutput>) -> Option<StyleOutput> {
        self.properties.insert(key.into(), value.into())
    }

    /// Get a property value.
    pub fn get(&self, key: &str) -> Option<&StyleOutput> {
        self.properties.get(key)
    }

    /// Check if a property is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleOutput)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over property names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Render the map as inline CSS declaration text.
    ///
    /// Property names are written in kebab-case (custom properties are left
    /// untouched), so the output can be fed back through the merger. Entries
    /// that would not survive that round trip, a value containing `;` or a
    /// name containing `;` or `:`, are left out and reported at trace level.
    ///
    /// ```
    /// use cssmix::cssmix;
    ///
    /// let merged = cssmix!("font-size: 12px", "--accent: teal");
    /// assert_eq!(merged.to_inline_css(), "font-size: 12px; --accent: teal;");
    /// ```
    pub fn to_inline_css(&self) -> String {
        self.properties
            .iter()
            .filter_map(|(key, value)| {
                let value = value.to_string();
                if value.contains(';') || key.contains([';', ':']) {
                    tracing::trace!(property = %key, "omitting property that cannot be written inline");
                    return None;
                }
                Some(format!("{}: {};", to_kebab(key), value))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Consume the map, returning the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<String, StyleOutput> {
        self.properties
    }
}

impl<K: Into<String>, V: Into<StyleOutput>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Into<String>, V: Into<StyleOutput>> Extend<(K, V)> for StyleMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for StyleMap {
    type Item = (String, StyleOutput);
    type IntoIter = indexmap::map::IntoIter<String, StyleOutput>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_order() {
        let a = StyleMap::from_iter([("color", "red"), ("margin", "0")]);
        let b = StyleMap::from_iter([("margin", "0"), ("color", "red")]);
        assert_eq!(a, b);
    }

    #[test]
    fn overwrite_keeps_first_position() {
        let mut map = StyleMap::new();
        map.insert("color", "red");
        map.insert("padding", 4);
        let previous = map.insert("color", "blue");

        assert_eq!(previous, Some(StyleOutput::from("red")));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["color", "padding"]);
        assert_eq!(map.get("color").unwrap(), &"blue");
    }

    #[test]
    fn inline_css_uses_kebab_keys() {
        let mut map = StyleMap::new();
        map.insert("backgroundColor", "red");
        map.insert("zIndex", 10);
        map.insert("--brand-Color", "teal");

        assert_eq!(
            map.to_inline_css(),
            "background-color: red; z-index: 10; --brand-Color: teal;"
        );
    }

    #[test]
    fn inline_css_omits_values_that_would_split() {
        let mut map = StyleMap::new();
        map.insert("content", "a;b: c");
        map.insert("--semi;colon", "x");
        map.insert("--key:colon", "y");
        map.insert("background", "url(http://x)");

        let css = map.to_inline_css();
        assert_eq!(css, "background: url(http://x);");

        let reparsed = crate::merge([css.as_str()]);
        assert_eq!(reparsed, StyleMap::from_iter([("background", "url(http://x)")]));
    }

    #[test]
    fn inline_css_of_empty_map_is_empty() {
        assert_eq!(StyleMap::new().to_inline_css(), "");
    }

    #[test]
    fn serializes_as_object() {
        let mut map = StyleMap::new();
        map.insert("opacity", 0.5);
        map.insert("color", "red");

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"opacity":0.5,"color":"red"}"#);
    }
}
