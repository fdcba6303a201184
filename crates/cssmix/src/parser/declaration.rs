//! `key: value;` declaration parsing.
//!
//! Declaration text is split on `;`, then each declaration is split at its
//! first `:`. This keeps colons inside values intact, so
//! `background: url(http://x)` yields the value `url(http://x)`.
//!
//! Nothing here fails. A declaration that is empty, has no colon or has an
//! empty property name is dropped and reported at trace level.

use indexmap::IndexMap;

/// A single parsed declaration, borrowed from the source text.
///
/// Both sides are trimmed. The property name is not yet canonicalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Raw property name, e.g. `font-size`.
    pub property: &'a str,
    /// Value text, possibly empty.
    pub value: &'a str,
}

/// Parse a single declaration such as `color: red`.
///
/// Returns `None` for declarations that contribute nothing.
pub fn parse_declaration(raw: &str) -> Option<Declaration<'_>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Some((property, value)) = trimmed.split_once(':') else {
        tracing::trace!(declaration = trimmed, "dropping declaration without a colon");
        return None;
    };

    let property = property.trim();
    if property.is_empty() {
        tracing::trace!(declaration = trimmed, "dropping declaration with an empty property name");
        return None;
    }

    Some(Declaration {
        property,
        value: value.trim(),
    })
}

/// Iterate over the declarations of a style string in source order.
pub fn parse_declarations(text: &str) -> impl Iterator<Item = Declaration<'_>> {
    text.split(';').filter_map(parse_declaration)
}

/// Parse a style string into a property map.
///
/// Property names are left as written. When a name repeats, the last value
/// wins and the name keeps its first position.
///
/// ```
/// use cssmix::parser::parse_style_string;
///
/// let parsed = parse_style_string("color: red; font-size: 16px; color: blue");
/// assert_eq!(parsed.get("color").map(String::as_str), Some("blue"));
/// assert_eq!(parsed.get("font-size").map(String::as_str), Some("16px"));
/// ```
pub fn parse_style_string(text: &str) -> IndexMap<String, String> {
    let mut parsed = IndexMap::new();
    for declaration in parse_declarations(text) {
        parsed.insert(declaration.property.to_string(), declaration.value.to_string());
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(&str, &str)> {
        parse_declarations(text).map(|d| (d.property, d.value)).collect()
    }

    #[test]
    fn parse_simple_declarations() {
        assert_eq!(
            pairs("color: red; font-size: 16px;"),
            [("color", "red"), ("font-size", "16px")]
        );
    }

    #[test]
    fn parse_without_trailing_semicolon() {
        assert_eq!(pairs("margin:0"), [("margin", "0")]);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(
            pairs("  color :   red  ;\n\tpadding:\t4px\n"),
            [("color", "red"), ("padding", "4px")]
        );
    }

    #[test]
    fn parse_splits_at_first_colon() {
        assert_eq!(
            pairs("background: url(http://example.com/a.png);"),
            [("background", "url(http://example.com/a.png)")]
        );
    }

    #[test]
    fn parse_drops_malformed_declarations() {
        assert!(pairs("not-a-valid-declaration").is_empty());
        assert!(pairs(": red;").is_empty());
        assert!(pairs(" ;;  ; ").is_empty());
        assert!(pairs("").is_empty());
        assert_eq!(pairs("junk; color: red; : x"), [("color", "red")]);
    }

    #[test]
    fn parse_keeps_empty_values() {
        assert_eq!(pairs("color: ;"), [("color", "")]);
        assert_eq!(pairs("color:"), [("color", "")]);
        assert_eq!(pairs("content:    "), [("content", "")]);
    }

    #[test]
    fn parse_style_string_last_wins() {
        let parsed = parse_style_string("color: red; margin: 0; color: green");

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.get_index(0), Some((&"color".to_string(), &"green".to_string())));
        assert_eq!(parsed.get("margin").map(String::as_str), Some("0"));
    }

    #[test]
    fn parse_leaves_names_raw() {
        let parsed = parse_style_string("Font-Size: 12px; font_weight: bold");
        assert!(parsed.contains_key("Font-Size"));
        assert!(parsed.contains_key("font_weight"));
    }
}
