//! Property name canonicalization.

use serde::{Deserialize, Serialize};

/// Prefix marking a CSS custom property. Such names are never rewritten.
pub const CUSTOM_PROPERTY_PREFIX: &str = "--";

/// Canonical form used for merged property names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCase {
    /// `font-size` becomes `fontSize`.
    #[default]
    Camel,
    /// `fontSize` becomes `font-size`.
    Kebab,
}

/// Check whether a property name is a custom property (`--name`).
pub fn is_custom_property(name: &str) -> bool {
    name.starts_with(CUSTOM_PROPERTY_PREFIX)
}

/// Canonicalize a property name.
///
/// Custom properties are returned unchanged. Otherwise every character that
/// is not a letter, digit or hyphen is treated as a hyphen, and the name is
/// then converted to the requested case. A run of leading hyphens produced
/// along the way is collapsed to one, so the result never looks like a custom
/// property. The result is stable under repeated application.
///
/// ```
/// use cssmix::canonical::{KeyCase, canonicalize};
///
/// assert_eq!(canonicalize("background-color", KeyCase::Camel), "backgroundColor");
/// assert_eq!(canonicalize("font size", KeyCase::Camel), "fontSize");
/// assert_eq!(canonicalize("backgroundColor", KeyCase::Kebab), "background-color");
/// assert_eq!(canonicalize("--main-bg", KeyCase::Camel), "--main-bg");
/// assert_eq!(canonicalize("font-größe", KeyCase::Camel), "fontGröße");
/// ```
pub fn canonicalize(name: &str, case: KeyCase) -> String {
    match case {
        KeyCase::Camel => to_camel(name),
        KeyCase::Kebab => to_kebab(name),
    }
}

/// Convert a property name to camelCase.
///
/// A hyphen directly followed by a lowercase letter collapses into the
/// uppercased letter. Other hyphens are kept, so a leading vendor hyphen
/// turns `-webkit-transition` into `WebkitTransition`.
pub fn to_camel(name: &str) -> String {
    if is_custom_property(name) {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().map(normalize_separator).peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.next_if(char::is_ascii_lowercase) {
                out.push(next.to_ascii_uppercase());
                continue;
            }
        }
        out.push(c);
    }

    collapse_leading_hyphens(out)
}

/// Convert a property name to kebab-case.
///
/// Every uppercase ASCII letter becomes a hyphen followed by its lowercase
/// form, so `WebkitTransition` turns into `-webkit-transition`.
pub fn to_kebab(name: &str) -> String {
    if is_custom_property(name) {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);

    for c in name.chars().map(normalize_separator) {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    collapse_leading_hyphens(out)
}

/// Join an outer and an inner key of a nested mapping into one raw name.
///
/// The result still has to be canonicalized. A capitalized inner key is
/// lowered first so `{ margin: { Top } }` and `{ margin: { top } }` agree.
pub fn compound_key(outer: &str, inner: &str) -> String {
    let mut joined = String::with_capacity(outer.len() + inner.len() + 1);
    joined.push_str(outer);
    joined.push('-');

    let mut inner_chars = inner.chars();
    if let Some(first) = inner_chars.next() {
        joined.push(first.to_ascii_lowercase());
        joined.push_str(inner_chars.as_str());
    }

    joined
}

/// A key path through nested mappings.
///
/// Keys stay raw and are canonicalized once at the leaf, until a custom
/// property appears in the path. From then on the path is kept verbatim,
/// with the part before the custom property canonicalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompoundKey {
    /// Still subject to canonicalization.
    Raw(String),
    /// Contains a custom property; used as-is.
    Verbatim(String),
}

impl CompoundKey {
    /// The path for a key at the top of a mapping.
    pub fn root(key: &str) -> Self {
        if is_custom_property(key) {
            CompoundKey::Verbatim(key.to_string())
        } else {
            CompoundKey::Raw(key.to_string())
        }
    }

    /// Extend the path with an inner key.
    pub fn join(&self, inner: &str, canonicalize: impl FnOnce(&str) -> String) -> Self {
        match self {
            CompoundKey::Raw(outer) if is_custom_property(inner) => {
                CompoundKey::Verbatim(format!("{}{}", canonicalize(outer), inner))
            }
            CompoundKey::Raw(outer) => CompoundKey::Raw(compound_key(outer, inner)),
            CompoundKey::Verbatim(outer) => CompoundKey::Verbatim(compound_key(outer, inner)),
        }
    }

    /// The final property name.
    pub fn resolve(&self, canonicalize: impl FnOnce(&str) -> String) -> String {
        match self {
            CompoundKey::Raw(raw) => canonicalize(raw),
            CompoundKey::Verbatim(name) => name.clone(),
        }
    }
}

fn normalize_separator(c: char) -> char {
    if c.is_alphanumeric() || c == '-' { c } else { '-' }
}

fn collapse_leading_hyphens(name: String) -> String {
    if is_custom_property(&name) {
        format!("-{}", name.trim_start_matches('-'))
    } else {
        name
    }
}
