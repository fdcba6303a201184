//! Merge configuration.

use serde::{Deserialize, Serialize};

use crate::canonical::KeyCase;

/// Options controlling how inputs are merged.
///
/// The defaults produce camelCase keys, store `true` as `"true"`, keep
/// declarations with empty values and use the process-wide key cache.
///
/// Options can be built fluently or loaded from configuration data; missing
/// fields take their defaults.
///
/// # Example
///
/// ```
/// use cssmix::prelude::*;
///
/// let options = MergeOptions::new().key_case(KeyCase::Kebab).strict(true);
/// assert_eq!(options.key_case, KeyCase::Kebab);
///
/// let loaded: MergeOptions = serde_json::from_str(r#"{ "strict": true }"#).unwrap();
/// assert!(loaded.strict);
/// assert_eq!(loaded.key_case, KeyCase::Camel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Canonical form of merged property names.
    pub key_case: KeyCase,
    /// Reject every boolean value, including `true`.
    pub strict: bool,
    /// Keep string declarations whose value is empty after trimming.
    pub keep_empty_values: bool,
    /// Memoize canonical names in the process-wide cache.
    pub use_cache: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            key_case: KeyCase::Camel,
            strict: false,
            keep_empty_values: true,
            use_cache: true,
        }
    }
}

impl MergeOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options producing hyphenated property names.
    pub fn kebab() -> Self {
        Self::default().key_case(KeyCase::Kebab)
    }

    /// Set the canonical key case.
    pub fn key_case(mut self, case: KeyCase) -> Self {
        self.key_case = case;
        self
    }

    /// Set strict boolean handling.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set whether empty declaration values are kept.
    pub fn keep_empty_values(mut self, keep: bool) -> Self {
        self.keep_empty_values = keep;
        self
    }

    /// Set whether the process-wide key cache is used.
    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = MergeOptions::default();
        assert_eq!(options.key_case, KeyCase::Camel);
        assert!(!options.strict);
        assert!(options.keep_empty_values);
        assert!(options.use_cache);
    }

    #[test]
    fn builder_chain() {
        let options = MergeOptions::kebab().strict(true).keep_empty_values(false).use_cache(false);
        assert_eq!(options.key_case, KeyCase::Kebab);
        assert!(options.strict);
        assert!(!options.keep_empty_values);
        assert!(!options.use_cache);
    }

    #[test]
    fn deserialize_partial_config() {
        let options: MergeOptions =
            serde_json::from_str(r#"{ "key_case": "kebab", "keep_empty_values": false }"#).unwrap();
        assert_eq!(options, MergeOptions::kebab().keep_empty_values(false));
    }

    #[test]
    fn deserialize_empty_config() {
        let options: MergeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, MergeOptions::default());
    }
}
