//! The style merger.

use crate::canonical::{CompoundKey, KeyCache, canonicalize};
use crate::parser::parse_declarations;
use crate::types::{StyleEntry, StyleInput, StyleMap, StyleMapping, StyleOutput};

use super::MergeOptions;

/// Merge style inputs with the default options.
///
/// Inputs are applied in order; for every canonical property the last valid
/// value wins. Invalid or uninterpretable inputs contribute nothing, so this
/// never fails.
///
/// ```
/// use cssmix::merge;
///
/// let merged = merge(["color: red;", "color: green; margin: 0"]);
/// assert_eq!(merged.get("color").unwrap(), &"green");
/// assert_eq!(merged.len(), 2);
/// ```
pub fn merge<I>(inputs: I) -> StyleMap
where
    I: IntoIterator,
    I::Item: Into<StyleInput>,
{
    StyleMerger::default().merge(inputs)
}

/// Merges style inputs into a flat [`StyleMap`] according to
/// [`MergeOptions`].
///
/// A merger holds no per-call state and can be shared between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleMerger {
    options: MergeOptions,
}

impl StyleMerger {
    /// Create a merger with the given options.
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    /// The options this merger applies.
    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Merge inputs into a fresh map.
    pub fn merge<I>(&self, inputs: I) -> StyleMap
    where
        I: IntoIterator,
        I::Item: Into<StyleInput>,
    {
        let mut result = StyleMap::new();
        for input in inputs {
            self.merge_into(&mut result, &input.into());
        }
        tracing::debug!(properties = result.len(), "merged style inputs");
        result
    }

    /// Merge one input into an existing map.
    pub fn merge_into(&self, into: &mut StyleMap, input: &StyleInput) {
        // Lists are walked with an explicit stack so nesting depth is bounded
        // only by memory.
        let mut pending: Vec<std::slice::Iter<'_, StyleInput>> = Vec::new();
        let mut next = Some(input);

        loop {
            let current = match next.take() {
                Some(current) => current,
                None => match pending.last_mut() {
                    Some(items) => match items.next() {
                        Some(current) => current,
                        None => {
                            pending.pop();
                            continue;
                        }
                    },
                    None => break,
                },
            };

            match current {
                StyleInput::List(items) => pending.push(items.iter()),
                StyleInput::Text(text) => self.assign_text(text, into),
                StyleInput::Map(mapping) => self.assign_mapping(None, mapping, into),
                other => {
                    tracing::trace!(kind = other.kind(), "ignoring style input");
                }
            }
        }
    }

    fn assign_text(&self, text: &str, into: &mut StyleMap) {
        for declaration in parse_declarations(text) {
            if declaration.value.is_empty() && !self.options.keep_empty_values {
                tracing::trace!(property = declaration.property, "dropping empty declaration");
                continue;
            }
            into.insert(
                self.canonical_key(declaration.property),
                StyleOutput::Text(declaration.value.to_string()),
            );
        }
    }

    fn assign_mapping(
        &self,
        prefix: Option<&CompoundKey>,
        mapping: &StyleMapping,
        into: &mut StyleMap,
    ) {
        for (key, entry) in mapping.iter() {
            let path = match prefix {
                Some(outer) => outer.join(key, |name| self.canonical_key(name)),
                None => CompoundKey::root(key),
            };

            match entry {
                StyleEntry::Nested(nested) => self.assign_mapping(Some(&path), nested, into),
                StyleEntry::Value(value) if value.is_valid(self.options.strict) => {
                    into.insert(path.resolve(|name| self.canonical_key(name)), value.to_output());
                }
                StyleEntry::Value(value) => {
                    tracing::trace!(property = ?path, kind = value.kind(), "skipping invalid value");
                }
            }
        }
    }

    fn canonical_key(&self, name: &str) -> String {
        if self.options.use_cache {
            KeyCache::global(self.options.key_case).canonicalize(name)
        } else {
            canonicalize(name, self.options.key_case)
        }
    }
}
