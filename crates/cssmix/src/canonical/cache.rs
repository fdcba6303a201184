//! Memoization of canonical property names.

use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;

use super::key::{KeyCase, canonicalize};

static CAMEL_CACHE: OnceLock<KeyCache> = OnceLock::new();
static KEBAB_CACHE: OnceLock<KeyCache> = OnceLock::new();

/// Cache of raw property name to canonical name for one [`KeyCase`].
///
/// Canonicalization is a pure function, so entries never go stale and are
/// never evicted. Concurrent first writes of the same name store the same
/// value.
#[derive(Debug)]
pub struct KeyCache {
    case: KeyCase,
    entries: RwLock<HashMap<String, String>>,
}

impl KeyCache {
    /// Create an empty cache.
    pub fn new(case: KeyCase) -> Self {
        Self {
            case,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide cache for a key case.
    pub fn global(case: KeyCase) -> &'static KeyCache {
        let cell = match case {
            KeyCase::Camel => &CAMEL_CACHE,
            KeyCase::Kebab => &KEBAB_CACHE,
        };
        cell.get_or_init(|| KeyCache::new(case))
    }

    /// The key case this cache produces.
    pub fn case(&self) -> KeyCase {
        self.case
    }

    /// Canonicalize a name, computing and storing it on a miss.
    pub fn canonicalize(&self, name: &str) -> String {
        if let Some(hit) = self.entries.read().get(name) {
            return hit.clone();
        }

        let computed = canonicalize(name, self.case);
        self.entries
            .write()
            .entry(name.to_string())
            .or_insert(computed)
            .clone()
    }

    /// Number of cached names.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn cache_basic_operations() {
        let cache = KeyCache::new(KeyCase::Camel);
        assert!(cache.is_empty());

        assert_eq!(cache.canonicalize("font-size"), "fontSize");
        assert_eq!(cache.len(), 1);

        // Hit returns the same value without growing.
        assert_eq!(cache.canonicalize("font-size"), "fontSize");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_per_case() {
        let camel = KeyCache::new(KeyCase::Camel);
        let kebab = KeyCache::new(KeyCase::Kebab);

        assert_eq!(camel.canonicalize("marginTop"), "marginTop");
        assert_eq!(kebab.canonicalize("marginTop"), "margin-top");
        assert_eq!(kebab.case(), KeyCase::Kebab);
    }

    #[test]
    fn global_caches_are_shared() {
        let a = KeyCache::global(KeyCase::Camel);
        let b = KeyCache::global(KeyCase::Camel);
        assert!(std::ptr::eq(a, b));
        assert!(!std::ptr::eq(a, KeyCache::global(KeyCase::Kebab)));
    }

    #[test]
    fn cache_hit_matches_fresh_computation() {
        let cache = KeyCache::new(KeyCase::Camel);
        let names = ["color", "background-color", "--x-y", "-moz-appearance", "a_b c"];

        for name in names {
            let first = cache.canonicalize(name);
            let second = cache.canonicalize(name);
            assert_eq!(first, canonicalize(name, KeyCase::Camel));
            assert_eq!(second, first);
        }
    }

    #[test]
    fn concurrent_first_writes_agree() {
        let cache = KeyCache::new(KeyCase::Camel);
        let names: Vec<String> = (0..64).map(|i| format!("prop-name-{i}")).collect();

        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for name in &names {
                        assert_eq!(cache.canonicalize(name), canonicalize(name, KeyCase::Camel));
                    }
                });
            }
        });

        assert_eq!(cache.len(), names.len());
    }
}
