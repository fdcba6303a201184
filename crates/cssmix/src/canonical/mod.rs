//! Property name canonicalization and its process-wide cache.

mod cache;
mod key;

pub use cache::KeyCache;
pub use key::{
    CUSTOM_PROPERTY_PREFIX, CompoundKey, KeyCase, canonicalize, compound_key, is_custom_property, to_camel,
    to_kebab,
};
