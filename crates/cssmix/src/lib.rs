//! Merge heterogeneous style inputs into one flat style map.
//!
//! `cssmix` accepts any mix of:
//!
//! - **Declaration text** such as `"color: red; font-size: 16px;"`
//! - **Mappings** of property names to values, optionally nested
//!   (`{ margin: { top: "10px" } }` becomes `marginTop`)
//! - **Lists** of the above, nested to any depth
//! - **Sentinels** (`null`, `undefined`, booleans, bare numbers), which are
//!   ignored
//!
//! Inputs are applied in order and the last valid value for a property
//! wins. Property names are canonicalized to camelCase by default (or
//! kebab-case, see [`MergeOptions`]), except custom properties (`--name`),
//! which are kept verbatim. Merging never fails: anything that cannot be
//! interpreted contributes nothing.
//!
//! # Example
//!
//! ```
//! use cssmix::prelude::*;
//! use cssmix::{cssmix, styles};
//!
//! let merged = cssmix!(
//!     "color: red; font-size: 16px;",
//!     StyleMapping::new()
//!         .set("color", "blue")
//!         .nest("margin", StyleMapping::new().set("top", "10px")),
//!     styles!["padding: 4px", StyleInput::Null, false],
//! );
//!
//! assert_eq!(merged.get("color").unwrap(), &"blue");
//! assert_eq!(merged.get("fontSize").unwrap(), &"16px");
//! assert_eq!(merged.get("marginTop").unwrap(), &"10px");
//! assert_eq!(merged.get("padding").unwrap(), &"4px");
//! ```
//!
//! # Logging
//!
//! The crate reports ignored inputs and dropped declarations through
//! `tracing` at trace level. Install a subscriber in the application to
//! see them.

pub mod canonical;
pub mod merge;
pub mod parser;
pub mod types;

mod error;

pub use error::{Error, Result};
pub use merge::{MergeOptions, StyleMerger, merge};
pub use types::{StyleEntry, StyleInput, StyleMap, StyleMapping, StyleOutput, StyleValue};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::canonical::{KeyCase, canonicalize};
    pub use crate::merge::{MergeOptions, StyleMerger, merge};
    pub use crate::parser::parse_style_string;
    pub use crate::types::{StyleEntry, StyleInput, StyleMap, StyleMapping, StyleOutput, StyleValue};
}

/// Merge any number of style inputs with the default options.
///
/// Each argument is converted with [`StyleInput::from`].
///
/// ```
/// use cssmix::cssmix;
///
/// let merged = cssmix!("color: red;", "color: green;");
/// assert_eq!(merged.get("color").unwrap(), &"green");
///
/// assert!(cssmix!().is_empty());
/// ```
#[macro_export]
macro_rules! cssmix {
    () => {
        $crate::StyleMap::new()
    };
    ($($input:expr),+ $(,)?) => {
        $crate::merge([$($crate::StyleInput::from($input)),+])
    };
}

/// Build a [`StyleInput::List`] from heterogeneous elements.
///
/// ```
/// use cssmix::{StyleInput, styles};
///
/// let list = styles!["color: red", 10, styles!["margin: 0"]];
/// assert!(matches!(list, StyleInput::List(ref items) if items.len() == 3));
/// ```
#[macro_export]
macro_rules! styles {
    ($($input:expr),* $(,)?) => {
        $crate::StyleInput::List(::std::vec![$($crate::StyleInput::from($input)),*])
    };
}
