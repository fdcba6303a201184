//! Scalar style values.
//!
//! [`StyleValue`] is what a caller may place under a property name.
//! [`StyleOutput`] is what ends up in a merged [`StyleMap`](super::StyleMap):
//! numbers are kept as numbers and every other valid value is stringified.
//!
//! # Example
//!
//! ```
//! use cssmix::prelude::{StyleOutput, StyleValue};
//!
//! assert!(StyleValue::from("10px").is_valid(false));
//! assert!(!StyleValue::Null.is_valid(false));
//! assert!(!StyleValue::Bool(false).is_valid(false));
//!
//! // `true` survives only outside strict mode.
//! assert!(StyleValue::Bool(true).is_valid(false));
//! assert!(!StyleValue::Bool(true).is_valid(true));
//!
//! assert_eq!(StyleValue::from(10).to_output(), StyleOutput::Number(10.0));
//! assert_eq!(StyleValue::Bool(true).to_output(), StyleOutput::from("true"));
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

/// A value that can be assigned to a property in a style mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StyleValue {
    /// No value at all. Never stored.
    #[default]
    Undefined,
    /// Explicit null. Never stored.
    Null,
    /// A boolean flag. `false` is never stored; `true` is stored as
    /// `"true"` unless the merge is strict.
    Bool(bool),
    /// A unitless number, stored as-is.
    Number(f64),
    /// Any textual value, stored as-is.
    Str(String),
}

impl StyleValue {
    /// Check whether this value may be stored in a merged result.
    ///
    /// Null, undefined and `false` are never valid. In strict mode no
    /// boolean is valid.
    pub fn is_valid(&self, strict: bool) -> bool {
        match self {
            StyleValue::Undefined | StyleValue::Null => false,
            StyleValue::Bool(flag) => *flag && !strict,
            StyleValue::Number(_) | StyleValue::Str(_) => true,
        }
    }

    /// Convert into the stored representation.
    pub fn to_output(&self) -> StyleOutput {
        match self {
            StyleValue::Number(n) => StyleOutput::Number(*n),
            StyleValue::Str(s) => StyleOutput::Text(s.clone()),
            StyleValue::Bool(flag) => StyleOutput::Text(flag.to_string()),
            StyleValue::Null => StyleOutput::Text("null".to_string()),
            StyleValue::Undefined => StyleOutput::Text("undefined".to_string()),
        }
    }

    /// Short name of the variant, used in trace output.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleValue::Undefined => "undefined",
            StyleValue::Null => "null",
            StyleValue::Bool(_) => "bool",
            StyleValue::Number(_) => "number",
            StyleValue::Str(_) => "string",
        }
    }
}

macro_rules! impl_number_from {
    ($target:ident :: $variant:ident, $($ty:ty),+) => {
        $(
            impl From<$ty> for $target {
                fn from(value: $ty) -> Self {
                    $target::$variant(value as f64)
                }
            }
        )+
    };
}

pub(crate) use impl_number_from;

impl_number_from!(StyleValue::Number, f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<&String> for StyleValue {
    fn from(value: &String) -> Self {
        StyleValue::Str(value.clone())
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleValue::Null, Into::into)
    }
}

/// A value stored in a merged style map.
///
/// Serializes as a bare JSON number or string. Integral numbers within the
/// exactly representable range are written without a fractional part.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleOutput {
    /// A unitless number.
    Number(f64),
    /// Any other value, in its textual form.
    Text(String),
}

impl StyleOutput {
    /// Get the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleOutput::Number(n) => Some(*n),
            StyleOutput::Text(_) => None,
        }
    }

    /// Get the text value, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleOutput::Text(s) => Some(s),
            StyleOutput::Number(_) => None,
        }
    }
}

/// Largest magnitude below which every integral `f64` converts to `i64` exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Serialize for StyleOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleOutput::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            StyleOutput::Number(n) => serializer.serialize_f64(*n),
            StyleOutput::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for StyleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleOutput::Number(n) => f.write_str(&format_number(*n)),
            StyleOutput::Text(s) => f.write_str(s),
        }
    }
}

impl_number_from!(StyleOutput::Number, f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<&str> for StyleOutput {
    fn from(value: &str) -> Self {
        StyleOutput::Text(value.to_string())
    }
}

impl From<String> for StyleOutput {
    fn from(value: String) -> Self {
        StyleOutput::Text(value)
    }
}

impl PartialEq<&str> for StyleOutput {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<f64> for StyleOutput {
    fn eq(&self, other: &f64) -> bool {
        self.as_number() == Some(*other)
    }
}

/// Render a number the way inline style text expects it.
///
/// Integral values print without a fractional part, negative zero prints
/// as `0` and infinities print as `Infinity`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}
