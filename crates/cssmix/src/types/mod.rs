//! Style input and output types.

mod input;
mod map;
mod value;

pub use input::{StyleEntry, StyleInput, StyleMapping};
pub use map::StyleMap;
pub use value::{StyleOutput, StyleValue, format_number};
