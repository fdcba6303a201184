//! Declaration string parsing.

mod declaration;

pub use declaration::{Declaration, parse_declaration, parse_declarations, parse_style_string};
