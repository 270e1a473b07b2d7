// Small nom parsers for the string-encoded bits of chart settings

pub mod font;
pub mod lexer;
pub mod metric_name;

pub use font::{parse_font_size, FontUnit};
pub use metric_name::strip_encoding;
