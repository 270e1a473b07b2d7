use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{all_consuming, map, opt},
    sequence::pair,
    IResult,
};
use crate::parser::lexer::{number_literal, ws};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontUnit {
    Px,
    Pt,
}

fn font_unit(input: &str) -> IResult<&str, FontUnit> {
    alt((
        map(tag("px"), |_| FontUnit::Px),
        map(tag("pt"), |_| FontUnit::Pt),
    ))(input)
}

/// Parse a CSS-ish font size: `12`, `12px`, `10.5pt`.
/// A bare number is taken as pixels.
pub fn parse_font_size(input: &str) -> IResult<&str, (f64, FontUnit)> {
    all_consuming(ws(map(
        pair(number_literal, opt(font_unit)),
        |(size, unit)| (size, unit.unwrap_or(FontUnit::Px)),
    )))(input)
}
