use nom::{
    character::complete::multispace0,
    error::ParseError,
    number::complete::double,
    sequence::delimited,
    IResult,
};

/// Wrap a parser so it tolerates surrounding whitespace
pub fn ws<'a, F, O, E>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, E>,
    E: ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}

/// Parse a floating point literal (`12`, `12.5`, `-3`, `1e3`)
pub fn number_literal(input: &str) -> IResult<&str, f64> {
    double(input)
}
