use nom::{bytes::complete::take_until, error::Error, IResult};

fn before_separator<'a>(separator: &str, input: &'a str) -> IResult<&'a str, &'a str> {
    take_until::<_, _, Error<&str>>(separator)(input)
}

/// Drop the encoding suffix that follows `separator` in an internal metric name.
/// Names that carry no separator come back unchanged.
pub fn strip_encoding<'a>(raw: &'a str, separator: &str) -> &'a str {
    if separator.is_empty() {
        return raw;
    }
    match before_separator(separator, raw) {
        Ok((_, name)) => name,
        Err(_) => raw,
    }
}
