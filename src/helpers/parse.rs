use std::fmt;
use std::str::FromStr;

use combine::{easy, EasyParser, ParseError, Parser, Stream};

use crate::debugln;

mod c {
    pub use combine::{
        parser::char::{self, string},
        parser::combinator::{from_str, recognize},
        *,
    };
}

pub type EzParseError<'a> = easy::ParseError<&'a str>;
pub type Result<'a, T> = std::result::Result<T, EzParseError<'a>>;

/// Runs `parser` over the whole of `s`; trailing input is an error.
pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<'a, P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
}

/// Like [`from_str`], but logs the error and discards it.
pub fn from_str_ok<'a, P>(s: &'a str, parser: P) -> Option<P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    match from_str(s, parser) {
        Ok(output) => Some(output),
        Err(err) => {
            let err = err.map_position(|p| p.translate_position(s));
            debugln!("Error: {err}");
            debugln!("Input: {s:?}");
            None
        }
    }
}

/// An optionally negative decimal integer, e.g. `"42"` or `"-7"`.
pub fn decimal_integer<T, Input>() -> impl Parser<Input, Output = T>
where
    T: FromStr,
    T::Err: fmt::Display,
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let sign = c::optional(c::token('-'));
    let digits = c::skip_many1(c::char::digit());
    c::from_str(c::recognize::<String, _, _>((sign, digits)))
}

/// One or more spaces (not newlines).
pub fn spaces1<Input>() -> impl Parser<Input, Output = ()>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    c::skip_many1(c::token(' '))
}

/// One or more space separated integers, e.g. `" 41 48  83"`.
///
/// Leading spaces are consumed, trailing spaces are left alone.
pub fn integers<T, Input>() -> impl Parser<Input, Output = Vec<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let integer = c::skip_many(c::token(' ')).with(decimal_integer());
    c::many1(c::attempt(integer))
}

/// Parses every whitespace separated word of `s` as a `T`.
pub fn words<T: FromStr>(s: &str) -> Option<Vec<T>> {
    s.split_whitespace().map(|word| word.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_integer() {
        assert_eq!(from_str("42", decimal_integer::<u32, _>()).ok(), Some(42));
        assert_eq!(from_str("-42", decimal_integer::<i64, _>()).ok(), Some(-42));
        assert!(from_str("-42", decimal_integer::<u32, _>()).is_err());
        assert!(from_str("x", decimal_integer::<u32, _>()).is_err());
    }

    #[test]
    fn test_integers() {
        assert_eq!(
            from_str(" 41 48  83", integers::<u32, _>()).ok(),
            Some(vec![41, 48, 83])
        );
        let parser = (integers::<u32, _>(), c::string(" |"));
        assert_eq!(
            from_str("1 2 |", parser).ok().map(|(v, _)| v),
            Some(vec![1, 2])
        );
    }

    #[test]
    fn test_from_str_ok() {
        assert_eq!(from_str_ok("7 ", decimal_integer::<u8, _>()), None);
        assert_eq!(from_str_ok("7", decimal_integer::<u8, _>()), Some(7));
    }

    #[test]
    fn test_words() {
        assert_eq!(words::<i32>("1 -2\t3"), Some(vec![1, -2, 3]));
        assert_eq!(words::<i32>("1 two"), None);
    }
}
