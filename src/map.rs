use crate::cursor::Cursor;
use crate::error::{FailureKind, Result};
use crate::parser::Parser;
use std::borrow::Cow;
use std::ops::Neg;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// Failures pass through untouched.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let value = self.parser.parse(cursor)?;
        Ok((self.mapper)(value))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

/// Parser combinator whose mapping function may reject the parsed value
///
/// A rejection becomes an `Expected` failure at the position the cursor
/// reached, i.e. right after the input that produced the value.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for TryMap<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> std::result::Result<U, Cow<'static, str>>,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let value = self.parser.parse(cursor)?;
        (self.mapper)(value).map_err(|message| cursor.fail(FailureKind::Expected, message).into())
    }
}

/// Extension trait to add .try_map() method support for parsers
pub trait TryMapExt<'code>: Parser<'code> + Sized {
    fn try_map<F, U>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> std::result::Result<U, Cow<'static, str>>,
    {
        TryMap::new(self, mapper)
    }
}

impl<'code, P> TryMapExt<'code> for P where P: Parser<'code> {}

/// Parser yielding the arithmetic negation of what `parser` yields
pub fn negate<'code, P, T>(parser: P) -> Map<P, fn(T) -> T>
where
    P: Parser<'code, Output = T>,
    T: Neg<Output = T>,
{
    Map::new(parser, T::neg as fn(T) -> T)
}
