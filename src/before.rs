use crate::cursor::Cursor;
use crate::error::Result;
use crate::parser::Parser;

/// Parser combinator that runs two parsers in sequence and keeps the first result
pub struct Before<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Before<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Before { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Before<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let value = self.first.parse(cursor)?;
        self.second.parse(cursor)?;
        Ok(value)
    }
}

/// Extension trait to add .before() method support for parsers
pub trait BeforeExt<'code>: Parser<'code> + Sized {
    fn before<P>(self, next: P) -> Before<Self, P>
    where
        P: Parser<'code>,
    {
        Before::new(self, next)
    }
}

/// Implement BeforeExt for all parsers
impl<'code, P> BeforeExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Before parser
pub fn before<'code, P1, P2>(first: P1, second: P2) -> Before<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Before::new(first, second)
}
