use crate::cursor::Cursor;
use crate::error::Result;
use crate::parser::Parser;

/// Parser combinator that runs two parsers in sequence and keeps the second result
pub struct Then<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Then { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        self.first.parse(cursor)?;
        self.second.parse(cursor)
    }
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt<'code>: Parser<'code> + Sized {
    fn then<P>(self, next: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then::new(self, next)
    }
}

/// Implement ThenExt for all parsers
impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Then parser
pub fn then<'code, P1, P2>(first: P1, second: P2) -> Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Then::new(first, second)
}
