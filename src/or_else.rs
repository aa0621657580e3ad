use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser only runs when the first one failed *without consuming
/// input*. A failure after partial consumption is most likely a real syntax
/// error rather than a different alternative, so it is returned as is. Wrap
/// the first parser in [`attempt`](crate::attempt::attempt) to backtrack over
/// a shared prefix.
pub struct OrElse<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> OrElse<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        OrElse { first, second }
    }
}

impl<'code, P1, P2, O> Parser<'code> for OrElse<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let checkpoint = *cursor;
        match self.first.parse(cursor) {
            Err(Error::Failure(_)) if cursor.same_position(&checkpoint) => self.second.parse(cursor),
            result => result,
        }
    }
}

/// Extension trait to add .or_else() method support for parsers
pub trait OrElseExt<'code>: Parser<'code> + Sized {
    fn or_else<P>(self, other: P) -> OrElse<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        OrElse::new(self, other)
    }
}

/// Implement OrElseExt for all parsers
impl<'code, P> OrElseExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an OrElse parser
pub fn or_else<'code, P1, P2, O>(first: P1, second: P2) -> OrElse<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    OrElse::new(first, second)
}
