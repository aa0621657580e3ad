use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::parser::Parser;

/// Parser combinator that rewinds the cursor when the inner parser fails
///
/// However much input the inner parser consumed, a failure leaves the cursor
/// where it started, so an enclosing `or_else` may still try its other branch.
/// The failure itself is passed on unchanged.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'code, P> Parser<'code> for Attempt<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let checkpoint = *cursor;
        let result = self.parser.parse(cursor);
        if let Err(Error::Failure(_)) = result {
            *cursor = checkpoint;
        }
        result
    }
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<'code>: Parser<'code> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

/// Implement AttemptExt for all parsers
impl<'code, P> AttemptExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Attempt parser
pub fn attempt<'code, P>(parser: P) -> Attempt<P>
where
    P: Parser<'code>,
{
    Attempt::new(parser)
}
