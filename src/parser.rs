use crate::cursor::Cursor;
use crate::error::Result;

/// Core parser trait for parser combinators
///
/// A parser either advances the cursor and yields a value, or fails. On
/// failure the cursor is left wherever the parser stopped: partial
/// consumption is legal and is what alternation looks at to decide whether
/// another branch may be tried.
///
/// Parsers hold no parse state of their own, so one parser can be run any
/// number of times against independent cursors.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        (**self).parse(cursor)
    }
}
