use crate::cursor::Cursor;
use crate::error::Result;
use crate::parser::Parser;

/// Parser combinator that runs a parser exactly `count` times and concatenates the text
///
/// Stops at the first failure and leaves the cursor where that failure happened.
pub struct Repeat<P> {
    count: usize,
    parser: P,
}

impl<P> Repeat<P> {
    pub fn new(count: usize, parser: P) -> Self {
        Repeat { count, parser }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
    String: Extend<P::Output>,
{
    type Output = String;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let mut text = String::new();
        for _ in 0..self.count {
            text.extend(Some(self.parser.parse(cursor)?));
        }
        Ok(text)
    }
}

/// Convenience function to create a Repeat parser
pub fn repeat<'code, P>(count: usize, parser: P) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(count, parser)
}
