use crate::cursor::Cursor;
use crate::error::Result;
use crate::parser::Parser;

/// Parser combinator that runs two parsers in sequence and concatenates their text
///
/// Works with any outputs a `String` can be extended with: `char`, `&str`,
/// `String`, `Cow<str>`.
pub struct Concat<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Concat<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Concat { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Concat<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    String: Extend<P1::Output> + Extend<P2::Output>,
{
    type Output = String;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let mut text = String::new();
        let first = self.first.parse(cursor)?;
        Extend::<P1::Output>::extend(&mut text, Some(first));
        let second = self.second.parse(cursor)?;
        Extend::<P2::Output>::extend(&mut text, Some(second));
        Ok(text)
    }
}

/// Extension trait to add .concat() method support for parsers
pub trait ConcatExt<'code>: Parser<'code> + Sized {
    fn concat<P>(self, next: P) -> Concat<Self, P>
    where
        P: Parser<'code>,
    {
        Concat::new(self, next)
    }
}

/// Implement ConcatExt for all parsers
impl<'code, P> ConcatExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Concat parser
pub fn seq2<'code, P1, P2>(first: P1, second: P2) -> Concat<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Concat::new(first, second)
}
