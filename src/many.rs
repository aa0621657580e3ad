use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Results are collected into `C`: a `Vec` of outputs for [`many`], or a
/// `String` for [`many_text`] when the outputs are text fragments.
///
/// Before every attempt the cursor is saved. What happens when an attempt
/// fails after consuming part of the input depends on how the parser was
/// built: [`many`] rewinds to the saved position and succeeds with what it
/// has, [`many_strict`] treats the partial match as a real error and fails.
/// A failure that consumed nothing always just ends the repetition.
///
/// The inner parser must consume input or fail on each attempt, otherwise
/// the repetition never ends.
pub struct Many<P, C> {
    parser: P,
    strict: bool,
    _collection: PhantomData<fn() -> C>,
}

impl<P, C> Many<P, C> {
    pub fn new(parser: P) -> Self {
        Many {
            parser,
            strict: false,
            _collection: PhantomData,
        }
    }

    pub fn strict(parser: P) -> Self {
        Many {
            parser,
            strict: true,
            _collection: PhantomData,
        }
    }
}

impl<'code, P, C> Many<P, C>
where
    P: Parser<'code>,
    C: Extend<P::Output>,
{
    /// Keep parsing into `results` until the parser stops matching
    fn collect_into(&self, results: &mut C, cursor: &mut Cursor<'code>) -> Result<()> {
        loop {
            let checkpoint = *cursor;
            match self.parser.parse(cursor) {
                Ok(value) => results.extend(Some(value)),
                Err(Error::Failure(failure)) => {
                    if self.strict && !cursor.same_position(&checkpoint) {
                        return Err(failure.into());
                    }
                    *cursor = checkpoint;
                    return Ok(());
                }
                Err(fault) => return Err(fault),
            }
        }
    }
}

impl<'code, P, C> Parser<'code> for Many<P, C>
where
    P: Parser<'code>,
    C: Default + Extend<P::Output>,
{
    type Output = C;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let mut results = C::default();
        self.collect_into(&mut results, cursor)?;
        Ok(results)
    }
}

/// Zero or more, collected into a `Vec`. Never fails on a parse failure.
pub fn many<'code, P>(parser: P) -> Many<P, Vec<P::Output>>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Zero or more, concatenated into a `String`. Never fails on a parse failure.
pub fn many_text<'code, P>(parser: P) -> Many<P, String>
where
    P: Parser<'code>,
    String: Extend<P::Output>,
{
    Many::new(parser)
}

/// Zero or more, collected into a `Vec`, failing when an attempt fails after
/// consuming input
pub fn many_strict<'code, P>(parser: P) -> Many<P, Vec<P::Output>>
where
    P: Parser<'code>,
{
    Many::strict(parser)
}

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Fails exactly when the first occurrence fails; after that it behaves
/// like [`many`].
pub struct Many1<P, C> {
    many: Many<P, C>,
}

impl<P, C> Many1<P, C> {
    pub fn new(parser: P) -> Self {
        Many1 {
            many: Many::new(parser),
        }
    }
}

impl<'code, P, C> Parser<'code> for Many1<P, C>
where
    P: Parser<'code>,
    C: Default + Extend<P::Output>,
{
    type Output = C;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let first = self.many.parser.parse(cursor)?;
        let mut results = C::default();
        results.extend(Some(first));
        self.many.collect_into(&mut results, cursor)?;
        Ok(results)
    }
}

/// One or more, collected into a `Vec`
pub fn many1<'code, P>(parser: P) -> Many1<P, Vec<P::Output>>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}

/// One or more, concatenated into a `String`
pub fn many1_text<'code, P>(parser: P) -> Many1<P, String>
where
    P: Parser<'code>,
    String: Extend<P::Output>,
{
    Many1::new(parser)
}
