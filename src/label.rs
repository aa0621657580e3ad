use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that renames the failures of a parser
///
/// The failure keeps its position and offending character; only the message
/// changes. Arithmetic faults are not touched.
pub struct Label<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, message: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            message: message.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        self.parser.parse(cursor).map_err(|error| match error {
            Error::Failure(failure) => Error::Failure(failure.relabel(self.message.clone())),
            fault => fault,
        })
    }
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn label(self, message: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, message)
    }
}

/// Implement LabelExt for all parsers
impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Label parser
pub fn label<'code, P>(parser: P, message: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'code>,
{
    Label::new(parser, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FailureKind, Fault};
    use crate::primitive::satisfy;

    struct Faulty;

    impl<'code> Parser<'code> for Faulty {
        type Output = ();

        fn parse(&self, _cursor: &mut Cursor<'code>) -> Result<Self::Output> {
            Err(Fault::Overflow.into())
        }
    }

    #[test]
    fn test_label_replaces_message() {
        let mut cursor = Cursor::new("x");
        let parser = satisfy(|c| c.is_ascii_digit()).label("not digit");

        let error = parser.parse(&mut cursor).unwrap_err();
        let failure = error.as_failure().unwrap();
        assert_eq!(failure.kind, FailureKind::Expected);
        assert_eq!(failure.to_string(), "[line 1, col 1] not digit: 'x'");
    }

    #[test]
    fn test_label_keeps_position() {
        let mut cursor = Cursor::new("ab");
        cursor.advance().unwrap();
        let parser = label(satisfy(|c| c == 'a'), "not a");

        let failure = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(failure.to_string(), "[line 1, col 2] not a: 'b'");
    }

    #[test]
    fn test_label_preserves_success() {
        let mut cursor = Cursor::new("7");
        let parser = satisfy(|c| c.is_ascii_digit()).label("never shown");
        assert_eq!(parser.parse(&mut cursor).unwrap(), '7');
    }

    #[test]
    fn test_label_leaves_faults_alone() {
        let mut cursor = Cursor::new("");
        let error = Faulty.label("renamed").parse(&mut cursor).unwrap_err();
        assert_eq!(error, Error::Fault(Fault::Overflow));
    }
}
