use crate::cursor::Cursor;
use crate::error::{FailureKind, Result};
use crate::parser::Parser;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that consumes one character if the predicate accepts it
///
/// This is the only parser that moves the cursor by itself; everything else
/// is built by composition.
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let ch = cursor.peek()?;
        if !(self.predicate)(ch) {
            return Err(cursor
                .fail(FailureKind::UnsatisfiedPredicate, "not satisfy")
                .into());
        }
        cursor.advance()?;
        Ok(ch)
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

/// Parser that consumes and returns any single character
pub fn any_char() -> Satisfy<fn(char) -> bool> {
    Satisfy::new((|_: char| true) as fn(char) -> bool)
}

/// Parser that always fails with the given message, without consuming
pub struct Reject<T> {
    message: Cow<'static, str>,
    _output: PhantomData<fn() -> T>,
}

impl<T> Reject<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Reject {
            message: message.into(),
            _output: PhantomData,
        }
    }
}

impl<'code, T> Parser<'code> for Reject<T> {
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        Err(cursor
            .fail(FailureKind::Expected, self.message.clone())
            .into())
    }
}

/// Convenience function to create a Reject parser
///
/// The output type is usually inferred from the other branch of an `or_else`.
pub fn reject<T>(message: impl Into<Cow<'static, str>>) -> Reject<T> {
    Reject::new(message)
}

/// Parser that succeeds only when no input is left
pub struct EndOfInput;

impl<'code> Parser<'code> for EndOfInput {
    type Output = ();

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        if cursor.is_at_end() {
            Ok(())
        } else {
            Err(cursor
                .fail(FailureKind::Expected, "not end of input")
                .into())
        }
    }
}

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_satisfy_accepts() {
        let mut cursor = Cursor::new("ab");
        let parser = satisfy(|c| c == 'a');

        assert_eq!(parser.parse(&mut cursor).unwrap(), 'a');
        assert_eq!(cursor.peek().unwrap(), 'b');
    }

    #[test]
    fn test_satisfy_rejects_without_advancing() {
        let mut cursor = Cursor::new("ba");
        let parser = satisfy(|c| c == 'a');

        let error = parser.parse(&mut cursor).unwrap_err();
        let failure = error.as_failure().unwrap();
        assert_eq!(failure.kind, FailureKind::UnsatisfiedPredicate);
        assert_eq!(failure.found, Some('b'));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_satisfy_at_end_of_input() {
        let mut cursor = Cursor::new("");
        let error = satisfy(|_| true).parse(&mut cursor).unwrap_err();
        assert_eq!(error.as_failure().unwrap().kind, FailureKind::EndOfInput);
    }

    #[test]
    fn test_any_char() {
        let mut cursor = Cursor::new("\n!");
        assert_eq!(any_char().parse(&mut cursor).unwrap(), '\n');
        assert_eq!(any_char().parse(&mut cursor).unwrap(), '!');
        assert!(any_char().parse(&mut cursor).is_err());
    }

    #[test]
    fn test_reject_fails_at_current_position() {
        let mut cursor = Cursor::new("xy");
        cursor.advance().unwrap();

        let error = reject::<char>("not char '('").parse(&mut cursor).unwrap_err();
        match error {
            Error::Failure(failure) => {
                assert_eq!(failure.kind, FailureKind::Expected);
                assert_eq!(failure.to_string(), "[line 1, col 2] not char '(': 'y'");
            }
            Error::Fault(_) => panic!("Expected parse failure"),
        }
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn test_end_of_input() {
        let mut cursor = Cursor::new("a");
        assert!(end_of_input().parse(&mut cursor).is_err());

        cursor.advance().unwrap();
        assert!(end_of_input().parse(&mut cursor).is_ok());
    }
}
