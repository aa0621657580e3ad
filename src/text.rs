use crate::cursor::Cursor;
use crate::error::Result;
use crate::or_else::OrElseExt;
use crate::parser::Parser;
use crate::primitive::{reject, satisfy};
use std::borrow::Cow;

/// Parser that matches a specific character, failing with "not char 'c'"
pub fn char(expected: char) -> impl for<'code> Parser<'code, Output = char> {
    satisfy(move |ch| ch == expected).or_else(reject(format!("not char '{}'", expected)))
}

/// Parser that matches an exact string character by character
///
/// A mismatch fails with `not string "..."` at the first character that
/// differs; the characters matched before it stay consumed.
pub struct IsString {
    expected: Cow<'static, str>,
}

impl IsString {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        IsString {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for IsString {
    type Output = String;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let message = format!("not string \"{}\"", self.expected);
        for expected in self.expected.chars() {
            char(expected)
                .or_else(reject(message.clone()))
                .parse(cursor)?;
        }
        Ok(self.expected.to_string())
    }
}

/// Convenience function to create an IsString parser
pub fn string(expected: impl Into<Cow<'static, str>>) -> IsString {
    IsString::new(expected)
}
