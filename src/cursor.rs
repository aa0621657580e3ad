use crate::error::{FailureKind, ParseFailure};
use std::borrow::Cow;

/// A read position inside an immutable source string
///
/// The cursor is `Copy`: saving a backtracking checkpoint is a plain copy and
/// restoring one is an assignment. Each copy evolves independently and the
/// source is never touched.
#[derive(Debug, Copy, Clone)]
pub struct Cursor<'code> {
    source: &'code str,
    /// Byte position in `source`, always on a char boundary
    offset: usize,
    line: usize,
    column: usize,
    /// How many nested groups enclose the position
    depth: usize,
}

impl<'code> Cursor<'code> {
    pub fn new(source: &'code str) -> Self {
        Cursor {
            source,
            offset: 0,
            line: 1,
            column: 1,
            depth: 0,
        }
    }

    /// Get the next character without consuming it
    pub fn peek(&self) -> Result<char, ParseFailure> {
        self.rest()
            .chars()
            .next()
            .ok_or_else(|| self.fail(FailureKind::EndOfInput, "too short"))
    }

    /// Consume one character and return it
    ///
    /// A newline moves to column 1 of the next line, any other character moves
    /// one column right. At end of input the cursor stays put and the
    /// `EndOfInput` failure is returned.
    pub fn advance(&mut self) -> Result<char, ParseFailure> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Ok(ch)
    }

    /// True if both cursors point at the same place in the same source.
    ///
    /// This compares positions, not the content that follows them.
    pub fn same_position(&self, other: &Cursor<'_>) -> bool {
        std::ptr::eq(self.source, other.source) && self.offset == other.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Step into a nested group
    pub fn enter(&mut self) {
        self.depth += 1;
    }

    /// Step out of the innermost group
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn source(&self) -> &'code str {
        self.source
    }

    /// The unconsumed part of the source
    pub fn rest(&self) -> &'code str {
        &self.source[self.offset..]
    }

    /// Build a failure at the current position
    pub fn fail(&self, kind: FailureKind, message: impl Into<Cow<'static, str>>) -> ParseFailure {
        ParseFailure {
            kind,
            message: message.into(),
            offset: self.offset,
            line: self.line,
            column: self.column,
            found: self.rest().chars().next(),
        }
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_position(other)
    }
}

impl Eq for Cursor<'_> {}
