use std::borrow::Cow;

use thiserror::Error;

/// What kind of rejection produced a [`ParseFailure`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Tried to read past the last character
    EndOfInput,
    /// A character-class test rejected the next character
    UnsatisfiedPredicate,
    /// A named expectation was not met, e.g. "not digit" or "not char '('"
    Expected,
}

/// Recoverable parse error, positioned where the cursor stood when it was raised
///
/// Renders as `[line L, col C] <message>: '<c>'`; the trailing clause is left out
/// when the failure happened at end of input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}, col {column}] {message}{}", found_suffix(.found))]
pub struct ParseFailure {
    pub kind: FailureKind,
    pub message: Cow<'static, str>,
    /// Byte offset into the source
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    /// Next unconsumed character, `None` at end of input
    pub found: Option<char>,
}

fn found_suffix(found: &Option<char>) -> String {
    match found {
        Some(ch) => format!(": '{}'", ch),
        None => String::new(),
    }
}

impl ParseFailure {
    pub fn is_end_of_input(&self) -> bool {
        self.found.is_none()
    }

    /// Replace the message and mark the failure as a named expectation.
    /// Position and offending character are kept.
    pub fn relabel(self, message: impl Into<Cow<'static, str>>) -> Self {
        ParseFailure {
            kind: FailureKind::Expected,
            message: message.into(),
            ..self
        }
    }
}

/// Fatal arithmetic fault raised while folding evaluated operands
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    Overflow,
}

/// Error is what a parser returns when it does not produce a value.
///
/// Only the `Failure` channel is ever recovered from by alternation, backtracking
/// and repetition. A `Fault` aborts the whole evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Failure(#[from] ParseFailure),
    #[error(transparent)]
    Fault(#[from] Fault),
}

impl Error {
    pub fn as_failure(&self) -> Option<&ParseFailure> {
        match self {
            Error::Failure(failure) => Some(failure),
            Error::Fault(_) => None,
        }
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Error::Fault(_))
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(found: Option<char>) -> ParseFailure {
        ParseFailure {
            kind: FailureKind::UnsatisfiedPredicate,
            message: "not satisfy".into(),
            offset: 4,
            line: 2,
            column: 3,
            found,
        }
    }

    #[test]
    fn test_display_with_offending_char() {
        assert_eq!(
            failure(Some('x')).to_string(),
            "[line 2, col 3] not satisfy: 'x'"
        );
    }

    #[test]
    fn test_display_at_end_of_input() {
        let failure = failure(None);
        assert!(failure.is_end_of_input());
        assert_eq!(failure.to_string(), "[line 2, col 3] not satisfy");
    }

    #[test]
    fn test_relabel_keeps_position() {
        let relabeled = failure(Some('x')).relabel("not digit");
        assert_eq!(relabeled.kind, FailureKind::Expected);
        assert_eq!((relabeled.line, relabeled.column), (2, 3));
        assert_eq!(relabeled.found, Some('x'));
        assert_eq!(relabeled.to_string(), "[line 2, col 3] not digit: 'x'");
    }

    #[test]
    fn test_error_channels() {
        let error = Error::from(failure(None));
        assert!(!error.is_fault());
        assert!(error.as_failure().is_some());

        let error = Error::from(Fault::DivisionByZero);
        assert!(error.is_fault());
        assert!(error.as_failure().is_none());
        assert_eq!(error.to_string(), "division by zero");
    }
}
