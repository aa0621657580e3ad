//! # calcomb - parser combinators and an integer calculator
//!
//! A small combinator engine and the arithmetic evaluator built on it.
//!
//! - A [`Cursor`] is a cheap-to-copy position in an immutable string; copying
//!   it is how parsers take backtracking checkpoints.
//! - A [`Parser`] advances a cursor and yields a value, or fails with a
//!   positioned [`ParseFailure`]. Arithmetic [`Fault`]s travel on a separate
//!   channel that no combinator recovers from.
//! - Combinators compose parsers: sequencing, repetition, alternation that
//!   only backtracks when nothing was consumed, explicit backtracking, value
//!   transformation and left folds.
//! - [`calc`] uses them for `+ - * /` over `i64` with the usual precedence,
//!   evaluating while it parses.
//!
//! ```
//! use calcomb::calc::evaluate;
//!
//! assert_eq!(evaluate("2 + 3 * (4 - 1)").unwrap(), 11);
//! assert_eq!(evaluate("1+").unwrap_err().to_string(), "[line 1, col 3] not factor");
//! ```

pub mod ascii;
pub mod attempt;
pub mod before;
pub mod between;
pub mod calc;
pub mod cli;
pub mod concat;
pub mod cursor;
pub mod error;
pub mod fold;
pub mod label;
pub mod many;
pub mod map;
pub mod or_else;
pub mod parser;
pub mod primitive;
pub mod repeat;
pub mod text;
pub mod then;

pub use attempt::{AttemptExt, attempt};
pub use before::{BeforeExt, before};
pub use between::between;
pub use concat::{ConcatExt, seq2};
pub use cursor::Cursor;
pub use error::{Error, FailureKind, Fault, ParseFailure, Result};
pub use fold::{Operator, Pending, Step, apply_right, fold_left};
pub use label::{LabelExt, label};
pub use many::{many, many_strict, many_text, many1, many1_text};
pub use map::{MapExt, TryMapExt, map, negate};
pub use or_else::{OrElseExt, or_else};
pub use parser::Parser;
pub use primitive::{any_char, end_of_input, reject, satisfy};
pub use repeat::repeat;
pub use text::{char, string};
pub use then::{ThenExt, then};
