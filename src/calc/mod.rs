pub mod grammar;
pub mod ops;

pub use grammar::{Expr, Factor, NESTING_LIMIT, Number, Term};
pub use ops::BinaryOp;

use crate::before::BeforeExt;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::parser::Parser;
use crate::primitive::end_of_input;

/// Evaluate the arithmetic expression at the start of `input`
///
/// Input left over after the expression is not looked at; use
/// [`evaluate_all`] to reject it.
pub fn evaluate(input: &str) -> Result<i64> {
    run(Expr, input)
}

/// Evaluate `input`, which must consist of a single expression and nothing else
pub fn evaluate_all(input: &str) -> Result<i64> {
    run(Expr.before(end_of_input()), input)
}

fn run<'code>(parser: impl Parser<'code, Output = i64>, input: &'code str) -> Result<i64> {
    let mut cursor = Cursor::new(input);
    let result = parser.parse(&mut cursor);
    match &result {
        Ok(value) => log::debug!("evaluated {:?} to {} ({} bytes consumed)", input, value, cursor.offset()),
        Err(error) => log::debug!("failed to evaluate {:?}: {}", input, error),
    }
    result
}
