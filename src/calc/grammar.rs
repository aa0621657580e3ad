//! Recursive-descent grammar for integer arithmetic
//!
//! ```text
//! number = digit, {digit} ;
//! factor = spaces, ( "(" expr ")" | number ), spaces ;
//! term   = factor, { ("*" factor | "/" factor) } ;
//! expr   = term,   { ("+" term   | "-" term  ) } ;
//! ```
//!
//! Parentheses may nest at most [`NESTING_LIMIT`] deep.
//!
//! Every rule is a unit struct, so the rules refer to each other by name and
//! the `factor -> expr -> term -> factor` cycle needs no forward declaration.
//! Each rule builds its combinator when it runs.
//!
//! `term` and `expr` are evaluated while they are parsed: the operator and
//! operand pairs become [`Pending`] steps that are folded into the first
//! operand from left to right.

use crate::ascii::{digit, spaces};
use crate::before::BeforeExt;
use crate::between::between;
use crate::cursor::Cursor;
use crate::error::{FailureKind, Result};
use crate::fold::{Pending, apply_right, fold_left};
use crate::many::{many_strict, many1_text};
use crate::map::{MapExt, TryMapExt};
use crate::or_else::OrElseExt;
use crate::parser::Parser;
use crate::primitive::reject;
use crate::text::char;
use crate::then::ThenExt;

use super::ops::BinaryOp;

/// Maximum number of parentheses enclosing any operand.
///
/// Every nesting level recurses through all rules, so the limit keeps deep
/// input from exhausting the stack.
pub const NESTING_LIMIT: usize = 64;

/// One or more digits read as a base-10 `i64`
pub struct Number;

impl<'code> Parser<'code> for Number {
    type Output = i64;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        many1_text(digit())
            .try_map(|digits| {
                digits
                    .parse::<i64>()
                    .map_err(|_| "number out of range".into())
            })
            .parse(cursor)
    }
}

/// A number or a parenthesized expression, with surrounding horizontal space
///
/// This is the only rule that skips whitespace.
pub struct Factor;

impl<'code> Parser<'code> for Factor {
    type Output = i64;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let operand = between(char('('), Nested, char(')'))
            .or_else(Number)
            .or_else(reject("not factor"));
        spaces().then(operand).before(spaces()).parse(cursor)
    }
}

/// The expression inside a pair of parentheses, one level deeper
struct Nested;

impl<'code> Parser<'code> for Nested {
    type Output = i64;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        if cursor.depth() >= NESTING_LIMIT {
            return Err(cursor.fail(FailureKind::Expected, "nesting too deep").into());
        }

        cursor.enter();
        let value = Expr.parse(cursor);
        cursor.leave();
        value
    }
}

/// Factors joined by `*` and `/`
pub struct Term;

impl<'code> Parser<'code> for Term {
    type Output = i64;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let steps = many_strict(step(BinaryOp::Mul, Factor).or_else(step(BinaryOp::Div, Factor)));
        fold_left(Factor, steps).parse(cursor)
    }
}

/// Terms joined by `+` and `-`
pub struct Expr;

impl<'code> Parser<'code> for Expr {
    type Output = i64;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        log::trace!(
            "expr at line {}, col {}, depth {}",
            cursor.line(),
            cursor.column(),
            cursor.depth()
        );
        let steps = many_strict(step(BinaryOp::Add, Term).or_else(step(BinaryOp::Sub, Term)));
        fold_left(Term, steps).parse(cursor)
    }
}

/// The operator's symbol followed by its right-hand operand
///
/// Once the symbol is consumed, a missing operand is a syntax error.
fn step<'code, P>(op: BinaryOp, operand: P) -> impl Parser<'code, Output = Pending<BinaryOp, i64>>
where
    P: Parser<'code, Output = i64>,
{
    char(op.symbol())
        .then(apply_right(op, operand))
        .map(|pending: Pending<BinaryOp, i64>| {
            log::trace!("step {} {}", pending.op, pending.rhs);
            pending
        })
}
