use crate::cursor::Cursor;
use crate::error::{Fault, Result};
use crate::parser::Parser;

/// A binary operation that may fault, e.g. on division by zero
pub trait Operator<T> {
    fn apply(&self, lhs: T, rhs: T) -> std::result::Result<T, Fault>;
}

impl<T, F> Operator<T> for F
where
    F: Fn(T, T) -> std::result::Result<T, Fault>,
{
    fn apply(&self, lhs: T, rhs: T) -> std::result::Result<T, Fault> {
        self(lhs, rhs)
    }
}

/// One deferred step of a left fold
pub trait Step<T> {
    /// Combine the running accumulator with this step
    fn apply(self, accumulator: T) -> std::result::Result<T, Fault>;
}

/// An operator together with its already parsed right-hand operand
///
/// Nothing is computed until [`Step::apply`] supplies the left-hand side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pending<O, T> {
    pub op: O,
    pub rhs: T,
}

impl<O, T> Step<T> for Pending<O, T>
where
    O: Operator<T>,
{
    fn apply(self, accumulator: T) -> std::result::Result<T, Fault> {
        self.op.apply(accumulator, self.rhs)
    }
}

/// Parser combinator that parses a right-hand operand and pairs it with an operator
///
/// Fails exactly when the operand parser fails.
pub struct ApplyRight<P, O> {
    op: O,
    operand: P,
}

impl<P, O> ApplyRight<P, O> {
    pub fn new(op: O, operand: P) -> Self {
        ApplyRight { op, operand }
    }
}

impl<'code, P, O> Parser<'code> for ApplyRight<P, O>
where
    P: Parser<'code>,
    O: Clone,
{
    type Output = Pending<O, P::Output>;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let rhs = self.operand.parse(cursor)?;
        Ok(Pending {
            op: self.op.clone(),
            rhs,
        })
    }
}

/// Convenience function to create an ApplyRight parser
pub fn apply_right<'code, P, O>(op: O, operand: P) -> ApplyRight<P, O>
where
    P: Parser<'code>,
    O: Clone,
{
    ApplyRight::new(op, operand)
}

/// Parser combinator that evaluates a seed followed by a list of steps
///
/// Runs `seed`, then `steps`, then applies every step to the running value
/// in order, the accumulator always being the left operand. A fault raised by
/// a step aborts the fold.
pub struct Fold<M, S> {
    seed: M,
    steps: S,
}

impl<M, S> Fold<M, S> {
    pub fn new(seed: M, steps: S) -> Self {
        Fold { seed, steps }
    }
}

impl<'code, M, S, T, I> Parser<'code> for Fold<M, S>
where
    M: Parser<'code, Output = T>,
    S: Parser<'code, Output = I>,
    I: IntoIterator,
    I::Item: Step<T>,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output> {
        let seed = self.seed.parse(cursor)?;
        let steps = self.steps.parse(cursor)?;
        let value = steps
            .into_iter()
            .try_fold(seed, |accumulator, step| step.apply(accumulator))?;
        Ok(value)
    }
}

/// Convenience function to create a Fold parser
pub fn fold_left<'code, M, S, T, I>(seed: M, steps: S) -> Fold<M, S>
where
    M: Parser<'code, Output = T>,
    S: Parser<'code, Output = I>,
    I: IntoIterator,
    I::Item: Step<T>,
{
    Fold::new(seed, steps)
}
