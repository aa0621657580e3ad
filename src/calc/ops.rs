use crate::error::Fault;
use crate::fold::Operator;
use std::fmt;

/// The four integer operators of the calculator
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    /// Integer division, truncating toward zero
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Operator<i64> for BinaryOp {
    fn apply(&self, lhs: i64, rhs: i64) -> Result<i64, Fault> {
        let value = match self {
            BinaryOp::Add => lhs.checked_add(rhs),
            BinaryOp::Sub => lhs.checked_sub(rhs),
            BinaryOp::Mul => lhs.checked_mul(rhs),
            BinaryOp::Div if rhs == 0 => return Err(Fault::DivisionByZero),
            BinaryOp::Div => lhs.checked_div(rhs),
        };
        value.ok_or(Fault::Overflow)
    }
}
