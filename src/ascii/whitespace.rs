use crate::many::many_text;
use crate::or_else::OrElseExt;
use crate::parser::Parser;
use crate::primitive::{reject, satisfy};

use super::class::is_space;

/// Parser that matches a single horizontal space (space or tab)
pub fn space() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_space).or_else(reject("not space"))
}

/// Parser that skips any run of horizontal space, possibly empty
///
/// Never fails; newlines are not whitespace here.
pub fn spaces() -> impl for<'code> Parser<'code, Output = String> {
    many_text(space())
}
