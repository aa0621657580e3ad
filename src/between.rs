use crate::before::{Before, BeforeExt};
use crate::parser::Parser;
use crate::then::{Then, ThenExt};

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open content close` and returns just the `content` value. No
/// whitespace is skipped around the delimiters.
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Before<Then<P1, P2>, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    open.then(content).before(close)
}
