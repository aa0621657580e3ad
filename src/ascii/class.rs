use crate::or_else::OrElseExt;
use crate::parser::Parser;
use crate::primitive::{reject, satisfy};

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_upper(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

pub fn is_lower(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

pub fn is_alpha(ch: char) -> bool {
    is_upper(ch) || is_lower(ch)
}

pub fn is_alphanumeric(ch: char) -> bool {
    is_alpha(ch) || is_digit(ch)
}

/// Alphabetic or underscore, i.e. what may start an identifier
pub fn is_letter(ch: char) -> bool {
    is_alpha(ch) || ch == '_'
}

/// Horizontal space only: a plain space or a tab
pub fn is_space(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// `0`-`9`
pub fn digit() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_digit).or_else(reject("not digit"))
}

pub fn upper() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_upper).or_else(reject("not upper"))
}

pub fn lower() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_lower).or_else(reject("not lower"))
}

pub fn alpha() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_alpha).or_else(reject("not alpha"))
}

pub fn alphanumeric() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_alphanumeric).or_else(reject("not alphanumeric"))
}

pub fn letter() -> impl for<'code> Parser<'code, Output = char> {
    satisfy(is_letter).or_else(reject("not letter"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    #[test]
    fn test_predicates() {
        assert!(('0'..='9').all(is_digit));
        assert!(!is_digit('a'));
        assert!(is_upper('Q') && !is_upper('q'));
        assert!(is_lower('q') && !is_lower('Q'));
        assert!(is_alpha('z') && is_alpha('Z') && !is_alpha('_'));
        assert!(is_alphanumeric('7') && !is_alphanumeric('_'));
        assert!(is_letter('_') && is_letter('a') && !is_letter('1'));
        assert!(is_space(' ') && is_space('\t') && !is_space('\n'));
    }

    #[test]
    fn test_non_ascii_is_rejected() {
        assert!(!is_alpha('å'));
        assert!(!is_digit('٣'));
    }

    fn failure_of<'code>(parser: impl Parser<'code>) -> String {
        let mut cursor = Cursor::new("#");
        let message = parser.parse(&mut cursor).err().map(|e| e.to_string());
        assert_eq!(cursor.offset(), 0);
        message.unwrap_or_default()
    }

    #[test]
    fn test_class_parsers_name_their_failure() {
        assert_eq!(failure_of(digit()), "[line 1, col 1] not digit: '#'");
        assert_eq!(failure_of(upper()), "[line 1, col 1] not upper: '#'");
        assert_eq!(failure_of(lower()), "[line 1, col 1] not lower: '#'");
        assert_eq!(failure_of(alpha()), "[line 1, col 1] not alpha: '#'");
        assert_eq!(failure_of(alphanumeric()), "[line 1, col 1] not alphanumeric: '#'");
        assert_eq!(failure_of(letter()), "[line 1, col 1] not letter: '#'");
    }

    #[test]
    fn test_digit_consumes_one() {
        let mut cursor = Cursor::new("42");
        assert_eq!(digit().parse(&mut cursor).unwrap(), '4');
        assert_eq!(cursor.peek().unwrap(), '2');
    }

    #[test]
    fn test_letter_accepts_underscore() {
        let mut cursor = Cursor::new("_x");
        assert_eq!(letter().parse(&mut cursor).unwrap(), '_');
        assert_eq!(alpha().parse(&mut cursor).unwrap(), 'x');
    }
}
