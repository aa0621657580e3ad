use calcomb::{
    Error, FailureKind, Fault,
    calc::{evaluate, evaluate_all},
};
use rstest::rstest;

#[rstest]
#[case("8-3-2", 3)]
#[case("8/4/2", 1)]
#[case("2+3*4", 14)]
#[case("(2+3)*4", 20)]
#[case(" 1 + 2 ", 3)]
#[case("((7))", 7)]
#[case("10/3", 3)]
#[case("2*(3+4)*5", 70)]
#[case("1-2-3", -4)]
#[case(" ( 1 + 2 ) * ( 3 - 5 ) ", -6)]
fn test_evaluate(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(evaluate(input).unwrap(), expected);
    assert_eq!(evaluate_all(input).unwrap(), expected);
}

#[test]
fn test_dangling_operator() {
    let error = evaluate("1+").unwrap_err();
    let failure = error.as_failure().unwrap();

    assert_eq!(failure.line, 1);
    assert_eq!(failure.column, 3);
    assert_eq!(failure.found, None);
    assert_eq!(error.to_string(), "[line 1, col 3] not factor");
}

#[rstest]
#[case("", "[line 1, col 1] not factor")]
#[case("+1", "[line 1, col 1] not factor: '+'")]
#[case("(1+2", "[line 1, col 5] not char ')'")]
#[case("2*", "[line 1, col 3] not factor")]
#[case("99999999999999999999", "[line 1, col 21] number out of range")]
fn test_syntax_errors(#[case] input: &str, #[case] expected: &str) {
    let error = evaluate(input).unwrap_err();
    assert!(!error.is_fault());
    assert_eq!(error.to_string(), expected);
}

#[test]
fn test_division_by_zero_is_fault() {
    assert_eq!(evaluate("4/0").unwrap_err(), Error::Fault(Fault::DivisionByZero));
    assert_eq!(evaluate("1+(4/(2-2))").unwrap_err(), Error::Fault(Fault::DivisionByZero));
}

#[test]
fn test_overflow_is_fault() {
    assert_eq!(
        evaluate("9223372036854775807+1").unwrap_err(),
        Error::Fault(Fault::Overflow)
    );
    assert_eq!(
        evaluate("0-9223372036854775807-2").unwrap_err(),
        Error::Fault(Fault::Overflow)
    );
}

#[test]
fn test_trailing_input() {
    assert_eq!(evaluate("1 2").unwrap(), 1);
    assert_eq!(evaluate("3)").unwrap(), 3);

    let error = evaluate_all("1 2").unwrap_err();
    let failure = error.as_failure().unwrap();
    assert_eq!(failure.kind, FailureKind::Expected);
    assert_eq!(error.to_string(), "[line 1, col 3] not end of input: '2'");
}

#[test]
fn test_deep_nesting_fails_cleanly() {
    let input = "(".repeat(10_000) + "1" + &")".repeat(10_000);
    let error = evaluate(&input).unwrap_err();

    assert!(matches!(error, Error::Failure(_)));
    assert!(error.to_string().ends_with("nesting too deep: '('"));
}

#[test]
fn test_evaluate_is_deterministic() {
    let input = "12*(3+4)/2-5";
    let first = evaluate(input);
    let second = evaluate(input);
    assert_eq!(first, second);
    assert_eq!(first.unwrap(), 37);
}
