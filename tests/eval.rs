use rcalc::builtins::Arity;
use rcalc::error::{Error, EvalError, LexError, ParseError};
use rcalc::evaluate;
use rstest::rstest;

fn assert_close(source: &str, expected: f64) {
    let value = evaluate(source).expect("evaluation should succeed");
    let tolerance = expected.abs().max(1.0) * 1e-9;
    assert!(
        (value - expected).abs() <= tolerance,
        "'{source}' evaluated to {value}, expected {expected}"
    );
}

#[rstest]
#[case("42", 42.0)]
#[case("3 + 5", 8.0)]
#[case("10 - 3 * 2", 4.0)]
#[case("(10 - 3) * 2", 14.0)]
#[case("2.5 * 4", 10.0)]
#[case("100 / 5 / 2", 10.0)]
#[case("-5 + 3", -2.0)]
#[case("-(3 + 2) * 4", -20.0)]
#[case("2 + 3 * 4 - 5 / 2", 11.5)]
#[case("((2 + 3) * (4 - 1)) / 3", 5.0)]
#[case("--5", 5.0)]
#[case("-+2", -2.0)]
#[case("+7", 7.0)]
fn arithmetic(#[case] source: &str, #[case] expected: f64) {
    assert_close(source, expected);
}

#[rstest]
#[case("pi", std::f64::consts::PI)]
#[case("e", std::f64::consts::E)]
#[case("2 * pi", std::f64::consts::TAU)]
#[case("-pi", -std::f64::consts::PI)]
fn constants(#[case] source: &str, #[case] expected: f64) {
    assert_close(source, expected);
}

#[rstest]
#[case("abs(-3)", 3.0)]
#[case("abs(3.5)", 3.5)]
#[case("sqrt(16)", 4.0)]
#[case("sqrt(2)", std::f64::consts::SQRT_2)]
#[case("pow(2, 10)", 1024.0)]
#[case("pow(9, 0.5)", 3.0)]
#[case("min(3, 1, 2)", 1.0)]
#[case("max(3, 1, 2)", 3.0)]
#[case("min(4.5)", 4.5)]
#[case("round(2.5)", 2.0)] // ties to even
#[case("round(3.5)", 4.0)]
#[case("round(1.25, 1)", 1.2)]
#[case("round(3.14159, 2)", 3.14)]
#[case("sin(0)", 0.0)]
#[case("cos(0)", 1.0)]
#[case("tan(0)", 0.0)]
#[case("sin(pi / 2)", 1.0)]
#[case("abs(min(-3, 2)) + max(1, 2, 3)", 6.0)]
fn functions(#[case] source: &str, #[case] expected: f64) {
    assert_close(source, expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn empty_input(#[case] source: &str) {
    assert!(matches!(
        evaluate(source),
        Err(Error::Parse(ParseError::EmptyExpression))
    ));
}

#[test]
fn division_by_zero() {
    assert!(matches!(
        evaluate("1 / 0"),
        Err(Error::Eval(EvalError::DivisionByZero { .. }))
    ));
    assert!(matches!(
        evaluate("1 / (2 - 2)"),
        Err(Error::Eval(EvalError::DivisionByZero { .. }))
    ));
}

#[test]
fn negative_sqrt() {
    assert!(matches!(
        evaluate("sqrt(-1)"),
        Err(Error::Eval(EvalError::NegativeSqrt { .. }))
    ));
}

#[test]
fn math_domain_errors() {
    // Fractional power of a negative base has no real result
    assert!(matches!(
        evaluate("pow(-8, 1 / 3)"),
        Err(Error::Eval(EvalError::MathDomainError { ref function, .. })) if function == "pow"
    ));
}

#[test]
fn arity_violations() {
    assert!(matches!(
        evaluate("pow(2)"),
        Err(Error::Parse(ParseError::FunctionArity {
            expected: Arity::Exactly(2),
            actual: 1,
            ..
        }))
    ));
    assert!(matches!(
        evaluate("min()"),
        Err(Error::Parse(ParseError::FunctionArity {
            expected: Arity::AtLeast(1),
            actual: 0,
            ..
        }))
    ));
    assert!(matches!(
        evaluate("round(1, 2, 3)"),
        Err(Error::Parse(ParseError::FunctionArity { actual: 3, .. }))
    ));
}

#[test]
fn unknown_identifiers_fail_distinctly() {
    assert!(matches!(
        evaluate("foo(1)"),
        Err(Error::Parse(ParseError::UnknownFunction { ref name, .. })) if name == "foo"
    ));
    assert!(matches!(
        evaluate("foo"),
        Err(Error::Parse(ParseError::UnknownConstant { ref name, .. })) if name == "foo"
    ));
}

#[test]
fn parenthesis_balance() {
    assert!(matches!(
        evaluate("(1 + 2"),
        Err(Error::Parse(ParseError::UnexpectedToken {
            expected: "')'",
            ..
        }))
    ));
    assert!(matches!(
        evaluate("1 + 2)"),
        Err(Error::Parse(ParseError::TrailingTokens { .. }))
    ));
}

#[test]
fn lexical_errors() {
    assert!(matches!(
        evaluate("1.2.3"),
        Err(Error::Lex(LexError::MultipleDecimalPoints { .. }))
    ));
    assert!(matches!(
        evaluate("2 $ 2"),
        Err(Error::Lex(LexError::UnexpectedCharacter { character: '$', .. }))
    ));
}

#[test]
fn evaluation_is_idempotent() {
    for source in ["2 + 3 * 4", "sin(pi / 6)", "round(1.25, 1)"] {
        let first = evaluate(source).unwrap();
        let second = evaluate(source).unwrap();
        assert_eq!(first.to_bits(), second.to_bits(), "for '{source}'");
    }
}
