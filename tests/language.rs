use calcline::{
    CalcError, evaluate, format_value,
    error::{EvalError, LexError, ParseError},
    interpreter::evaluator::function::core::Arity,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "{src} evaluated to {value}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_close(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9, "{src} evaluated to {value}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> CalcError {
    match evaluate(src) {
        Ok(value) => panic!("{src} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_domain_error(src: &str) {
    let error = assert_failure(src);
    assert!(matches!(error, CalcError::Eval(EvalError::DomainError { .. })),
            "{src} failed with {error:?}");
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("7 mod 3", 1.0);
}

#[test]
fn operator_precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("48 / 4 / 2", 6.0);
    assert_value("2 * 3 ^ 2", 18.0);
    assert_value("((((1))))", 1.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2 ^ 3 ^ 2", 512.0);
    assert_value("(2 ^ 3) ^ 2", 64.0);
}

#[test]
fn unary_minus() {
    assert_value("-2 ^ 2", -4.0);
    assert_value("(-2) ^ 2", 4.0);
    assert_value("-2 * 3", -6.0);
    assert_value("2 - -3", 5.0);
    assert_value("--2", 2.0);
    assert_value("2 ^ -1", 0.5);
    assert_value("-7 mod 3", -1.0);
}

#[test]
fn number_literals() {
    assert_value("42", 42.0);
    assert_value("3.25", 3.25);
    assert_value(".5", 0.5);
    assert_value("2.", 2.0);
    assert_value("1e3 + 2.5E-1", 1000.25);
}

#[test]
fn infix_and_call_forms_agree() {
    assert_value("3 root 27", 3.0);
    assert_value("root(3, 27)", 3.0);
    assert_value("2 root 16", 4.0);
    assert_value("root(3, -8)", -2.0);
    assert_value("mod(7, 3)", 1.0);
    assert_value("mod(-7, 3)", -1.0);
    assert_value("2 * 3 root 8", 4.0);
}

#[test]
fn builtin_functions() {
    assert_value("sqrt(16)", 4.0);
    assert_value("abs(-3.5)", 3.5);
    assert_value("min(3, -2)", -2.0);
    assert_value("max(3, -2)", 3.0);
    assert_value("floor(-3.5)", -4.0);
    assert_value("min(2, 2.5)", 2.0);
    assert_value("ceil(3.2)", 4.0);
    assert_value("fact(5)", 120.0);
    assert_value("fact(0)", 1.0);
    assert_value("ln(1)", 0.0);
    assert_close("log(1000)", 3.0);
    assert_close("log(2, 8)", 3.0);
    assert_close("log(3, 81)", 4.0);
    assert_value("sqrt(abs(-16)) + fact(3)", 10.0);
}

#[test]
fn keywords_are_case_insensitive() {
    assert_value("SQRT(16)", 4.0);
    assert_value("Sin(0)", 0.0);
    assert_value("7 MOD 3", 1.0);
}

#[test]
fn trigonometry_in_radians() {
    assert_value("sin(0)", 0.0);
    assert_value("cos(0)", 1.0);
    assert_value("tan(0)", 0.0);
    assert_value("atan(0)", 0.0);
    assert_close("acot(0)", std::f64::consts::FRAC_PI_2);
    assert_close("asin(1)", std::f64::consts::FRAC_PI_2);
    assert_close("sec(0)", 1.0);
    assert_close("acsc(1)", std::f64::consts::FRAC_PI_2);
}

#[test]
fn rounding() {
    assert_value("round(2.5)", 3.0);
    assert_value("round(-2.5)", -3.0);
    assert_value("round(2.4)", 2.0);
    assert_value("round(3.14159, 2)", 3.14);
    assert_value("round(1234, -2)", 1200.0);
    assert_value("round(2.5, 0)", 3.0);
    assert_value("round(5, -400)", 0.0);
    assert_value("round(-5, -2147483648)", 0.0);
    assert_value("round(5, -2147483648)", 0.0);
    assert_value("round(5, 400)", 5.0);
    assert_value("round(5, 2147483647)", 5.0);
    assert_value("round(0, 2147483647)", 0.0);

    for x in ["0.5", "1.5", "-7.25", "1234.5678"] {
        assert_eq!(evaluate(&format!("round({x}, 0)")).unwrap(),
                   evaluate(&format!("round({x})")).unwrap());
    }
}

#[test]
fn domain_errors() {
    assert_domain_error("sqrt(-1)");
    assert_domain_error("log(0)");
    assert_domain_error("log(1, 5)");
    assert_domain_error("ln(-1)");
    assert_domain_error("fact(-3)");
    assert_domain_error("fact(2.5)");
    assert_domain_error("fact(171)");
    assert_domain_error("asin(2)");
    assert_domain_error("acos(-1.5)");
    assert_domain_error("asec(0.5)");
    assert_domain_error("(-8) ^ 0.5");
    assert_domain_error("root(2, -4)");
    assert_domain_error("0 root 5");
    assert_domain_error("round(1, 0.5)");
    assert_domain_error("tan(asin(1))");
}

#[test]
fn division_by_zero_is_error() {
    for src in ["1 / 0", "5 mod 0", "mod(5, 0)", "0 ^ -1"] {
        assert_eq!(assert_failure(src), CalcError::Eval(EvalError::DivisionByZero), "{src}");
    }
}

#[test]
fn overflow_produces_infinity() {
    assert_eq!(format_value(evaluate("2 ^ 1024").unwrap()), "inf");
    assert_eq!(format_value(evaluate("-(10 ^ 400)").unwrap()), "-inf");
    assert!(evaluate("fact(170)").unwrap().is_finite());
}

#[test]
fn malformed_lines_are_parse_errors() {
    assert_eq!(assert_failure(""), CalcError::Parse(ParseError::Empty));
    assert_eq!(assert_failure("   "), CalcError::Parse(ParseError::Empty));
    assert_eq!(assert_failure("(2 + 3"),
               CalcError::Parse(ParseError::UnexpectedToken { token:    "end of line".to_string(),
                                                              position: 6, }));
    assert_eq!(assert_failure("2 + 3 4"),
               CalcError::Parse(ParseError::UnexpectedToken { token:    "4".to_string(),
                                                              position: 6, }));
    assert_eq!(assert_failure("sin 30"),
               CalcError::Parse(ParseError::UnexpectedToken { token:    "30".to_string(),
                                                              position: 4, }));

    for src in ["2 +", "* 3", "()", "2 )", "1, 2", "rand", "2 * exit", "exit 2", "sqrt()"] {
        assert!(matches!(assert_failure(src), CalcError::Parse(_)), "{src}");
    }
}

#[test]
fn nesting_depth_is_limited() {
    assert_value(&format!("{}1{}", "(".repeat(200), ")".repeat(200)), 1.0);
    assert_value(&format!("{}1{}", "abs(".repeat(200), ")".repeat(200)), 1.0);
    assert_value(&format!("{}1", "-".repeat(255)), -1.0);

    assert_eq!(assert_failure(&format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000))),
               CalcError::Parse(ParseError::UnexpectedToken { token:    "(".to_string(),
                                                              position: 257, }));
    assert_eq!(assert_failure(&format!("{}1", "-".repeat(10_000))),
               CalcError::Parse(ParseError::UnexpectedToken { token:    "-".to_string(),
                                                              position: 257, }));
    for src in [format!("{}2", "2^".repeat(10_000)),
                format!("{}1{}", "sqrt(".repeat(10_000), ")".repeat(10_000))]
    {
        assert!(matches!(assert_failure(&src), CalcError::Parse(_)));
    }
}

#[test]
fn wrong_arity_is_rejected_while_parsing() {
    assert_eq!(assert_failure("sqrt(1, 2)"),
               CalcError::Parse(ParseError::WrongArity { function: "sqrt",
                                                         expected: Arity::Exact(1),
                                                         found:    2, }));
    assert_eq!(assert_failure("log(1, 2, 3)"),
               CalcError::Parse(ParseError::WrongArity { function: "log",
                                                         expected: Arity::OneOf(&[1, 2]),
                                                         found:    3, }));
    assert!(matches!(assert_failure("rand(1)"),
                     CalcError::Parse(ParseError::WrongArity { function: "rand", .. })));
}

#[test]
fn unknown_characters_are_lex_errors() {
    assert_eq!(assert_failure("2 $ 3"),
               CalcError::Lex(LexError::UnrecognizedCharacter { character: '$',
                                                                position:  2, }));
    assert!(matches!(assert_failure("x + 1"), CalcError::Lex(_)));
    assert!(matches!(assert_failure("sinh(1)"), CalcError::Lex(_)));
}

#[test]
fn commands_are_not_expressions() {
    for src in ["exit", "help", "rad", "deg"] {
        assert!(matches!(assert_failure(src), CalcError::Parse(_)), "{src}");
    }
}

#[test]
fn error_messages_name_their_stage() {
    assert_eq!(assert_failure("1 / 0").kind(), "evaluation error");
    assert_eq!(assert_failure("(").kind(), "parse error");
    assert_eq!(assert_failure("#").kind(), "lex error");
    assert_eq!(assert_failure("1 / 0").to_string(), "evaluation error: Division by zero.");
    assert_eq!(assert_failure("").to_string(), "parse error: Empty input.");
}

#[test]
fn results_are_formatted_for_display() {
    assert_eq!(format_value(evaluate("0.1 + 0.2").unwrap()), "0.3");
    assert_eq!(format_value(evaluate("0 * -1").unwrap()), "0");
    assert_eq!(format_value(evaluate("1 / 3").unwrap()), "0.333333333333");
    assert_eq!(format_value(evaluate("2 ^ 0.5 * 2 ^ 0.5").unwrap()), "2");
    assert_eq!(format_value(evaluate("10 ^ 20").unwrap()), "1e20");
}
