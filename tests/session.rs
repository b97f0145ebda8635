use std::fs;

use calcline::{
    CalcError, Outcome,
    ast::{Expr, Function},
    error::{EvalError, ParseError},
    interpreter::{evaluator::core::Context, mode::AngleMode, random::RandomSource},
};
use rand::{SeedableRng, rngs::StdRng};
use walkdir::WalkDir;

fn value_of(context: &mut Context, line: &str) -> f64 {
    match context.eval_line(line) {
        Ok(Outcome::Value(v)) => v,
        Ok(other) => panic!("{line} produced {other:?} instead of a value"),
        Err(e) => panic!("{line} failed: {e}"),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, found {actual}");
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_calc_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut context = Context::new();
            for line in block.lines().filter(|line| !line.trim().is_empty()) {
                if let Err(e) = context.eval_line(line) {
                    panic!("Calc example {} in {:?} failed on line {:?}:\n{}\nError: {}",
                           i + 1,
                           path,
                           line,
                           block,
                           e);
                }
            }
        }
    }

    assert!(count > 0, "No calc examples found in book/src");
}

fn extract_calc_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

#[test]
fn commands_produce_outcomes() {
    let mut context = Context::new();

    assert_eq!(context.eval_line("help").unwrap(), Outcome::Help);
    assert_eq!(context.eval_line("  EXIT  ").unwrap(), Outcome::Exit);
    assert_eq!(context.eval_line("deg").unwrap(), Outcome::ModeChanged(AngleMode::Degrees));
    assert_eq!(context.eval_line("rad").unwrap(), Outcome::ModeChanged(AngleMode::Radians));
}

#[test]
fn degree_mode_changes_trigonometry() {
    let mut context = Context::new();
    assert_eq!(context.angle_mode(), AngleMode::Radians);

    context.eval_line("deg").unwrap();
    assert_eq!(context.angle_mode(), AngleMode::Degrees);
    assert_close(value_of(&mut context, "sin(90)"), 1.0);
    assert_close(value_of(&mut context, "cos(180)"), -1.0);
    assert_close(value_of(&mut context, "tan(45)"), 1.0);
    assert_close(value_of(&mut context, "asin(1)"), 90.0);
    assert_close(value_of(&mut context, "acot(0)"), 90.0);
    assert_close(value_of(&mut context, "atan(1)"), 45.0);
    assert_eq!(context.eval_line("cos(90)").unwrap().to_string(), "0");

    context.eval_line("rad").unwrap();
    assert_eq!(value_of(&mut context, "sin(0)"), 0.0);
    assert_close(value_of(&mut context, "asin(1)"), std::f64::consts::FRAC_PI_2);
}

#[test]
fn mode_commands_are_idempotent() {
    let mut context = Context::new();

    context.eval_line("deg").unwrap();
    let once = value_of(&mut context, "sin(30)");
    context.eval_line("deg").unwrap();
    assert_eq!(value_of(&mut context, "sin(30)"), once);
    assert_eq!(context.angle_mode(), AngleMode::Degrees);

    context.eval_line("rad").unwrap();
    context.eval_line("rad").unwrap();
    assert_eq!(context.angle_mode(), AngleMode::Radians);
}

#[test]
fn starting_mode_can_be_chosen() {
    let mut context = Context::new().with_angle_mode(AngleMode::Degrees);
    assert_close(value_of(&mut context, "sin(30)"), 0.5);
}

#[test]
fn singular_angles_are_domain_errors() {
    let mut context = Context::new().with_angle_mode(AngleMode::Degrees);

    for line in ["tan(90)", "tan(-270)", "sec(90)", "csc(0)", "cot(180)", "csc(360)"] {
        assert!(matches!(context.eval_line(line),
                         Err(CalcError::Eval(EvalError::DomainError { .. }))),
                "{line}");
    }
    assert_close(value_of(&mut context, "cot(45)"), 1.0);
    assert_close(value_of(&mut context, "sec(60)"), 2.0);
}

#[test]
fn session_survives_errors() {
    let mut context = Context::new();
    context.eval_line("deg").unwrap();

    assert!(context.eval_line("").is_err());
    assert!(context.eval_line("(2 + 3").is_err());
    assert!(context.eval_line("2 + 3 4").is_err());
    assert!(context.eval_line("sqrt(-1)").is_err());
    assert!(context.eval_line("1 / 0").is_err());
    assert!(context.eval_line("deg 2").is_err());

    assert_eq!(context.angle_mode(), AngleMode::Degrees);
    assert_eq!(value_of(&mut context, "2 + 3"), 5.0);
}

#[test]
fn evaluation_is_deterministic_apart_from_randomness() {
    let mut context = Context::new();
    let first = value_of(&mut context, "round(ln(10) * 3 root 7, 4) - fact(4) mod 5");
    let second = value_of(&mut context, "round(ln(10) * 3 root 7, 4) - fact(4) mod 5");
    assert_eq!(first, second);
}

#[test]
fn seeded_generator_is_reproducible() {
    let mut a = Context::with_random_source(StdRng::seed_from_u64(7));
    let mut b = Context::with_random_source(StdRng::seed_from_u64(7));

    for _ in 0..20 {
        let x = value_of(&mut a, "rand()");
        assert!((0.0..1.0).contains(&x));
        assert_eq!(x, value_of(&mut b, "rand()"));
    }
}

#[test]
fn randint_stays_in_bounds() {
    let mut context = Context::with_random_source(StdRng::seed_from_u64(42));

    for _ in 0..200 {
        let n = value_of(&mut context, "randint(1, 6)");
        assert!((1.0..=6.0).contains(&n));
        assert_eq!(n.fract(), 0.0);
    }
    for _ in 0..50 {
        let n = value_of(&mut context, "randint(-2.5, 2.5)");
        assert!((-2.0..=2.0).contains(&n));
    }
    assert_eq!(value_of(&mut context, "randint(4, 4)"), 4.0);
    assert!(context.eval_line("randint(6, 1)").is_err());
}

struct Scripted {
    unit: f64,
}

impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f64 {
        self.unit
    }

    fn next_in_range(&mut self, _low: i64, high: i64) -> i64 {
        high
    }
}

#[test]
fn random_source_can_be_injected() {
    let mut context = Context::with_random_source(Scripted { unit: 0.75 });

    assert_eq!(value_of(&mut context, "rand() * 4"), 3.0);
    assert_eq!(value_of(&mut context, "randint(1.5, 9.9)"), 9.0);
    assert_eq!(value_of(&mut context, "rand() + rand()"), 1.5);
}

#[test]
fn hand_built_calls_are_checked_at_evaluation() {
    let mut context = Context::new();
    let call = Expr::FunctionCall { function:  Function::Sqrt,
                                    arguments: vec![],
                                    position:  0, };

    assert!(matches!(context.eval(&call),
                     Err(EvalError::ArgumentCountMismatch { function: "sqrt",
                                                            found: 0,
                                                            .. })));
}

#[test]
fn error_positions_point_into_the_line() {
    let mut context = Context::new();

    assert_eq!(context.eval_line("1 + * 2"),
               Err(CalcError::Parse(ParseError::UnexpectedToken { token:    "*".to_string(),
                                                                  position: 4, })));
    assert_eq!(context.eval_line("max(1 2)"),
               Err(CalcError::Parse(ParseError::UnexpectedToken { token:    "2".to_string(),
                                                                  position: 6, })));
}
