use std::fs::{self};

use halfrpn::{CalcError, EvalError, Session, evaluate, process_line};
use walkdir::WalkDir;

#[test]
fn script_cases_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").sort_by_file_name()
                                     .into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "case"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let mut session = Session::new();

        for (expression, expected) in extract_cases(&content) {
            count += 1;
            let result = process_line(&expression, &mut session);
            match (expected, &result) {
                (None, Err(_)) => {},
                (Some(expected), Ok(value)) if *value == expected => {},
                _ => panic!("Case '{expression}' in {path:?} expected {expected:?}, got {result:?}"),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/scripts");
}

/// Reads `expression => expected` lines; `None` stands for an expected error.
fn extract_cases(content: &str) -> Vec<(String, Option<f64>)> {
    let mut cases = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (expression, expected) =
            trimmed.split_once(" => ")
                   .unwrap_or_else(|| panic!("Malformed case line: {trimmed}"));
        let expected = match expected.trim() {
            "error" => None,
            number => Some(number.parse()
                                 .unwrap_or_else(|e| panic!("Bad expected value {number}: {e}"))),
        };
        cases.push((expression.trim().to_string(), expected));
    }

    cases
}

fn assert_value(session: &mut Session, src: &str, expected: f64) {
    match process_line(src, session) {
        Ok(value) => assert_eq!(value, expected, "Expression '{src}'"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_failure(session: &mut Session, src: &str) {
    assert!(process_line(src, session).is_err(), "Expression '{src}' succeeded but was expected to fail");
}

#[test]
fn nested_groups_evaluate_inner_first() {
    let mut session = Session::new();
    assert_value(&mut session, "( 3 4 + ) ( 2 1 - ) *", 7.0);
    assert_value(&mut session, "((2 3 *) (10 4 -) /)", 1.0);
    assert_value(&mut session, "(((1 1 +) 2 *) 2 ^)", 16.0);
}

#[test]
fn operand_order_follows_pop_order() {
    let mut session = Session::new();
    assert_value(&mut session, "10 4 -", 6.0);
    assert_value(&mut session, "1 4 /", 0.25);
    assert_value(&mut session, "2 3 ^", 8.0);
    assert_value(&mut session, "7 3 %", 1.0);
}

#[test]
fn addition_commutes_after_rounding() {
    let pairs = [(1.1, 2.2), (0.3, 1000.7), (3.14159, 2.71828), (65000.0, 0.001)];
    for (a, b) in pairs {
        let mut session = Session::new();
        let left = process_line(&format!("{a} {b} +"), &mut session).unwrap();
        let right = process_line(&format!("{b} {a} +"), &mut session).unwrap();
        assert_eq!(left, right, "{a} + {b}");
    }
}

#[test]
fn result_recall_reads_relative_to_latest() {
    let mut session = Session::new();
    assert_value(&mut session, "1 1 +", 2.0);
    assert_value(&mut session, "(0 RES)", 2.0);
    assert_value(&mut session, "5 5 +", 10.0);
    assert_value(&mut session, "(2 RES) (0 RES) *", 20.0);

    let err = process_line("(5 RES)", &mut session).unwrap_err();
    assert!(matches!(err,
                     CalcError::Eval(EvalError::NoSuchResult { index:     5,
                                                               available: 4, })));
}

#[test]
fn recall_on_empty_session_fails() {
    let mut session = Session::new();
    let err = evaluate("(0 RES)", &mut session).unwrap_err();
    assert_eq!(err,
               EvalError::NoSuchResult { index:     0,
                                         available: 0, });
    assert!(session.is_empty());
}

#[test]
fn memory_store_and_read() {
    let mut session = Session::new();
    assert_value(&mut session, "(MEM)", 0.0);
    assert_value(&mut session, "(3.5 MEM)", 3.5);
    assert_value(&mut session, "(MEM)", 3.5);
    assert_eq!(session.memory(), 3.5);

    assert_value(&mut session, "(0.1 MEM)", 0.099_975_585_937_5);
    assert_value(&mut session, "(MEM) (MEM) +", 0.199_951_171_875);
}

#[test]
fn failed_line_leaves_session_untouched() {
    let mut session = Session::new();
    assert_value(&mut session, "(2 MEM)", 2.0);

    let before = session.clone();
    assert_failure(&mut session, "(9 MEM) 0 /");
    assert_failure(&mut session, "(1 2 3 +)");
    assert_failure(&mut session, "4 0 /");
    assert_eq!(session, before);
    assert_eq!(session.memory(), 2.0);
}

#[test]
fn division_by_zero_is_error() {
    let mut session = Session::new();
    assert_eq!(evaluate("4 0 /", &mut session).unwrap_err(),
               EvalError::DivisionByZero { operator: '/' });
    assert_eq!(evaluate("4 0 %", &mut session).unwrap_err(),
               EvalError::DivisionByZero { operator: '%' });
    assert!(session.is_empty());
}

#[test]
fn evaluator_reports_stack_errors() {
    let mut session = Session::new();
    assert_eq!(evaluate("1 +", &mut session).unwrap_err(),
               EvalError::InsufficientOperands { operator: '+' });
    assert_eq!(evaluate("1 2 3 +", &mut session).unwrap_err(),
               EvalError::MalformedExpression { count: 2 });
    assert_eq!(evaluate("", &mut session).unwrap_err(),
               EvalError::MalformedExpression { count: 0 });
    assert_eq!(evaluate("1 2 x", &mut session).unwrap_err(),
               EvalError::InvalidToken { token: "X".to_string() });
    assert_eq!(evaluate("(1 2 +", &mut session).unwrap_err(),
               EvalError::UnbalancedParentheses);
}

#[test]
fn negative_base_needs_whole_exponent() {
    let mut session = Session::new();
    assert_value(&mut session, "(0 3 -) 2 ^", 9.0);
    assert_value(&mut session, "2 (0 1 -) ^", 0.5);
    assert!(matches!(evaluate("(0 3 -) 0.5 ^", &mut session),
                     Err(EvalError::InvalidExponent { .. })));
}

#[test]
fn max_operator_picks_larger() {
    let mut session = Session::new();
    assert_value(&mut session, "3 9 |", 9.0);
    assert_value(&mut session, "9 3 |", 9.0);
    assert_value(&mut session, "(0 1 -) (0 2 -) |", -1.0);
}

#[test]
fn deep_nesting_is_rejected() {
    let depth = 100;
    let line = format!("{}1 1 +{}", "(".repeat(depth), " 1 +)".repeat(depth));

    let mut session = Session::new();
    assert!(evaluate(&line, &mut session).is_err());
    assert!(process_line(&line, &mut session).is_err());
}
