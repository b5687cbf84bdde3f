use std::fs;

use intcalc::{
    error::{CalcError, ErrorCategory},
    evaluate_source,
    interpreter::session::Session,
};
use num::BigInt;
use walkdir::WalkDir;

/// What a script line is expected to produce.
#[derive(Debug)]
enum Expected {
    Value(BigInt),
    Nothing,
    Failure,
}

fn parse_expected(text: &str) -> Expected {
    match text.trim() {
        "none" => Expected::Nothing,
        "error" => Expected::Failure,
        value => Expected::Value(value.parse()
                                      .unwrap_or_else(|e| panic!("bad expectation {value:?}: {e}"))),
    }
}

/// Runs a script in one session. Every line reads `input => expected`, where
/// `expected` is an integer, `none` or `error`. Lines starting with `#` and
/// blank lines are skipped.
fn run_script(path: &std::path::Path, content: &str) -> usize {
    let mut session = Session::default();
    let mut checked = 0;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (input, expected) =
            line.rsplit_once("=>")
                .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>' in {line:?}", i + 1));
        let expected = parse_expected(expected);
        let result = session.run_line(input);

        match (&expected, &result) {
            (Expected::Value(want), Ok(Some(got))) if want == got => {},
            (Expected::Nothing, Ok(None)) => {},
            (Expected::Failure, Err(e)) if !e.is_defect() => {},
            _ => panic!("{path:?}:{}: {input:?} gave {result:?}, expected {expected:?}", i + 1),
        }
        checked += 1;
    }

    checked
}

#[test]
fn scripts_work() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| {
                                                  e.path()
                                                   .extension()
                                                   .is_some_and(|ext| ext == "calc")
                                              })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += run_script(path, &content);
    }

    assert!(count > 0, "No script lines found in tests/scripts");
}

fn assert_value(src: &str, expected: i64) {
    match evaluate_source(src) {
        Ok(Some(value)) => assert_eq!(value, BigInt::from(expected), "{src:?}"),
        other => panic!("{src:?} gave {other:?}, expected {expected}"),
    }
}

fn assert_category(src: &str, category: ErrorCategory) {
    match evaluate_source(src) {
        Err(e) => {
            assert_eq!(e.category(), category, "{src:?} failed with {e}");
            assert!(!e.is_defect(), "{src:?} reported a defect: {e:?}");
        },
        Ok(value) => panic!("{src:?} gave {value:?} but was expected to fail"),
    }
}

#[test]
fn multi_line_sources() {
    assert_value("let a = 3\nlet b = 4\na * a + b * b", 25);
    assert_value("let n = 1\nlet n = n * 2\nlet n = n * 2\nn", 4);
    assert_value("1\n\n2\n", 2);
}

#[test]
fn declarations_only_have_no_value() {
    assert_eq!(evaluate_source("let x = 1\nlet y = 2"), Ok(None));
    assert_eq!(evaluate_source(""), Ok(None));
}

#[test]
fn first_error_stops_the_source() {
    assert_category("let x = 1\nx / 0\nx", ErrorCategory::Evaluation);
}

#[test]
fn error_categories() {
    assert_category("12ab", ErrorCategory::Lexical);
    assert_category("1 -- 2", ErrorCategory::Lexical);
    assert_category("1 # 2", ErrorCategory::Lexical);
    assert_category("(1 + 2", ErrorCategory::Syntax);
    assert_category("let = 3", ErrorCategory::Syntax);
    assert_category("let x 3", ErrorCategory::Syntax);
    assert_category("1 2", ErrorCategory::Syntax);
    assert_category("undefined", ErrorCategory::Evaluation);
    assert_category("2 ** -1", ErrorCategory::Evaluation);
}

#[test]
fn errors_render_without_the_wrapper() {
    let err = evaluate_source("y").unwrap_err();
    assert!(matches!(err, CalcError::Runtime(_)));
    assert!(err.to_string().contains('y'), "{err}");
}
