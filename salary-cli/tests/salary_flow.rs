//! End-to-end tests of the prompt, parse, calculate and report flow using
//! in-memory input and output.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use salary_cli::{app, input};
use salary_core::SalaryCalculator;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Output of one `app::run` session.
struct Session {
    status: u8,
    stdout: String,
    stderr: String,
}

fn run_session(
    typed: &str,
    brackets: Option<&Path>,
) -> Session {
    let policy = app::load_policy(None, brackets).unwrap();
    let calculator = SalaryCalculator::new(&policy).unwrap();

    let (mut out, mut err) = (Vec::new(), Vec::new());
    let status = app::run(&calculator, &mut Cursor::new(typed), &mut out, &mut err).unwrap();

    Session {
        status,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}

#[test]
fn test_session_prints_banner_prompt_and_report() {
    let session = run_session("3600\n", None);
    let output = &session.stdout;

    assert_eq!(session.status, app::EXIT_SUCCESS);
    assert!(session.stderr.is_empty());
    assert!(output.starts_with("======================================\n"));
    assert!(output.contains("연봉(총액): 36,000,000원"));
    assert!(output.contains("  - (소계) 공제 합계   : 336,861원"));
    assert!(output.ends_with("연 실수령액: 31,957,662원\n--------------------------------------\n"));
}

#[test]
fn test_session_for_50m_salary() {
    let output = run_session("5000\n", None).stdout;

    assert!(output.contains("연봉(총액): 50,000,000원"));
    assert!(output.contains("월 총액   : 4,166,666원"));
    assert!(output.contains("과세급여(월): 3,966,666원"));
}

#[test]
fn test_session_reports_whole_unit_premiums() {
    let output = run_session("244\n", None).stdout;

    assert!(output.contains("  - 고용보험: 30원"));
}

#[test]
fn test_invalid_input_exits_with_status_1() {
    for typed in ["", "\n", "abc\n", "-1\n", "50.5\n"] {
        let session = run_session(typed, None);

        assert_eq!(session.status, app::EXIT_INVALID_INPUT, "input {typed:?}");
        assert_eq!(
            session.stderr,
            format!("{}\n", input::InputError::NotAWholeNumber(typed.trim().to_string())),
            "input {typed:?}"
        );
        assert!(session.stdout.ends_with("(예: 5000) > "), "input {typed:?}");
        assert!(!session.stdout.contains("연봉(총액)"), "input {typed:?}");
    }
}

#[test]
fn test_bracket_file_replaces_builtin_brackets() {
    let path = fixture("two_brackets.csv");
    let policy = app::load_policy(None, Some(&path)).unwrap();

    assert_eq!(policy.tax.brackets.len(), 2);
    assert_eq!(policy.tax.brackets[1].deduction, dec!(1000000));

    let trace = SalaryCalculator::new(&policy)
        .unwrap()
        .calculate(dec!(36000000))
        .trace;
    // 5% of the 18,650,229.96 taxable base.
    assert_eq!(trace.annual_income_tax, dec!(932511));
}

#[test]
fn test_missing_bracket_file_is_an_error() {
    let err = app::load_policy(None, Some(Path::new("nope.csv"))).unwrap_err();

    assert!(err.to_string().contains("Failed to load tax brackets: nope.csv"));
}
