//! Runs recorded cases through the matcher and tallies the outcome.
//!
//! A case that cannot be evaluated (bad literal, bad regex) counts as a
//! failure of that case only; the rest of the suite still runs.

use serde::Serialize;

use crate::config::{Suite, TestCase};
use crate::errors::LiteralError;
use crate::matcher;
use crate::model::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Pass,
    /// The values did not match.
    Fail,
    /// The expected literal could not be parsed.
    SetupError,
    /// The comparison itself faulted.
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub name: String,
    pub src: String,
    pub status: CaseStatus,
    /// Rendered actual value.
    pub actual: String,
    /// Rendered expected value; the raw literal when it failed to parse.
    pub expected: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        self.status == CaseStatus::Pass
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub suite: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<CaseResult>,
}

impl SuiteReport {
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            total: 0,
            passed: 0,
            failed: 0,
            results: Vec::new(),
        }
    }

    pub fn record(&mut self, result: CaseResult) {
        self.total += 1;
        if result.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(result);
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|r| !r.passed())
    }
}

/// Compares one actual value against a parsed (or unparsable) expectation.
pub fn check(
    name: &str,
    src: &str,
    actual: &Value,
    expected: Result<Value, LiteralError>,
    expected_source: &str,
) -> CaseResult {
    let mut result = CaseResult {
        name: name.to_string(),
        src: src.to_string(),
        status: CaseStatus::Pass,
        actual: actual.to_string(),
        expected: expected_source.to_string(),
        message: None,
    };

    let expected = match expected {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(test = name, error = %e, "expected value could not be built");
            result.status = CaseStatus::SetupError;
            result.message = Some(e.to_string());
            return result;
        }
    };
    result.expected = expected.to_string();

    match matcher::matches(actual, &expected) {
        Ok(true) => {
            tracing::debug!(test = name, "pass");
        }
        Ok(false) => {
            tracing::debug!(test = name, actual = %actual, expected = %expected, "mismatch");
            result.status = CaseStatus::Fail;
        }
        Err(e) => {
            tracing::warn!(test = name, error = %e, "comparison failed");
            result.status = CaseStatus::Error;
            result.message = Some(e.to_string());
        }
    }
    result
}

pub fn check_case(case: &TestCase) -> CaseResult {
    check(
        &case.name,
        &case.src,
        &case.actual(),
        case.expected(),
        &case.expected_source(),
    )
}

pub fn run_suite(suite: &Suite) -> SuiteReport {
    let mut report = SuiteReport::new(&suite.suite);
    for case in &suite.tests {
        report.record(check_case(case));
    }
    tracing::info!(
        suite = %suite.suite,
        total = report.total,
        passed = report.passed,
        failed = report.failed,
        "suite finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_suite;
    use crate::literal::parse_expected;
    use crate::model::ErrorValue;

    #[test]
    fn check_reports_each_outcome() {
        let pass = check("p", "", &Value::Int(1), Ok(Value::Int(1)), "1");
        assert_eq!(pass.status, CaseStatus::Pass);
        assert!(pass.message.is_none());

        let fail = check("f", "", &Value::Int(1), Ok(Value::Int(2)), "2");
        assert_eq!(fail.status, CaseStatus::Fail);
        assert_eq!(fail.actual, "1");
        assert_eq!(fail.expected, "2");

        let setup = check(
            "s",
            "",
            &Value::Int(1),
            Err(LiteralError::new(0, "expected a value")),
            "]",
        );
        assert_eq!(setup.status, CaseStatus::SetupError);
        assert_eq!(setup.expected, "]");
        assert!(setup.message.unwrap().contains("expected a value"));

        let fault = check(
            "e",
            "",
            &Value::Error(ErrorValue::new("E", "m")),
            Ok(Value::Error(ErrorValue::regex("(", "m"))),
            "err_regex('(', 'm')",
        );
        assert_eq!(fault.status, CaseStatus::Error);
        assert!(fault.message.unwrap().contains("invalid kind pattern"));
    }

    #[test]
    fn deeply_nested_literal_is_a_setup_error() {
        let source = "[".repeat(50_000);
        let result = check("deep", "", &Value::Null, parse_expected(&source), &source);
        assert_eq!(result.status, CaseStatus::SetupError);
        assert!(result.message.unwrap().contains("nesting too deep"));
    }

    #[test]
    fn run_suite_tallies_and_keeps_going() {
        let suite = parse_suite(
            r#"
version: 1
suite: mixed
tests:
  - name: ok
    result: [1, 2, 3]
    expected: bag([3, 2, 1])
  - name: wrong
    result: 1
    expected: "2"
  - name: broken literal
    result: 1
    expected: "[1,"
  - name: no error
    result: { inserted: 1 }
"#,
        )
        .unwrap();

        let report = run_suite(&suite);
        assert_eq!(report.suite, "mixed");
        assert_eq!(report.total, 4);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 2);
        assert!(!report.is_success());
        let failed: Vec<&str> = report.failures().map(|r| r.name.as_str()).collect();
        assert_eq!(failed, vec!["wrong", "broken literal"]);
    }
}
