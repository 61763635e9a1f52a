use crate::report::Totals;
use crate::runner::{CaseResult, CaseStatus, SuiteReport};

/// Failure block for one case; empty for passing cases.
#[must_use]
pub fn format_failure(result: &CaseResult) -> String {
    match result.status {
        CaseStatus::Pass => String::new(),
        CaseStatus::Fail => format!(
            "TEST FAILURE: {}\n\tBODY: {}\n\tVALUE: {}\n\tEXPECTED: {}\n",
            result.name, result.src, result.actual, result.expected
        ),
        CaseStatus::SetupError => format!(
            "SETUP ERROR: {}\n\tBODY: {}\n\tEXPECTED: {}\n\tFAILURE: {}\n",
            result.name,
            result.src,
            result.expected,
            result.message.as_deref().unwrap_or("")
        ),
        CaseStatus::Error => format!(
            "{}: Error: {} when comparing {} and {}\n",
            result.name,
            result.message.as_deref().unwrap_or(""),
            result.actual,
            result.expected
        ),
    }
}

#[must_use]
pub fn format_summary(totals: Totals) -> String {
    format!(
        "{} of {} tests passed. {} tests failed.",
        totals.passed, totals.total, totals.failed
    )
}

/// Prints failure blocks to stderr and one summary line per suite to stdout.
pub fn print_report(report: &SuiteReport) {
    for failure in report.failures() {
        eprintln!("{}", format_failure(failure));
    }
    println!(
        "{}: {}",
        report.suite,
        format_summary(Totals::of(std::slice::from_ref(report)))
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: CaseStatus, message: Option<&str>) -> CaseResult {
        CaseResult {
            name: "nth out of range".into(),
            src: "r([1, 2]).nth(5)".into(),
            status,
            actual: "<RqlRuntimeError \"Index out of bounds:\">".into(),
            expected: "[1]".into(),
            message: message.map(ToString::to_string),
        }
    }

    #[test]
    fn failure_block_lists_body_value_and_expected() {
        let s = format_failure(&result(CaseStatus::Fail, None));
        assert!(s.starts_with("TEST FAILURE: nth out of range\n"));
        assert!(s.contains("\tBODY: r([1, 2]).nth(5)\n"));
        assert!(s.contains("\tVALUE: <RqlRuntimeError"));
        assert!(s.contains("\tEXPECTED: [1]\n"));
    }

    #[test]
    fn setup_and_comparison_errors_carry_the_message() {
        let s = format_failure(&result(CaseStatus::SetupError, Some("bad literal")));
        assert!(s.starts_with("SETUP ERROR: nth out of range"));
        assert!(s.contains("\tFAILURE: bad literal"));

        let s = format_failure(&result(CaseStatus::Error, Some("invalid kind pattern")));
        assert!(s.contains("Error: invalid kind pattern when comparing"));
    }

    #[test]
    fn passing_cases_render_nothing() {
        assert!(format_failure(&result(CaseStatus::Pass, None)).is_empty());
    }

    #[test]
    fn summary_counts() {
        let totals = Totals {
            total: 10,
            passed: 8,
            failed: 2,
        };
        assert_eq!(
            format_summary(totals),
            "8 of 10 tests passed. 2 tests failed."
        );
    }
}
