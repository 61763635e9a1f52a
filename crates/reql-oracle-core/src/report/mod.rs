pub mod console;
pub mod json;

use crate::runner::SuiteReport;

/// Totals across several suites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Totals {
    pub fn of(reports: &[SuiteReport]) -> Self {
        reports.iter().fold(Self::default(), |acc, r| Self {
            total: acc.total + r.total,
            passed: acc.passed + r.passed,
            failed: acc.failed + r.failed,
        })
    }
}
