use std::path::Path;

use crate::report::Totals;
use crate::runner::SuiteReport;

pub fn build_json(reports: &[SuiteReport]) -> serde_json::Value {
    let totals = Totals::of(reports);
    serde_json::json!({
        "total": totals.total,
        "passed": totals.passed,
        "failed": totals.failed,
        "suites": reports,
    })
}

pub fn write_json(reports: &[SuiteReport], out: &Path) -> anyhow::Result<()> {
    let v = build_json(reports);
    std::fs::write(out, serde_json::to_string_pretty(&v)?)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {}", out.display(), e))?;
    Ok(())
}
