//! CLI command: reql-oracle check
//!
//! Usage:
//!   reql-oracle check suites/arith.yaml suites/errors.yaml [--format text|json] [-o report.json]

use anyhow::{Context, Result};
use reql_oracle_core::config::load_suite;
use reql_oracle_core::report::{console, json, Totals};
use reql_oracle_core::runner::{run_suite, SuiteReport};

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::exit_codes::{SUCCESS, TEST_FAILED};

pub fn run(args: CheckArgs) -> Result<i32> {
    // Load everything first so a broken file fails before any report is printed.
    let mut suites = Vec::with_capacity(args.suites.len());
    for path in &args.suites {
        let suite =
            load_suite(path).with_context(|| format!("failed to load {}", path.display()))?;
        suites.push(suite);
    }

    let reports: Vec<SuiteReport> = suites.iter().map(run_suite).collect();

    match args.format {
        OutputFormat::Text => {
            for report in &reports {
                console::print_report(report);
            }
            if reports.len() > 1 {
                println!("{}", console::format_summary(Totals::of(&reports)));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json::build_json(&reports))?);
        }
    }

    if let Some(out) = &args.output {
        json::write_json(&reports, out)?;
        tracing::info!(path = %out.display(), "wrote JSON report");
    }

    if reports.iter().all(SuiteReport::is_success) {
        Ok(SUCCESS)
    } else {
        Ok(TEST_FAILED)
    }
}
