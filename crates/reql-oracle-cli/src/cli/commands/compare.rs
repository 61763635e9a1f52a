//! CLI command: reql-oracle compare
//!
//! Examples:
//!   reql-oracle compare --expected 'bag([1, 2])' --actual '[2, 1]'
//!   reql-oracle compare --expected "err('RqlRuntimeError', 'Index out of bounds.')" \
//!       --error-type RethinkDB::RqlRuntimeError --error-message 'Index out of bounds:'

use anyhow::{Context, Result};
use reql_oracle_core::literal::parse_expected;
use reql_oracle_core::{matches, RaisedError, Value};

use crate::cli::args::CompareArgs;
use crate::exit_codes::{SUCCESS, TEST_FAILED};

pub fn run(args: CompareArgs) -> Result<i32> {
    let actual = actual_value(&args)?;
    let expected = parse_expected(&args.expected)?;

    let matched = matches(&actual, &expected)?;
    println!("{}", if matched { "match" } else { "mismatch" });
    println!("  actual:   {actual}");
    println!("  expected: {expected}");

    Ok(if matched { SUCCESS } else { TEST_FAILED })
}

fn actual_value(args: &CompareArgs) -> Result<Value> {
    if let Some(type_name) = &args.error_type {
        let text = args.error_message.clone().unwrap_or_default();
        return Ok(Value::from_outcome(Err(RaisedError::new(
            type_name.as_str(),
            text,
        ))));
    }
    let raw = args.actual.as_deref().unwrap_or("null");
    let data: serde_json::Value =
        serde_json::from_str(raw).context("--actual is not valid JSON")?;
    Ok(Value::from(data))
}
