//! Recorded suites: test cases whose query results were captured ahead of
//! time, stored as YAML.
//!
//! ```yaml
//! version: 1
//! suite: arith
//! tests:
//!   - name: add
//!     src: r.expr(1) + 2
//!     result: 3
//!     expected: int_cmp(3)
//!   - name: out of bounds
//!     error: { type: "RethinkDB::RqlRuntimeError", message: "Index out of bounds:" }
//!     expected: err('RqlRuntimeError', 'Index out of bounds.')
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{ConfigError, LiteralError};
use crate::literal::parse_expected;
use crate::model::{RaisedError, Value};

pub const SUPPORTED_SUITE_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Suite {
    pub version: u32,
    pub suite: String,
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestCase {
    pub name: String,
    /// Query source, echoed in failure reports.
    #[serde(default)]
    pub src: String,
    /// Recorded result; absent or `null` both mean a null result.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// Recorded raised error, mutually exclusive with `result`.
    #[serde(default)]
    pub error: Option<RaisedError>,
    #[serde(default)]
    pub expected: Option<ExpectedSpec>,
}

/// A string is an expected literal; any other YAML value is taken as data.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExpectedSpec {
    Literal(String),
    Data(serde_json::Value),
}

impl TestCase {
    pub fn actual(&self) -> Value {
        match &self.error {
            Some(raised) => Value::from_outcome(Err(raised.clone())),
            None => self.result.clone().map(Value::from).unwrap_or(Value::Null),
        }
    }

    pub fn expected(&self) -> Result<Value, LiteralError> {
        match &self.expected {
            None => Ok(Value::NoError),
            Some(ExpectedSpec::Literal(src)) => parse_expected(src),
            Some(ExpectedSpec::Data(data)) => Ok(Value::from(data.clone())),
        }
    }

    /// Source text of the expectation, for reports.
    pub fn expected_source(&self) -> String {
        match &self.expected {
            None => String::new(),
            Some(ExpectedSpec::Literal(src)) => src.clone(),
            Some(ExpectedSpec::Data(data)) => data.to_string(),
        }
    }
}

pub fn load_suite(path: &Path) -> Result<Suite, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read suite {}: {}", path.display(), e)))?;
    parse_suite(&raw)
        .map_err(|ConfigError(msg)| ConfigError(format!("{}: {}", path.display(), msg)))
}

pub fn parse_suite(raw: &str) -> Result<Suite, ConfigError> {
    let suite: Suite = serde_yaml::from_str(raw)
        .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;
    if suite.version != SUPPORTED_SUITE_VERSION {
        return Err(ConfigError(format!(
            "unsupported suite version {} (supported: {})",
            suite.version, SUPPORTED_SUITE_VERSION
        )));
    }
    if suite.tests.is_empty() {
        return Err(ConfigError("suite has no tests".into()));
    }
    let mut seen = HashSet::new();
    for case in &suite.tests {
        if !seen.insert(case.name.as_str()) {
            return Err(ConfigError(format!("duplicate test name '{}'", case.name)));
        }
        if case.result.is_some() && case.error.is_some() {
            return Err(ConfigError(format!(
                "test '{}' records both a result and an error",
                case.name
            )));
        }
    }
    Ok(suite)
}
