use std::cmp::Ordering;

use regex::Regex;

use crate::errors::MatchError;
use crate::model::{ErrorValue, Value};
use crate::normalize::normalize_error_message;

pub(super) fn compare_error(actual: &Value, expected: &ErrorValue) -> Result<Ordering, MatchError> {
    let Value::Error(actual) = actual else {
        return Ok(actual.type_name().cmp("Error"));
    };

    if !expected.is_regex {
        let message = normalize_error_message(&actual.message);
        return Ok((actual.kind.as_str(), &*message)
            .cmp(&(expected.kind.as_str(), expected.message.as_str())));
    }

    // Both patterns are compiled up front so a malformed one is reported even
    // when the other half already fails to match.
    let kind = compile("kind", &expected.kind)?;
    let message = compile("message", &expected.message)?;
    if kind.is_match(&actual.kind) && message.is_match(&actual.message) {
        Ok(Ordering::Equal)
    } else {
        Ok(Ordering::Less)
    }
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex, MatchError> {
    Regex::new(pattern).map_err(|e| MatchError::InvalidPattern {
        field,
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}
