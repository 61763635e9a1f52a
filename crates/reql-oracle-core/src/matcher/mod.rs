//! Structural comparison of an actual result against an expected value.
//!
//! [`compare`] always receives the observed value first. Wildcards, tags and
//! regex errors are only honored on the expected side; when they turn up as
//! `actual` (which happens while a bag sorts its own expected items) they are
//! ordered by category like any other value, except that `uuid()` sorts
//! among strings as if it were one.
//!
//! A mismatch is any ordering other than `Equal`. Its sign carries no meaning
//! beyond giving bags a deterministic sort order.

mod bag;
mod error_match;
mod numeric;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::MatchError;
use crate::model::Value;
use crate::normalize::strip_failed_assertion;

lazy_static! {
    static ref UUID_PATTERN: Regex = Regex::new(
        r"(?i)[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}"
    )
    .unwrap();
}

/// Where `uuid()` sorts among plain strings when a bag orders its own items.
/// It lands after digits and before letters.
const ANY_UUID_SORT_KEY: &str = "<any uuid>";

/// True when `actual` matches `expected`.
pub fn matches(actual: &Value, expected: &Value) -> Result<bool, MatchError> {
    Ok(compare(actual, expected)? == Ordering::Equal)
}

/// Orders `actual` against `expected`; `Equal` means the values match.
///
/// Fails only when an expected regex error carries a malformed pattern.
pub fn compare(actual: &Value, expected: &Value) -> Result<Ordering, MatchError> {
    let ordering = match expected {
        Value::NoError => {
            if actual.is_error() {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        }
        Value::AnyUuid => match actual {
            Value::Text(text) if UUID_PATTERN.is_match(text) => Ordering::Equal,
            _ => Ordering::Greater,
        },
        Value::Error(expected) => error_match::compare_error(actual, expected)?,
        Value::List(items) => match actual {
            // Bag semantics hold whichever side the bag is written on.
            Value::Bag(actual_items) => bag::compare_bags(actual_items, items)?,
            _ => match actual.as_sequence() {
                Some(actual_items) => compare_sequences(actual_items.iter(), items.iter())?,
                None => actual.type_name().cmp(expected.type_name()),
            },
        },
        Value::Map(entries) => match actual {
            Value::Map(actual_entries) => compare_maps(actual_entries, entries)?,
            _ => actual.type_name().cmp(expected.type_name()),
        },
        Value::Bag(items) => match actual.as_sequence() {
            Some(actual_items) => bag::compare_bags(actual_items, items)?,
            None => actual.type_name().cmp("Array"),
        },
        Value::ArrLen { len, item } => match actual.as_sequence() {
            Some(actual_items) => compare_arrlen(actual_items, *len, item.as_deref())?,
            None => actual.type_name().cmp("Array"),
        },
        Value::IntTag(n) => match actual {
            Value::Int(i) => i.cmp(n),
            _ => actual.type_name().cmp("Integer"),
        },
        Value::FloatTag(n) => match actual {
            Value::Float(f) => numeric::cmp_floats(*f, *n),
            _ => actual.type_name().cmp("Float"),
        },
        Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Text(_) => {
            compare_scalars(actual, expected)
        }
    };
    Ok(ordering)
}

/// Length first, then element by element; the first unequal pair decides.
pub(crate) fn compare_sequences<'a, 'b>(
    actual: impl ExactSizeIterator<Item = &'a Value>,
    expected: impl ExactSizeIterator<Item = &'b Value>,
) -> Result<Ordering, MatchError> {
    match actual.len().cmp(&expected.len()) {
        Ordering::Equal => {}
        other => return Ok(other),
    }
    for (a, e) in actual.zip(expected) {
        let ord = compare(a, e)?;
        if ord != Ordering::Equal {
            return Ok(ord);
        }
    }
    Ok(Ordering::Equal)
}

fn compare_maps(
    actual: &BTreeMap<String, Value>,
    expected: &BTreeMap<String, Value>,
) -> Result<Ordering, MatchError> {
    // BTreeMap iterates keys sorted, so this is the sorted-key-list comparison.
    match actual.keys().cmp(expected.keys()) {
        Ordering::Equal => {}
        other => return Ok(other),
    }
    for (key, expected_value) in expected {
        let Some(actual_value) = actual.get(key) else {
            return Ok(Ordering::Less);
        };
        let ord = compare(actual_value, expected_value)?;
        if ord != Ordering::Equal {
            return Ok(ord);
        }
    }
    Ok(Ordering::Equal)
}

fn compare_arrlen(
    actual: &[Value],
    len: usize,
    item: Option<&Value>,
) -> Result<Ordering, MatchError> {
    match actual.len().cmp(&len) {
        Ordering::Equal => {}
        other => return Ok(other),
    }
    let Some(item) = item else {
        return Ok(Ordering::Equal);
    };
    for a in actual {
        let ord = compare(a, item)?;
        if ord != Ordering::Equal {
            return Ok(ord);
        }
    }
    Ok(Ordering::Equal)
}

/// Native ordering for plain scalars. Pairs without one are ordered by
/// category name, which never yields `Equal` across categories.
fn compare_scalars(actual: &Value, expected: &Value) -> Ordering {
    let native = match (actual, expected) {
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Float(b)) => numeric::cmp_int_float(*a, *b),
        (Value::Float(a), Value::Int(b)) => numeric::cmp_int_float(*b, *a).map(Ordering::reverse),
        (Value::Float(a), Value::Float(b)) => Some(numeric::cmp_floats(*a, *b)),
        (Value::Text(a), Value::Text(b)) => Some(strip_failed_assertion(a).cmp(b.as_str())),
        (Value::AnyUuid, Value::Text(b)) => Some(ANY_UUID_SORT_KEY.cmp(b.as_str())),
        _ => None,
    };
    native.unwrap_or_else(|| actual.type_name().cmp(expected.type_name()))
}
