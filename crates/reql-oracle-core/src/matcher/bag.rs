use std::cmp::Ordering;

use super::{compare, compare_sequences};
use crate::errors::MatchError;
use crate::model::Value;

/// Order-independent comparison: both sides are sorted with the matcher as
/// the ordering, then compared as sequences. If a pairing of equal elements
/// exists, sorting by the same relation lines the pairs up.
///
/// Wildcards are the exception: `uuid()` sorts like the text `<any uuid>`,
/// so it only pairs up with a UUID that lands in the same spot among the
/// other strings of the bag.
pub(super) fn compare_bags(actual: &[Value], expected: &[Value]) -> Result<Ordering, MatchError> {
    let actual: Vec<&Value> = actual.iter().collect();
    let expected: Vec<&Value> = expected.iter().collect();
    let actual = merge_sort(&actual)?;
    let expected = merge_sort(&expected)?;
    compare_sequences(actual.iter().copied(), expected.iter().copied())
}

// Hand-rolled so a matcher fault can propagate, and so a relation that is not
// a strict total order (wildcards, NaN) cannot trip the std sort's checks.
fn merge_sort<'a>(items: &[&'a Value]) -> Result<Vec<&'a Value>, MatchError> {
    if items.len() <= 1 {
        return Ok(items.to_vec());
    }
    let (left, right) = items.split_at(items.len() / 2);
    let left = merge_sort(left)?;
    let right = merge_sort(right)?;

    let mut merged = Vec::with_capacity(items.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if compare(left[i], right[j])? == Ordering::Greater {
            merged.push(right[j]);
            j += 1;
        } else {
            merged.push(left[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    Ok(merged)
}
