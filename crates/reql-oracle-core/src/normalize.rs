//! Text normalization applied to server output before comparison.
//!
//! Debug builds of the server append assertion traces and multi-line
//! "offending object" dumps to messages; none of that is stable across
//! builds, so it is cut away here.

use std::borrow::Cow;

/// Marker after which debug builds append an assertion trace.
pub const FAILED_ASSERTION_MARKER: &str = "\nFailed assertion:";

/// Drops everything from [`FAILED_ASSERTION_MARKER`] onward.
pub fn strip_failed_assertion(text: &str) -> &str {
    match text.find(FAILED_ASSERTION_MARKER) {
        Some(idx) => &text[..idx],
        None => text,
    }
}

/// Collapses a detail block introduced by a line-ending colon.
///
/// The first `:` that ends a line (or the whole text) is replaced by `.` and
/// the rest of the message is dropped, so `"Index out of bounds:\n[1][5]"`
/// and `"Index out of bounds:"` both become `"Index out of bounds."`.
pub fn normalize_error_message(message: &str) -> Cow<'_, str> {
    for (idx, _) in message.match_indices(':') {
        let rest = &message[idx + 1..];
        if rest.is_empty() || rest.starts_with('\n') {
            return Cow::Owned(format!("{}.", &message[..idx]));
        }
    }
    Cow::Borrowed(message)
}

/// Strips a driver namespace from an error class name
/// (`RethinkDB::RqlRuntimeError`, `rethinkdb.errors.RqlRuntimeError`).
pub fn strip_namespace(type_name: &str) -> &str {
    let tail = type_name.rsplit("::").next().unwrap_or(type_name);
    tail.rsplit('.').next().unwrap_or(tail)
}

pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
