use std::collections::BTreeMap;

use serde::Deserialize;

use crate::normalize::{first_line, strip_namespace};

/// A value taking part in a comparison.
///
/// Actual results only ever use the data variants (`Null` through `Error`).
/// `Bag`, the numeric tags, `ArrLen` and the two sentinels are annotations a
/// test writes on the expected side.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Error(ErrorValue),
    /// Unordered multiset: matches any permutation of its items.
    Bag(Vec<Value>),
    /// Equal to `n` and produced as an integer.
    IntTag(i64),
    /// Equal to `n` and produced as a float.
    FloatTag(f64),
    /// A sequence of exactly `len` items, each matching `item` when given.
    ArrLen {
        len: usize,
        item: Option<Box<Value>>,
    },
    /// Any string holding a UUID.
    AnyUuid,
    /// Anything except an error.
    NoError,
}

impl Value {
    pub fn bag(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Bag(items.into_iter().collect())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Lifts the outcome of running a query into a comparable value.
    pub fn from_outcome(outcome: Result<Value, RaisedError>) -> Self {
        match outcome {
            Ok(value) => value,
            Err(raised) => Value::Error(raised.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// The items of a value that can stand in for an ordered sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Bag(items) => Some(items),
            _ => None,
        }
    }

    /// Category name used to order values of different shapes.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Boolean",
            Value::Int(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Text(_) => "String",
            Value::List(_) => "Array",
            Value::Map(_) => "Object",
            Value::Error(_) => "Error",
            Value::Bag(_) => "Bag",
            Value::IntTag(_) => "IntTag",
            Value::FloatTag(_) => "FloatTag",
            Value::ArrLen { .. } => "ArrLen",
            Value::AnyUuid => "Uuid",
            Value::NoError => "NoError",
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<ErrorValue> for Value {
    fn from(err: ErrorValue) -> Self {
        Value::Error(err)
    }
}

/// An error, either observed or expected.
///
/// With `is_regex` set, `kind` and `message` are patterns searched for in the
/// actual error's fields instead of literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorValue {
    pub kind: String,
    pub message: String,
    pub is_regex: bool,
}

impl ErrorValue {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            is_regex: false,
        }
    }

    pub fn regex(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            is_regex: true,
        }
    }

    /// Matches any error of exactly this kind, whatever its message.
    pub fn any_message(kind: &str) -> Self {
        Self::regex(format!("^{}$", regex::escape(kind)), "")
    }
}

/// An error as a driver raised it, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RaisedError {
    /// Fully qualified class name, e.g. `RethinkDB::RqlRuntimeError`.
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, alias = "message")]
    pub text: String,
}

impl RaisedError {
    pub fn new(type_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            text: text.into(),
        }
    }
}

impl From<RaisedError> for ErrorValue {
    fn from(raised: RaisedError) -> Self {
        ErrorValue::new(
            strip_namespace(&raised.type_name),
            first_line(&raised.text),
        )
    }
}
