//! Human-readable rendering used in failure reports.
//!
//! Data renders as JSON; expected-side annotations render as the constructor
//! that produces them (`bag([1, 2])`, `uuid()`), and errors as
//! `<Kind "message">`, with a `~` before regex messages.

use std::fmt::{self, Display, Formatter};

use crate::model::{ErrorValue, Value};

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Text(s) => write_quoted(f, s),
            Value::List(items) => write_items(f, items),
            Value::Map(entries) => {
                f.write_str("{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, key)?;
                    write!(f, ": {}", value)?;
                }
                f.write_str("}")
            }
            Value::Error(err) => write!(f, "{}", err),
            Value::Bag(items) => {
                f.write_str("bag(")?;
                write_items(f, items)?;
                f.write_str(")")
            }
            Value::IntTag(n) => write!(f, "int_cmp({})", n),
            Value::FloatTag(n) => write!(f, "float_cmp({:?})", n),
            Value::ArrLen { len, item: None } => write!(f, "arrlen({})", len),
            Value::ArrLen {
                len,
                item: Some(item),
            } => write!(f, "arrlen({}, {})", len, item),
            Value::AnyUuid => f.write_str("uuid()"),
            Value::NoError => f.write_str("<no error>"),
        }
    }
}

impl Display for ErrorValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{} ", self.kind)?;
        if self.is_regex {
            f.write_str("~ ")?;
        }
        write_quoted(f, &self.message)?;
        f.write_str(">")
    }
}

fn write_items(f: &mut Formatter<'_>, items: &[Value]) -> fmt::Result {
    f.write_str("[")?;
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

fn write_quoted(f: &mut Formatter<'_>, s: &str) -> fmt::Result {
    let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_renders_as_json() {
        let value = Value::object([
            ("b", Value::list([Value::Int(1), Value::Float(2.0), Value::Null])),
            ("a", Value::from("x\"y")),
        ]);
        assert_eq!(value.to_string(), r#"{"a": "x\"y", "b": [1, 2.0, null]}"#);
    }

    #[test]
    fn annotations_render_as_constructors() {
        assert_eq!(Value::bag([Value::Int(1)]).to_string(), "bag([1])");
        assert_eq!(Value::IntTag(3).to_string(), "int_cmp(3)");
        assert_eq!(Value::FloatTag(3.0).to_string(), "float_cmp(3.0)");
        assert_eq!(
            Value::ArrLen {
                len: 2,
                item: Some(Box::new(Value::Bool(true)))
            }
            .to_string(),
            "arrlen(2, true)"
        );
        assert_eq!(Value::AnyUuid.to_string(), "uuid()");
        assert_eq!(Value::NoError.to_string(), "<no error>");
    }

    #[test]
    fn errors_render_with_kind_and_message() {
        assert_eq!(
            ErrorValue::new("RqlRuntimeError", "Index out of bounds.").to_string(),
            r#"<RqlRuntimeError "Index out of bounds.">"#
        );
        assert_eq!(
            Value::Error(ErrorValue::regex("Rql.*", "Index.*")).to_string(),
            r#"<Rql.* ~ "Index.*">"#
        );
    }
}
