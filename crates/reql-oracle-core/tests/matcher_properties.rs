use std::cmp::Ordering;

use proptest::prelude::*;
use reql_oracle_core::literal::parse_expected;
use reql_oracle_core::{compare, matches, ErrorValue, RaisedError, Value};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e9f64..1.0e9).prop_map(Value::Float),
        "[a-z ]{0,8}".prop_map(Value::Text),
        // No ':' in messages, so normalization leaves them alone.
        ("[A-Z][a-z]{0,6}", "[a-z ]{0,12}")
            .prop_map(|(kind, message)| Value::Error(ErrorValue::new(kind, message))),
    ]
}

fn plain_value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::List),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..6).prop_map(Value::Map),
        ]
    })
}

proptest! {
    #[test]
    fn every_plain_value_matches_itself(v in plain_value()) {
        prop_assert_eq!(compare(&v, &v).unwrap(), Ordering::Equal);
    }

    #[test]
    fn compare_is_repeatable(a in plain_value(), e in plain_value()) {
        let first = compare(&a, &e).unwrap();
        let second = compare(&a, &e).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn bag_ignores_order(items in prop::collection::vec(-50i64..50, 0..12).prop_shuffle()) {
        let mut sorted = items.clone();
        sorted.sort_unstable();
        let actual = Value::list(items.into_iter().map(Value::Int));
        let expected = Value::bag(sorted.into_iter().map(Value::Int));
        prop_assert!(matches(&actual, &expected).unwrap());
    }

    #[test]
    fn bag_notices_a_missing_element(items in prop::collection::vec(-50i64..50, 1..12)) {
        let actual = Value::list(items.iter().copied().map(Value::Int));
        let expected = Value::bag(items[1..].iter().copied().map(Value::Int));
        prop_assert!(!matches(&actual, &expected).unwrap());
    }

    #[test]
    fn int_tag_agrees_with_integer_order(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(compare(&Value::Int(a), &Value::IntTag(b)).unwrap(), a.cmp(&b));
        prop_assert!(!matches(&Value::Float(a as f64), &Value::IntTag(b)).unwrap());
    }

    #[test]
    fn untagged_numbers_compare_across_int_and_float(i in -(1i64 << 52)..(1i64 << 52)) {
        prop_assert!(matches(&Value::Int(i), &Value::Float(i as f64)).unwrap());
        prop_assert!(matches(&Value::Float(i as f64), &Value::Int(i)).unwrap());
    }

    #[test]
    fn no_error_accepts_anything_but_errors(v in plain_value()) {
        prop_assert_eq!(matches(&v, &Value::NoError).unwrap(), !v.is_error());
    }
}

#[test]
fn no_error_sentinel() {
    assert!(matches(&Value::Int(42), &Value::NoError).unwrap());
    let err = Value::Error(ErrorValue::new("X", "y"));
    assert!(!matches(&err, &Value::NoError).unwrap());
}

#[test]
fn uuid_wildcard() {
    let uuid = Value::from("550e8400-e29b-41d4-a716-446655440000");
    assert!(matches(&uuid, &Value::AnyUuid).unwrap());
    assert!(!matches(&Value::from("not-a-uuid"), &Value::AnyUuid).unwrap());
    assert_eq!(
        compare(&Value::Int(42), &Value::AnyUuid).unwrap(),
        Ordering::Greater
    );
}

#[test]
fn bags_from_literals() {
    let expected = parse_expected("bag([3, 1, 2])").unwrap();
    let actual = Value::list([1, 2, 3].map(Value::Int));
    assert!(matches(&actual, &expected).unwrap());

    let expected = parse_expected("bag([1, 2])").unwrap();
    let actual = Value::list([1, 2, 2].map(Value::Int));
    assert!(!matches(&actual, &expected).unwrap());
}

#[test]
fn numeric_tags() {
    assert!(matches(&Value::Int(3), &Value::IntTag(3)).unwrap());
    assert!(!matches(&Value::Float(3.0), &Value::IntTag(3)).unwrap());
    assert!(matches(&Value::Float(3.0), &Value::FloatTag(3.0)).unwrap());
}

#[test]
fn error_patterns() {
    let actual = Value::Error(ErrorValue::new("RqlRuntimeError", "Index out of bounds"));
    let expected = Value::Error(ErrorValue::regex("Rql.*Error", "Index.*"));
    assert!(matches(&actual, &expected).unwrap());

    let expected = Value::Error(ErrorValue::regex("Rql.*Error", "^Table"));
    assert_eq!(compare(&actual, &expected).unwrap(), Ordering::Less);
}

#[test]
fn raised_errors_are_lifted_before_matching() {
    let actual = Value::from_outcome(Err(RaisedError::new(
        "RethinkDB::RqlRuntimeError",
        "Index out of bounds:\nr([1])[5]\n     ^",
    )));
    let expected = parse_expected("err('RqlRuntimeError', 'Index out of bounds.')").unwrap();
    assert!(matches(&actual, &expected).unwrap());
}

#[test]
fn mapping_key_sets() {
    let ab = parse_expected("{a: 1, b: 2}").unwrap();
    let a = parse_expected("{a: 1}").unwrap();
    assert!(!matches(&ab, &a).unwrap());
    assert!(matches(&a, &a).unwrap());

    let ba = parse_expected("{b: 2, a: 1}").unwrap();
    assert!(matches(&ab, &ba).unwrap());
}

#[test]
fn bag_nested_in_a_mapping() {
    let expected = parse_expected("[{a: bag([1, 2])}]").unwrap();
    let actual = Value::from(serde_json::json!([{ "a": [2, 1] }]));
    assert!(matches(&actual, &expected).unwrap());
}

#[test]
fn malformed_pattern_is_a_fault() {
    let actual = Value::Error(ErrorValue::new("E", "m"));
    let expected = Value::Error(ErrorValue::regex("E", "("));
    assert!(compare(&actual, &expected).is_err());
}

#[test]
fn uuid_wildcard_inside_a_bag_of_strings() {
    let expected = parse_expected("bag([uuid(), 'a'])").unwrap();
    let actual = Value::from(serde_json::json!(["a", "550e8400-e29b-41d4-a716-446655440000"]));
    assert!(matches(&actual, &expected).unwrap());
}
