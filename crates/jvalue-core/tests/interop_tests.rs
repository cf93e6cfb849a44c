use jvalue_core::{parse, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;

// ============================================================================
// serde_json::Value conversions
// ============================================================================

#[test]
fn from_serde_json_value() {
    let reference = json!({
        "name": "Alice",
        "age": 30,
        "score": 9.5,
        "tags": ["a", "b"],
        "active": true,
        "manager": null
    });
    let v = Value::from(reference);
    assert_eq!(v["name"], "Alice");
    assert_eq!(v["age"].get_number(), 30.0);
    assert_eq!(v["score"].get_number(), 9.5);
    assert_eq!(v["tags"][1], "b");
    assert!(v["active"].get_bool());
    assert!(v["manager"].is_null());
    assert!(v.contains("manager"));
}

#[test]
fn into_serde_json_value() {
    let v = parse(r#"{"n": 3, "f": 0.25, "s": "x", "a": [null, false], "o": {}}"#).unwrap();
    let converted = serde_json::Value::from(&v);
    assert_eq!(
        converted,
        json!({"n": 3, "f": 0.25, "s": "x", "a": [null, false], "o": {}})
    );
    assert!(converted["n"].is_i64());
}

#[test]
fn non_finite_becomes_serde_null() {
    let v = Value::from(vec![Value::from(f64::NAN), Value::from(f64::INFINITY)]);
    assert_eq!(serde_json::Value::from(&v), json!([null, null]));
}

#[test]
fn large_integers_stay_floats_in_serde() {
    let v = Value::from(1e300);
    assert!(serde_json::Value::from(&v).is_f64());
}

// ============================================================================
// Serialize / Deserialize
// ============================================================================

#[test]
fn serialize_through_serde_json() {
    let v = parse(r#"{"b": [1, 2.5], "a": "x"}"#).unwrap();
    let text = serde_json::to_string(&v).unwrap();
    assert_eq!(text, r#"{"a":"x","b":[1,2.5]}"#);
    assert_eq!(text, v.to_json(0));
}

#[test]
fn deserialize_through_serde_json() {
    let v: Value = serde_json::from_str(r#"{"k": [1, "two", null, {"x": false}]}"#).unwrap();
    assert_eq!(v, parse(r#"{"k": [1, "two", null, {"x": false}]}"#).unwrap());
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Envelope {
    kind: String,
    payload: Value,
    extra: Option<Value>,
}

#[test]
fn value_embeds_in_derived_structs() {
    let text = r#"{"kind":"config","payload":{"depth":[1,2]},"extra":null}"#;
    let env: Envelope = serde_json::from_str(text).unwrap();
    assert_eq!(env.kind, "config");
    assert_eq!(env.payload["depth"][1], 2);
    assert_eq!(env.extra, None);

    let back = serde_json::to_string(&env).unwrap();
    assert_eq!(back, text);
}
