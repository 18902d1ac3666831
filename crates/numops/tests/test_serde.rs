//! Serialization of values and quantifiers.

#![cfg(feature = "serde")]

use numops::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_value_round_trip() {
    let values: Vec<Value<f64>> = vec![
        Value::scalar(-1.5),
        Value::from_slice(&[4.0, 3.0]).unwrap(),
    ];

    for value in values {
        let json = serde_json::to_string(&value).unwrap();
        let back: Value<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn test_scalar_json_shape() {
    let json = serde_json::to_string(&Value::scalar(2.0_f64)).unwrap();
    assert_eq!(json, r#"{"scalar":2.0}"#);
}

#[test]
fn test_quantifier_names() {
    assert_eq!(serde_json::to_string(&Quantifier::Any).unwrap(), r#""any""#);
    let q: Quantifier = serde_json::from_str(r#""all""#).unwrap();
    assert_eq!(q, Quantifier::All);
    assert!(serde_json::from_str::<Quantifier>(r#""most""#).is_err());
}

#[test]
fn test_kind_names() {
    assert_eq!(serde_json::to_string(&ValueKind::Vector).unwrap(), r#""vector""#);
}

#[test]
fn test_empty_vector_rejected_on_deserialize() {
    let json = serde_json::to_string(&Value::from_slice(&[1.0_f64]).unwrap()).unwrap();
    assert!(serde_json::from_str::<Value<f64>>(&json).is_ok());

    let err = serde_json::from_str::<Value<f64>>(r#"{"vector":[[],0,null]}"#).unwrap_err();
    assert!(err.to_string().contains("at least one element"));
}
