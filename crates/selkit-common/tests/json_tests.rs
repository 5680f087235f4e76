//! Integration tests for the JSON helpers and the `Rect` value.

use selkit_common::json::{JsonError, decode_as, decode_into, encode};
use selkit_common::rect::Rect;
use selkit_common::warning::has_warned;

#[test]
fn test_rect_area() {
    assert!((Rect::new(3.0, 4.5).area() - 13.5).abs() < f64::EPSILON);
    assert!(Rect::default().area().abs() < f64::EPSILON);
}

#[test]
fn test_rect_area_does_not_validate_sign() {
    let rect = Rect::new(-2.0, 5.0);
    assert!((rect.area() + 10.0).abs() < f64::EPSILON);
}

#[test]
fn test_encode_rect_field_order() {
    let json = encode(&Rect::new(2.0, 7.0)).unwrap();
    assert_eq!(json, r#"{"width":2.0,"height":7.0}"#);
}

#[test]
fn test_rect_round_trip() {
    let original = Rect::new(12.5, 3.0);
    let decoded: Rect = decode_as(&encode(&original).unwrap()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_decode_accepts_any_key_order() {
    let rect: Rect = decode_as(r#"{"height": 9, "width": 4}"#).unwrap();
    assert_eq!(rect, Rect::new(4.0, 9.0));
}

#[test]
fn test_decode_missing_key_keeps_prototype_value() {
    let rect = decode_into(Rect::new(1.0, 8.0), r#"{"width": 6}"#).unwrap();
    assert_eq!(rect, Rect::new(6.0, 8.0));
}

#[test]
fn test_decode_ignores_unknown_keys() {
    let rect: Rect = decode_as(r#"{"width": 1, "height": 2, "depth": 3}"#).unwrap();
    assert_eq!(rect, Rect::new(1.0, 2.0));
    assert!(has_warned("JSON", "ignoring unknown key 'depth' for Rect"));
}

#[test]
fn test_decode_rejects_malformed_json() {
    let err = decode_as::<Rect>(r#"{"width": "#).unwrap_err();
    assert!(matches!(err, JsonError::Syntax(_)));
}

#[test]
fn test_decode_rejects_non_object() {
    let err = decode_as::<Rect>("[1, 2]").unwrap_err();
    assert!(matches!(err, JsonError::NotAnObject { found: "an array" }));
    assert_eq!(err.to_string(), "expected a JSON object, found an array");
}

#[test]
fn test_decode_rejects_wrong_field_type() {
    let err = decode_as::<Rect>(r#"{"width": "wide"}"#).unwrap_err();
    assert!(matches!(
        &err,
        JsonError::InvalidField { name, expected: "a number" } if name == "width"
    ));
}
