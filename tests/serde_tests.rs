//! Serialization of field lists (requires the `serde` feature).
//!
//! Run with: `cargo test --features serde --test serde_tests`

#![cfg(feature = "serde")]

use fieldlist::{Empty, FieldList, ForLoadedField, Reflect};

#[derive(Reflect)]
#[allow(dead_code)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn loaded_list_serializes_as_sequence_of_handles() {
    let json = serde_json::to_value(Point::field_list()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "name": "x", "type_name": "i32", "owner": "Point", "position": 0 },
            { "name": "y", "type_name": "i32", "owner": "Point", "position": 1 },
        ])
    );
}

#[test]
fn sliced_list_serializes_the_same_handles() {
    let sliced = Point::field_list().slice(1, 2).unwrap();
    let json = serde_json::to_string(&sliced).unwrap();
    assert_eq!(json, r#"[{"name":"y","type_name":"i32","owner":"Point","position":1}]"#);
}

#[test]
fn empty_list_serializes_as_empty_sequence() {
    let list: Empty<ForLoadedField<'static>> = Empty::new();
    assert_eq!(serde_json::to_string(&list).unwrap(), "[]");
}
