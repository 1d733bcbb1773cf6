use super::json;
use crate::{Pointer, TraverseError, Value};

#[test]
fn set_replaces_array_element() {
    let mut doc = json(r#"{"foo": ["bar", "baz"]}"#);
    let ptr = Pointer::parse("/foo/1").unwrap();
    let written = ptr.set(&mut doc, Value::String("qux".into())).unwrap();
    assert_eq!(written, &Value::String("qux".into()));
    assert_eq!(doc, json(r#"{"foo": ["bar", "qux"]}"#));
}

#[test]
fn set_overwrites_existing_key() {
    let mut doc = json(r#"{"a": 1}"#);
    Pointer::parse("/a")
        .unwrap()
        .set(&mut doc, Value::Boolean(false))
        .unwrap();
    assert_eq!(doc, json(r#"{"a": false}"#));
}

#[test]
fn set_inserts_missing_terminal_key() {
    let mut doc = json("{}");
    let ptr = Pointer::parse("/x").unwrap();
    ptr.set(&mut doc, Value::String("v".into())).unwrap();
    assert_eq!(doc, json(r#"{"x": "v"}"#));
    assert_eq!(ptr.get(&doc).unwrap(), &Value::String("v".into()));
}

#[test]
fn set_decodes_the_inserted_key() {
    let mut doc = json("{}");
    Pointer::parse("/a~1b")
        .unwrap()
        .set(&mut doc, Value::Null)
        .unwrap();
    assert_eq!(doc, json(r#"{"a/b": null}"#));
}

#[test]
fn set_requires_existing_intermediate_keys() {
    let mut doc = json("{}");
    let err = Pointer::parse("/a/b")
        .unwrap()
        .set(&mut doc, Value::Null)
        .unwrap_err();
    assert_eq!(err, TraverseError::KeyNotFound { key: "a".into() });
    assert_eq!(doc, json("{}"));
}

#[test]
fn set_rejects_out_of_bounds_index() {
    let mut doc = json(r#"["a"]"#);
    let err = Pointer::parse("/5")
        .unwrap()
        .set(&mut doc, Value::Null)
        .unwrap_err();
    assert_eq!(err, TraverseError::OutOfBounds { index: 5, len: 1 });
    assert_eq!(doc, json(r#"["a"]"#));
}

#[test]
fn set_rejects_dash_as_append() {
    let mut doc = json(r#"["a"]"#);
    let err = Pointer::parse("/-")
        .unwrap()
        .set(&mut doc, Value::Null)
        .unwrap_err();
    assert_eq!(err, TraverseError::InvalidIndex { token: "-".into() });
}

#[test]
fn set_at_root_leaves_document_untouched() {
    let mut doc = json(r#"{"a": 1}"#);
    let result = Pointer::root().set(&mut doc, Value::Null).unwrap();
    assert_eq!(result, &json(r#"{"a": 1}"#));
    assert_eq!(doc, json(r#"{"a": 1}"#));
}

#[test]
fn set_null_is_a_real_write() {
    let mut doc = json(r#"{"a": 1}"#);
    Pointer::parse("/a")
        .unwrap()
        .set(&mut doc, Value::Null)
        .unwrap();
    assert_eq!(doc, json(r#"{"a": null}"#));
}

#[test]
fn delete_array_element_returns_it_and_shifts_the_tail() {
    let mut doc = json(r#"{"foo": ["bar", "baz"]}"#);
    let removed = Pointer::parse("/foo/0").unwrap().delete(&mut doc).unwrap();
    assert_eq!(removed, Value::String("bar".into()));
    assert_eq!(doc, json(r#"{"foo": ["baz"]}"#));
}

#[test]
fn delete_object_key_returns_the_value() {
    let mut doc = json(r#"{"a": {"b": 2}, "c": 3}"#);
    let removed = Pointer::parse("/a").unwrap().delete(&mut doc).unwrap();
    assert_eq!(removed, json(r#"{"b": 2}"#));
    assert_eq!(doc, json(r#"{"c": 3}"#));
}

#[test]
fn delete_decodes_the_key() {
    let mut doc = json(r#"{"m~n": 8}"#);
    let removed = Pointer::parse("/m~0n").unwrap().delete(&mut doc).unwrap();
    assert_eq!(removed, Value::Number(8.0));
    assert_eq!(doc, json("{}"));
}

#[test]
fn delete_array_element_with_array_grandparent() {
    let mut doc = json("[[1, 2]]");
    let removed = Pointer::parse("/0/1").unwrap().delete(&mut doc).unwrap();
    assert_eq!(removed, Value::Number(2.0));
    assert_eq!(doc, json("[[1]]"));
}

#[test]
fn delete_from_root_array_is_rejected() {
    let mut doc = json(r#"["bar", "baz"]"#);
    let err = Pointer::parse("/0").unwrap().delete(&mut doc).unwrap_err();
    assert_eq!(err, TraverseError::RootArrayDelete);
    assert_eq!(doc, json(r#"["bar", "baz"]"#));
}

#[test]
fn root_array_delete_is_reported_before_token_inspection() {
    // Even a malformed or out-of-range token reports the structural problem.
    let mut doc = json(r#"["bar"]"#);
    for pointer in ["/x", "/99", "/-"] {
        let err = Pointer::parse(pointer)
            .unwrap()
            .delete(&mut doc)
            .unwrap_err();
        assert_eq!(err, TraverseError::RootArrayDelete, "pointer {pointer:?}");
    }
}

#[test]
fn delete_at_root_is_a_no_op_returning_the_document() {
    let mut doc = json(r#"{"a": [1]}"#);
    let removed = Pointer::root().delete(&mut doc).unwrap();
    assert_eq!(removed, doc);
    assert_eq!(doc, json(r#"{"a": [1]}"#));
}

#[test]
fn delete_missing_key_fails_and_leaves_document_alone() {
    let mut doc = json(r#"{"a": 1}"#);
    let err = Pointer::parse("/b").unwrap().delete(&mut doc).unwrap_err();
    assert_eq!(err, TraverseError::KeyNotFound { key: "b".into() });
    assert_eq!(doc, json(r#"{"a": 1}"#));
}

#[test]
fn delete_out_of_bounds_fails_and_leaves_document_alone() {
    let mut doc = json(r#"{"foo": ["a"]}"#);
    let err = Pointer::parse("/foo/1")
        .unwrap()
        .delete(&mut doc)
        .unwrap_err();
    assert_eq!(err, TraverseError::OutOfBounds { index: 1, len: 1 });
    assert_eq!(doc, json(r#"{"foo": ["a"]}"#));
}
