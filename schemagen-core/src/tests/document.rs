use crate::{
    infer_document, infer_schema_from_slice, infer_schema_from_str, SchemaError, DEFAULT_TITLE,
    DRAFT_07_SCHEMA_URI,
};
use insta::assert_json_snapshot;
use serde_json::json;

#[test]
fn test_object_root_merges_into_document() {
    let doc = infer_schema_from_str(r#"{"id":1,"title":"x","completed":false}"#)
        .expect("valid JSON should infer");

    assert_json_snapshot!(doc, @r#"
    {
      "$schema": "http://json-schema.org/draft-07/schema#",
      "title": "Generated schema for Root",
      "type": "object",
      "properties": {
        "id": {
          "type": "integer"
        },
        "title": {
          "type": "string"
        },
        "completed": {
          "type": "boolean"
        }
      },
      "required": [
        "id",
        "title",
        "completed"
      ]
    }
    "#);
}

#[test]
fn test_array_root_of_objects() {
    let doc = infer_document(&json!([{"a": 1}]));
    assert_eq!(
        doc.to_value().unwrap(),
        json!({
            "$schema": DRAFT_07_SCHEMA_URI,
            "title": DEFAULT_TITLE,
            "type": "array",
            "items": {
                "type": "object",
                "properties": {"a": {"type": "integer"}},
                "required": ["a"],
            },
        })
    );
}

#[test]
fn test_empty_array_root_omits_items() {
    let value = infer_document(&json!([])).to_value().unwrap();
    assert_eq!(value["type"], "array");
    assert!(value.get("items").is_none());
}

#[test]
fn test_nested_float_is_number() {
    let value = infer_schema_from_str(r#"{"nested":{"x":1.5}}"#)
        .unwrap()
        .to_value()
        .unwrap();
    let nested = &value["properties"]["nested"];
    assert_eq!(nested["type"], "object");
    assert_eq!(nested["properties"]["x"]["type"], "number");
    assert_eq!(nested["required"], json!(["x"]));
}

#[test]
fn test_scalar_roots_carry_no_type() {
    for input in [json!("text"), json!(7), json!(0.5), json!(false), json!(null)] {
        let doc = infer_document(&input);
        assert!(doc.root.is_none());
        assert_eq!(
            doc.to_value().unwrap(),
            json!({"$schema": DRAFT_07_SCHEMA_URI, "title": DEFAULT_TITLE}),
            "unexpected document for root {}",
            input
        );
    }
}

#[test]
fn test_pretty_output_uses_two_space_indent() {
    let text = infer_document(&json!([])).to_pretty_json().unwrap();
    assert_eq!(
        text,
        "{\n  \"$schema\": \"http://json-schema.org/draft-07/schema#\",\n  \"title\": \"Generated schema for Root\",\n  \"type\": \"array\"\n}"
    );
}

#[test]
fn test_document_is_repeatable() {
    let value = json!({"users": [{"id": 1, "roles": ["admin"]}], "total": 1});
    assert_eq!(infer_document(&value), infer_document(&value));
}

#[test]
fn test_invalid_json_is_decode_error() {
    let err = infer_schema_from_slice(br#"{"hello":"world}"#).unwrap_err();
    assert!(matches!(err, SchemaError::Decode(_)));
    let message = err.to_string();
    assert!(message.contains("Invalid JSON input"));
    assert!(message.contains("line"));
}

#[test]
fn test_integer_literals_beyond_u64_stay_integer() {
    let value = infer_schema_from_str(
        r#"{"big": 123456789012345678901234567890, "one_point_oh": 1.0, "exp": 1e3}"#,
    )
    .unwrap()
    .to_value()
    .unwrap();
    assert_eq!(value["properties"]["big"]["type"], "integer");
    assert_eq!(value["properties"]["one_point_oh"]["type"], "number");
    assert_eq!(value["properties"]["exp"]["type"], "number");
}

#[test]
fn test_deep_nesting_is_accepted() {
    let depth = 200;
    let input = "[".repeat(depth) + &"]".repeat(depth);
    let doc = infer_schema_from_slice(input.as_bytes()).expect("deep arrays are valid JSON");

    let mut node = doc.root.as_ref().expect("array root");
    let mut levels = 1;
    while let crate::SchemaNode::Array { items: Some(items) } = node {
        node = &**items;
        levels += 1;
    }
    assert_eq!(levels, depth);
}

#[test]
fn test_trailing_data_is_decode_error() {
    let err = infer_schema_from_str(r#"{"a": 1} {"b": 2}"#).unwrap_err();
    assert!(matches!(err, SchemaError::Decode(_)));
}
