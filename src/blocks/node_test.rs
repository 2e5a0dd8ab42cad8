use super::*;
use serde_json::json;

#[test]
fn decodes_flat_node() {
    let raw = json!({"id": "1", "component": "button", "label": "Go", "count": 3});
    let node = ContentNode::from_value(&raw).unwrap();
    assert_eq!(node.id, "1");
    assert_eq!(node.component, "button");
    assert_eq!(node.fields.len(), 2);
    assert_eq!(node.fields.get("label"), Some(&FieldValue::Scalar(json!("Go"))));
    assert_eq!(node.fields.get("count"), Some(&FieldValue::Scalar(json!(3))));
}

#[test]
fn accepts_uid_as_identifier_alias() {
    let raw = json!({"_uid": "abc", "component": "text", "text": "hi"});
    let node = ContentNode::from_value(&raw).unwrap();
    assert_eq!(node.id, "abc");
}

#[test]
fn id_key_wins_over_uid_alias() {
    let raw = json!({"id": "a", "_uid": "b", "component": "text"});
    let node = ContentNode::from_value(&raw).unwrap();
    assert_eq!(node.id, "a");
}

#[test]
fn missing_id_and_component_decode_to_empty() {
    let raw = json!({"label": "orphan"});
    let node = ContentNode::from_value(&raw).unwrap();
    assert!(node.id.is_empty());
    assert!(node.component.is_empty());
    assert_eq!(node.fields.len(), 1);
}

#[test]
fn non_object_root_is_an_error() {
    let err = ContentNode::from_value(&json!([1, 2, 3])).unwrap_err();
    assert!(err.to_string().contains("array"));
    let err = ContentNode::from_value(&json!("nope")).unwrap_err();
    assert!(err.to_string().contains("string"));
}

#[test]
fn object_field_with_component_becomes_nested_node() {
    let raw = json!({
        "id": "h", "component": "hero",
        "cta": {"id": "b", "component": "button", "label": "Go"}
    });
    let node = ContentNode::from_value(&raw).unwrap();
    let Some(FieldValue::Node(cta)) = node.fields.get("cta") else {
        panic!("expected nested node field");
    };
    assert_eq!(cta.id, "b");
    assert_eq!(cta.component, "button");
}

#[test]
fn plain_object_field_stays_scalar() {
    let raw = json!({
        "id": "x", "component": "text",
        "meta": {"author": "jo", "words": 12}
    });
    let node = ContentNode::from_value(&raw).unwrap();
    assert!(matches!(node.fields.get("meta"), Some(FieldValue::Scalar(_))));
}

#[test]
fn array_of_objects_becomes_node_sequence() {
    let raw = json!({
        "id": "s", "component": "section",
        "children": [
            {"id": "1", "component": "text", "text": "a"},
            {"id": "2", "component": "text", "text": "b"}
        ]
    });
    let node = ContentNode::from_value(&raw).unwrap();
    let Some(FieldValue::Nodes(children)) = node.fields.get("children") else {
        panic!("expected node sequence field");
    };
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].id, "1");
    assert_eq!(children[1].id, "2");
}

#[test]
fn empty_array_is_an_empty_node_sequence() {
    let raw = json!({"id": "s", "component": "section", "children": []});
    let node = ContentNode::from_value(&raw).unwrap();
    assert_eq!(node.fields.get("children"), Some(&FieldValue::Nodes(Vec::new())));
}

#[test]
fn scalar_array_stays_scalar() {
    let raw = json!({"id": "x", "component": "text", "tags": ["a", "b"]});
    let node = ContentNode::from_value(&raw).unwrap();
    assert!(matches!(node.fields.get("tags"), Some(FieldValue::Scalar(_))));
}

#[test]
fn reserved_keys_are_not_fields() {
    let raw = json!({"id": "1", "_uid": "1", "component": "text", "text": "hi"});
    let node = ContentNode::from_value(&raw).unwrap();
    assert_eq!(node.fields.len(), 1);
    assert!(node.fields.contains_key("text"));
}
