use astreams::validation::{DocumentError, DocumentValidator, ObjectError};
use serde_json::json;

#[test]
fn valid_question_document_builds_a_typed_object() {
    let document = json!({
        "type": "Question",
        "name": "Favorite color?",
        "anyOf": [
            {"type": "Note", "name": "Red"},
            {"type": "Note", "name": "Blue"}
        ]
    });

    let object = DocumentValidator::new().from_value(&document).unwrap();

    assert_eq!(object.object_type(), "Question");
    assert!(object.has("anyOf"));
    assert_eq!(object.get("name"), Some(&json!("Favorite color?")));
}

#[test]
fn json_text_input_is_decoded_before_validation() {
    let text = r#"{"type": "Note", "name": "From text"}"#;

    let object = DocumentValidator::new().from_str(text).unwrap();

    assert_eq!(object.object_type(), "Note");
}

#[test]
fn malformed_json_text_is_a_decode_error() {
    let result = DocumentValidator::new().from_str("{bad");

    assert!(matches!(result, Err(DocumentError::Decode(_))));
}

#[test]
fn a_non_object_document_is_refused() {
    let result = DocumentValidator::new().from_value(&json!([1, 2, 3]));

    assert!(matches!(result, Err(DocumentError::NotAnObject(_))));
}

#[test]
fn a_document_without_a_type_is_refused() {
    let result = DocumentValidator::new().from_value(&json!({"name": "untyped"}));

    assert!(matches!(result, Err(DocumentError::MissingType(_))));
}

#[test]
fn an_unknown_type_is_refused() {
    let result = DocumentValidator::new().from_value(&json!({"type": "Frobnicate"}));

    assert!(matches!(
        result,
        Err(DocumentError::Object(ObjectError::UnknownType(_)))
    ));
}

#[test]
fn the_first_rejected_attribute_is_named() {
    let document = json!({
        "type": "Image",
        "width": -1
    });

    let error = DocumentValidator::new().from_value(&document).unwrap_err();

    match error {
        DocumentError::Attribute { attribute, source } => {
            assert_eq!(attribute, "width");
            assert!(matches!(source, ObjectError::Rejected { .. }));
        }
        other => panic!("expected attribute failure, got {other:?}"),
    }
}

#[test]
fn a_choice_set_on_the_wrong_container_type_is_rejected_not_raised() {
    // anyOf is recognized only on Question; on a Note it is not even a
    // known attribute.
    let document = json!({
        "type": "Note",
        "anyOf": [{"type": "Note", "name": "A"}]
    });

    let error = DocumentValidator::new().from_value(&document).unwrap_err();

    assert!(matches!(
        error,
        DocumentError::Attribute {
            source: ObjectError::UnknownAttribute { .. },
            ..
        }
    ));
}

#[test]
fn a_strictly_malformed_choice_element_propagates_a_schema_violation() {
    let document = json!({
        "type": "Question",
        "anyOf": [{"type": "Note"}]
    });

    let error = DocumentValidator::new().from_value(&document).unwrap_err();

    assert!(matches!(
        error,
        DocumentError::Attribute {
            source: ObjectError::Input(_),
            ..
        }
    ));
}

#[test]
fn one_of_documents_validate_like_any_of_documents() {
    let choices = json!([
        {"type": "Note", "name": "Yes"},
        {"type": "Note", "name": "No"}
    ]);
    let validator = DocumentValidator::new();

    let any_of = validator.from_value(&json!({"type": "Question", "anyOf": choices}));
    let one_of = validator.from_value(&json!({"type": "Question", "oneOf": choices}));

    assert!(any_of.is_ok());
    assert!(one_of.is_ok());
}
