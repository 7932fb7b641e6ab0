use crate::{CoreError, ProfileUpdate};

use serde_json::json;

#[test]
fn given_mapped_fields_when_parsed_then_internal_names_are_set() {
    let update = ProfileUpdate::from_value(&json!({
        "name": "John Doe",
        "title": "Software Engineer",
        "bio": "Test bio",
    }))
    .unwrap();

    assert_eq!(update.full_name.as_deref(), Some("John Doe"));
    assert_eq!(update.headline, Some(Some("Software Engineer".to_string())));
    assert_eq!(update.bio, Some(Some("Test bio".to_string())));
    assert!(update.skills.is_none());
}

#[test]
fn given_empty_name_when_parsed_then_whole_update_is_rejected() {
    let result = ProfileUpdate::from_value(&json!({
        "name": "",
        "bio": "valid bio",
    }));

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_non_string_name_when_parsed_then_rejected() {
    let result = ProfileUpdate::from_value(&json!({"name": 42}));

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_only_unrecognized_keys_when_parsed_then_nothing_to_update() {
    let result = ProfileUpdate::from_value(&json!({
        "favourite_color": "green",
        "admin": true,
    }));

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn unrecognized_keys_are_ignored_alongside_recognized_ones() {
    let update = ProfileUpdate::from_value(&json!({
        "bio": "hello",
        "favourite_color": "green",
    }))
    .unwrap();

    assert_eq!(update.bio, Some(Some("hello".to_string())));
}

#[test]
fn skills_array_is_flattened_and_string_kept_verbatim() {
    let from_list = ProfileUpdate::from_value(&json!({"skills": ["rust", "sql"]})).unwrap();
    assert_eq!(from_list.skills, Some(Some("rust,sql".to_string())));

    // A scalar string is stored as-is, never split or validated.
    let from_string = ProfileUpdate::from_value(&json!({"skills": "rust, sql "})).unwrap();
    assert_eq!(from_string.skills, Some(Some("rust, sql ".to_string())));
}

#[test]
fn skills_array_with_non_string_element_is_rejected() {
    let result = ProfileUpdate::from_value(&json!({"skills": ["rust", 7]}));

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn education_is_serialized_without_schema_validation() {
    // Malformed inner shapes are accepted and serialized as-is.
    let update = ProfileUpdate::from_value(&json!({
        "education": [{"unexpected": true}, "loose string"],
    }))
    .unwrap();

    assert_eq!(
        update.education.as_deref(),
        Some(r#"[{"unexpected":true},"loose string"]"#)
    );
}

#[test]
fn non_object_payload_is_rejected() {
    let result = ProfileUpdate::from_value(&json!(["not", "an", "object"]));

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}
