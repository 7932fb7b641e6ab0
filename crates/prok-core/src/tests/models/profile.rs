use crate::{Profile, ProfileUpdate};

use serde_json::json;
use uuid::Uuid;

fn sample_profile() -> Profile {
    Profile::new(Uuid::new_v4(), "Test User")
}

#[test]
fn new_profile_has_only_identity_and_name() {
    let user_id = Uuid::new_v4();
    let profile = Profile::new(user_id, "alice");

    assert_eq!(profile.user_id, user_id);
    assert_eq!(profile.full_name, "alice");
    assert!(profile.bio.is_none());
    assert!(profile.image_url.is_none());
}

#[test]
fn apply_leaves_absent_fields_untouched() {
    let mut profile = sample_profile();
    profile.bio = Some("original bio".to_string());

    let update = ProfileUpdate {
        location: Some(Some("Berlin".to_string())),
        ..ProfileUpdate::default()
    };
    profile.apply(&update);

    assert_eq!(profile.bio.as_deref(), Some("original bio"));
    assert_eq!(profile.location.as_deref(), Some("Berlin"));
    assert_eq!(profile.full_name, "Test User");
}

#[test]
fn apply_clears_field_on_explicit_null() {
    let mut profile = sample_profile();
    profile.bio = Some("to be removed".to_string());

    let update = ProfileUpdate {
        bio: Some(None),
        ..ProfileUpdate::default()
    };
    profile.apply(&update);

    assert!(profile.bio.is_none());
}

#[test]
fn skills_round_trip_through_delimited_storage() {
    let mut profile = sample_profile();
    let update = ProfileUpdate::from_value(&json!({"skills": ["a", "b", "c"]})).unwrap();
    profile.apply(&update);

    assert_eq!(profile.skills.as_deref(), Some("a,b,c"));
    assert_eq!(profile.skills_list(), vec!["a", "b", "c"]);
}

#[test]
fn skills_list_is_empty_for_missing_or_blank_storage() {
    let mut profile = sample_profile();
    assert!(profile.skills_list().is_empty());

    profile.skills = Some(String::new());
    assert!(profile.skills_list().is_empty());
}

#[test]
fn education_round_trips_through_serialized_storage() {
    let mut profile = sample_profile();
    let records = json!([{"school": "X", "degree": "BS", "years": "2020-2024"}]);
    let update = ProfileUpdate::from_value(&json!({"education": records})).unwrap();
    profile.apply(&update);

    assert_eq!(profile.education_json(), records);
}

#[test]
fn undecodable_education_degrades_to_empty_list() {
    let mut profile = sample_profile();
    profile.education = Some("{not json".to_string());

    assert_eq!(profile.education_json(), json!([]));
}
