use prok_core::Profile;

use serde::Serialize;
use serde_json::Value;

/// Profile DTO for JSON serialization.
///
/// Storage transforms are inverted here: skills come back as a list and
/// education as decoded structured records.
#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub id: String,
    pub user_id: String,
    pub full_name: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub headline: Option<String>,
    pub experience: Option<String>,
    pub education: Value,
    pub skills: Vec<String>,
    pub website: Option<String>,
    pub image_url: Option<String>,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            education: profile.education_json(),
            skills: profile.skills_list(),
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            full_name: profile.full_name,
            bio: profile.bio,
            location: profile.location,
            headline: profile.headline,
            experience: profile.experience,
            website: profile.website,
            image_url: profile.image_url,
        }
    }
}
