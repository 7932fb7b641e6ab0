use crate::ProfileUpdate;

use serde_json::Value;
use uuid::Uuid;

/// Delimiter used to flatten the skills list into its storage column.
pub(crate) const SKILLS_DELIMITER: &str = ",";

/// Profile record, 1:1 with a [`crate::User`].
///
/// `education` holds serialized JSON text and `skills` a single
/// delimiter-joined string; [`Profile::education_json`] and
/// [`Profile::skills_list`] invert those storage transforms.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub headline: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub skills: Option<String>,
    pub website: Option<String>,
    pub image_url: Option<String>,
}

impl Profile {
    pub fn new(user_id: Uuid, full_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            full_name: full_name.into(),
            bio: None,
            location: None,
            headline: None,
            experience: None,
            education: None,
            skills: None,
            website: None,
            image_url: None,
        }
    }

    /// Apply a partial update. Fields absent from `update` are untouched.
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(full_name) = &update.full_name {
            self.full_name = full_name.clone();
        }
        if let Some(bio) = &update.bio {
            self.bio = bio.clone();
        }
        if let Some(location) = &update.location {
            self.location = location.clone();
        }
        if let Some(headline) = &update.headline {
            self.headline = headline.clone();
        }
        if let Some(experience) = &update.experience {
            self.experience = experience.clone();
        }
        if let Some(education) = &update.education {
            self.education = Some(education.clone());
        }
        if let Some(skills) = &update.skills {
            self.skills = skills.clone();
        }
        if let Some(website) = &update.website {
            self.website = website.clone();
        }
    }

    /// Skills split back into the list shape the API exposes.
    pub fn skills_list(&self) -> Vec<String> {
        match self.skills.as_deref() {
            Some(stored) if !stored.is_empty() => stored
                .split(SKILLS_DELIMITER)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Education decoded back into structured records.
    ///
    /// Undecodable stored text degrades to an empty list rather than
    /// failing the read.
    pub fn education_json(&self) -> Value {
        self.education
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_else(|| Value::Array(Vec::new()))
    }
}
