//! Partial-update pipeline for profile records.
//!
//! An inbound payload maps externally-named fields onto internal profile
//! attributes through a fixed allow-list. Two fields carry shape
//! transforms: `skills` (list flattened to a delimited string, scalar
//! strings stored verbatim) and `education` (any value serialized to JSON
//! text). Unrecognized keys are ignored; a payload containing none of the
//! recognized names is rejected.

use crate::error::{CoreError, Result as CoreErrorResult};
use crate::models::profile::SKILLS_DELIMITER;

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;

/// Parsed partial update, ready to apply to a [`crate::Profile`].
///
/// Outer `None` means the field was absent from the payload; for the
/// clearable text fields the inner `None` means an explicit JSON `null`.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub bio: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub headline: Option<Option<String>>,
    pub experience: Option<Option<String>>,
    pub education: Option<String>,
    pub skills: Option<Option<String>>,
    pub website: Option<Option<String>>,
}

impl ProfileUpdate {
    /// Parse an external field map.
    ///
    /// External name → internal attribute: `name`→`full_name`,
    /// `title`→`headline`, all others 1:1.
    #[track_caller]
    pub fn from_value(payload: &Value) -> CoreErrorResult<Self> {
        let fields = payload
            .as_object()
            .ok_or_else(|| validation("Request body must be a JSON object"))?;

        let mut update = ProfileUpdate::default();
        let mut recognized = false;

        for (key, value) in fields {
            match key.as_str() {
                "name" => {
                    let full_name = value
                        .as_str()
                        .filter(|s| !s.is_empty())
                        .ok_or_else(|| {
                            validation("Full name is required and must be a string")
                        })?;
                    update.full_name = Some(full_name.to_string());
                }
                "bio" => update.bio = Some(text_field("bio", value)?),
                "location" => update.location = Some(text_field("location", value)?),
                "title" => update.headline = Some(text_field("title", value)?),
                "experience" => update.experience = Some(text_field("experience", value)?),
                "website" => update.website = Some(text_field("website", value)?),
                "skills" => update.skills = Some(skills_field(value)?),
                "education" => {
                    // Stored as-is; malformed inner shapes surface only on
                    // read-side decoding.
                    let serialized = serde_json::to_string(value).map_err(|e| {
                        validation(format!("education could not be serialized: {e}"))
                    })?;
                    update.education = Some(serialized);
                }
                _ => continue,
            }
            recognized = true;
        }

        if !recognized {
            return Err(validation("No valid fields to update"));
        }

        Ok(update)
    }
}

#[track_caller]
fn text_field(field: &str, value: &Value) -> CoreErrorResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(validation(format!("{field} must be a string"))),
    }
}

/// A list is flattened to a delimited string; a scalar string is stored
/// verbatim, never split or validated.
#[track_caller]
fn skills_field(value: &Value) -> CoreErrorResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                let part = item
                    .as_str()
                    .ok_or_else(|| validation("skills must be an array of strings"))?;
                parts.push(part);
            }
            Ok(Some(parts.join(SKILLS_DELIMITER)))
        }
        _ => Err(validation("skills must be a string or an array of strings")),
    }
}

#[track_caller]
fn validation(message: impl Into<String>) -> CoreError {
    CoreError::Validation {
        message: message.into(),
        location: ErrorLocation::from(Location::caller()),
    }
}
