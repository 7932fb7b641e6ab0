//! Profile REST API handlers
//!
//! Both handlers rely on the repository's idempotent get-or-create, so a
//! first-ever call for a user materializes their profile on the spot.

use crate::api::profile::profile_response::ProfileResponse;
use crate::api::profile::profile_with_user_response::ProfileWithUserResponse;
use crate::{ApiError, ApiResult, AuthUser};
use crate::state::AppState;

use prok_core::ProfileUpdate;
use prok_db::{ProfileRepository, UserRepository};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;
use log::info;
use serde_json::Value;

/// GET /api/profile
///
/// Return the caller's profile, creating a default one (display name =
/// username) on first access.
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<ProfileWithUserResponse>> {
    let user = UserRepository::new(state.pool.clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let profile = ProfileRepository::new(state.pool.clone())
        .get_or_create(user.id, &user.username)
        .await?;

    Ok(Json(ProfileWithUserResponse {
        profile: profile.into(),
        user: user.into(),
    }))
}

/// PUT /api/profile
///
/// Partial update through the allow-list field mapping. The whole update
/// is rejected when any recognized field fails validation; nothing is
/// persisted in that case.
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<Value>,
) -> ApiResult<Json<ProfileResponse>> {
    let user = UserRepository::new(state.pool.clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let update = ProfileUpdate::from_value(&payload)?;

    let profile = ProfileRepository::new(state.pool.clone())
        .update_fields(user.id, &update)
        .await?;

    info!("Updated profile for user {}", user.id);

    Ok(Json(ProfileResponse {
        profile: profile.into(),
    }))
}
