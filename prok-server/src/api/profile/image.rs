//! Profile image upload handler
//!
//! Runs the ingestion pipeline (validate → decode → normalize → persist
//! primary + thumbnail) and commits the resulting reference onto the
//! caller's profile. The two file writes and the reference commit are
//! not transactionally linked; a crash in between leaves orphaned files
//! that are never referenced.

use crate::api::profile::image_upload_response::ImageUploadResponse;
use crate::{ApiError, ApiResult, AuthUser};
use crate::state::AppState;

use prok_db::ProfileRepository;
use prok_db::UserRepository;

use std::panic::Location;

use axum::http::{HeaderMap, header::CONTENT_LENGTH};
use axum::{
    Json,
    extract::{Multipart, State},
};
use error_location::ErrorLocation;
use log::{debug, error, info};

/// POST /api/profile/image
///
/// Multipart upload with the file under field name `image`.
pub async fn upload_profile_image(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> ApiResult<Json<ImageUploadResponse>> {
    let user = UserRepository::new(state.pool.clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    // Pre-read size hint; transports that stream without announcing a
    // length simply skip this check and rely on the measured byte count.
    let declared_len = headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok());

    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Malformed multipart body: {}", e);
        ApiError::Validation {
            message: "Malformed multipart body".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })? {
        if field.name() == Some("image") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(|e| {
                debug!("Could not read image field: {}", e);
                ApiError::Validation {
                    message: "Could not read image field".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;
            upload = Some((filename, bytes.to_vec()));
            break;
        }
    }

    let Some((filename, bytes)) = upload else {
        return Err(ApiError::Validation {
            message: "No image file provided".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    // Decode/resize/write on the blocking pool; the request still waits
    // for both files before the reference is committed.
    let pipeline = state.media.clone();
    let stored = tokio::task::spawn_blocking(move || {
        pipeline.ingest(user_id, &filename, declared_len, &bytes)
    })
    .await
    .map_err(|e| {
        error!("Image processing task panicked: {}", e);
        ApiError::Internal {
            message: "Image processing failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })??;

    let image_url = format!("/uploads/{}", stored.filename);
    let profile = ProfileRepository::new(state.pool.clone())
        .set_image_url(user.id, &user.username, &image_url)
        .await?;

    info!("Committed image reference {} for user {}", image_url, user.id);

    Ok(Json(ImageUploadResponse {
        image_url: profile.image_url.unwrap_or(image_url),
    }))
}
