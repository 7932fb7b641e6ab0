use crate::api::auth::auth::{login, signup};
use crate::api::profile::image::upload_profile_image;
use crate::api::profile::profile::{get_profile, update_profile};
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // The body limit sits above the configured image ceiling so multipart
    // framing overhead does not trip it; the pipeline enforces the real
    // limit and answers with a proper validation error.
    let body_limit = state.media.max_upload_bytes() as usize + 1024 * 1024;

    Router::new()
        // Account endpoints
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
        // Profile endpoints
        .route("/api/profile", get(get_profile).put(update_profile))
        .route("/api/profile/image", post(upload_profile_image))
        // Stored images
        .nest_service("/uploads", ServeDir::new(&state.upload_dir))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .layer(DefaultBodyLimit::max(body_limit))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
