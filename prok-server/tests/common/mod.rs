#![allow(dead_code)]

//! Test infrastructure for prok-server API tests

use prok_auth::{JwtValidator, TokenIssuer};
use prok_media::{ImagePipeline, MediaConfig};
use prok_server::AppState;

use std::io::Cursor;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub const BOUNDARY: &str = "prok-test-boundary";

/// Create AppState for testing: in-memory SQLite plus a throwaway upload
/// directory
pub async fn create_test_app_state() -> AppState {
    // Single connection: every pooled connection to ":memory:" would
    // otherwise see its own empty database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    prok_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let upload_dir = tempfile::tempdir()
        .expect("Failed to create upload dir")
        .keep();

    let media = ImagePipeline::new(MediaConfig {
        upload_dir: upload_dir.clone(),
        max_upload_bytes: 2 * 1024 * 1024,
        allowed_extensions: ["png", "jpg", "jpeg", "gif", "webp"]
            .iter()
            .map(|ext| ext.to_string())
            .collect(),
        primary_bounds: (400, 400),
        thumbnail_bounds: (128, 128),
        primary_quality: 85,
        thumbnail_quality: 80,
    });

    AppState {
        pool,
        token_issuer: Arc::new(TokenIssuer::new(TEST_SECRET, 3600)),
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        media: Arc::new(media),
        upload_dir,
    }
}

/// Create a test user directly in the store and return its id
pub async fn create_test_user(
    state: &AppState,
    username: &str,
    email: &str,
    password: &str,
) -> Uuid {
    let user = prok_core::User::new(
        username,
        email,
        prok_auth::hash_password(password).expect("Failed to hash password"),
    );

    prok_db::UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");

    user.id
}

/// Issue a valid bearer token for a user
pub fn bearer_token(state: &AppState, user_id: Uuid) -> String {
    state
        .token_issuer
        .issue(user_id)
        .expect("Failed to issue test token")
}

/// Build a JSON request, optionally authenticated
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// Build an authenticated GET request
pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    builder.body(Body::empty()).unwrap()
}

/// Build a multipart upload request with a single file part
pub fn multipart_request(
    uri: &str,
    token: &str,
    field: &str,
    filename: &str,
    content_type: &str,
    payload: &[u8],
) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Small valid JPEG generated in-process
pub fn test_jpeg_bytes() -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([120, 40, 200])));
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), ImageOutputFormat::Jpeg(90))
        .unwrap();
    buffer
}

/// Collect a response body as JSON
pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
