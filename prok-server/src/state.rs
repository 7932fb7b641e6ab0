use prok_auth::{JwtValidator, TokenIssuer};
use prok_media::ImagePipeline;

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared per-request state. Requests are otherwise stateless; the pool
/// and the file store carry all cross-request data.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_issuer: Arc<TokenIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    pub media: Arc<ImagePipeline>,
    pub upload_dir: PathBuf,
}
