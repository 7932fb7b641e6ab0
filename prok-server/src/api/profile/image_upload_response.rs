use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ImageUploadResponse {
    pub image_url: String,
}
