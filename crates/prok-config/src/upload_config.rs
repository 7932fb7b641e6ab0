use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_UPLOAD_BYTES,
    DEFAULT_PRIMARY_MAX_DIMENSION, DEFAULT_PRIMARY_QUALITY, DEFAULT_THUMBNAIL_MAX_DIMENSION,
    DEFAULT_THUMBNAIL_QUALITY, DEFAULT_UPLOAD_DIRECTORY,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Directory where stored images land
    pub dir: String,
    /// Upload size ceiling in bytes
    pub max_upload_bytes: u64,
    /// Accepted file extensions, matched lower-cased
    pub allowed_extensions: Vec<String>,
    /// Bounding box for the display copy
    pub primary_max_width: u32,
    pub primary_max_height: u32,
    /// Bounding box for the thumbnail copy
    pub thumbnail_max_width: u32,
    pub thumbnail_max_height: u32,
    /// JPEG quality levels (1-100)
    pub primary_quality: u8,
    pub thumbnail_quality: u8,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_UPLOAD_DIRECTORY),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            primary_max_width: DEFAULT_PRIMARY_MAX_DIMENSION,
            primary_max_height: DEFAULT_PRIMARY_MAX_DIMENSION,
            thumbnail_max_width: DEFAULT_THUMBNAIL_MAX_DIMENSION,
            thumbnail_max_height: DEFAULT_THUMBNAIL_MAX_DIMENSION,
            primary_quality: DEFAULT_PRIMARY_QUALITY,
            thumbnail_quality: DEFAULT_THUMBNAIL_QUALITY,
        }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.is_empty() {
            return Err(ConfigError::upload("upload.dir cannot be empty"));
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::upload(
                "upload.max_upload_bytes must be positive",
            ));
        }
        if self.allowed_extensions.is_empty() {
            return Err(ConfigError::upload(
                "upload.allowed_extensions cannot be empty",
            ));
        }
        if self.primary_max_width == 0
            || self.primary_max_height == 0
            || self.thumbnail_max_width == 0
            || self.thumbnail_max_height == 0
        {
            return Err(ConfigError::upload(
                "upload bounding boxes must have non-zero dimensions",
            ));
        }
        for (name, quality) in [
            ("upload.primary_quality", self.primary_quality),
            ("upload.thumbnail_quality", self.thumbnail_quality),
        ] {
            if !(1..=100).contains(&quality) {
                return Err(ConfigError::upload(format!(
                    "{name} must be between 1 and 100, got {quality}"
                )));
            }
        }

        Ok(())
    }
}
