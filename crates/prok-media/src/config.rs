use std::path::PathBuf;

/// Construction-time settings for the image ingestion pipeline.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Directory where both stored copies land
    pub upload_dir: PathBuf,
    /// Upload size ceiling in bytes
    pub max_upload_bytes: u64,
    /// Accepted file extensions, matched lower-cased
    pub allowed_extensions: Vec<String>,
    /// Bounding box for the display copy
    pub primary_bounds: (u32, u32),
    /// Bounding box for the thumbnail copy
    pub thumbnail_bounds: (u32, u32),
    /// JPEG quality for the display copy
    pub primary_quality: u8,
    /// JPEG quality for the thumbnail copy
    pub thumbnail_quality: u8,
}
