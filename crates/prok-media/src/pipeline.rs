//! Image ingestion pipeline.
//!
//! Validate → Decode → Normalize → Persist-Primary → Persist-Thumbnail.
//! Any step's failure short-circuits the remainder; committing the
//! resulting reference onto the profile is the caller's final step, so a
//! failed ingest never leaves a dangling reference (the reverse — files
//! written but never referenced — is accepted).

use crate::config::MediaConfig;
use crate::error::{MediaError, Result as MediaErrorResult};
use crate::{processor, store};

use log::{debug, info};
use uuid::Uuid;

/// Names of the two files produced by a successful ingest.
#[derive(Debug, Clone)]
pub struct StoredImagePair {
    pub filename: String,
    pub thumbnail_filename: String,
}

pub struct ImagePipeline {
    config: MediaConfig,
    store: store::ImageStore,
}

impl ImagePipeline {
    pub fn new(config: MediaConfig) -> Self {
        let store = store::ImageStore::new(config.upload_dir.clone());

        Self { config, store }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.config.max_upload_bytes
    }

    /// Run the full ingest for one upload.
    ///
    /// `declared_len` is the transport's pre-read size hint when it
    /// provides one; the actual byte count is always checked as well.
    pub fn ingest(
        &self,
        owner: Uuid,
        filename: &str,
        declared_len: Option<u64>,
        bytes: &[u8],
    ) -> MediaErrorResult<StoredImagePair> {
        self.validate(filename, declared_len, bytes.len() as u64)?;

        let decoded = processor::decode(bytes)?;
        let normalized = processor::normalize(decoded);

        let (primary_w, primary_h) = self.config.primary_bounds;
        let primary = processor::fit_within(&normalized, primary_w, primary_h);
        let primary_jpeg = processor::encode_jpeg(&primary, self.config.primary_quality)?;

        // Thumbnail derives from the already-resized primary copy.
        let (thumb_w, thumb_h) = self.config.thumbnail_bounds;
        let thumbnail = processor::fit_within(&primary, thumb_w, thumb_h);
        let thumbnail_jpeg = processor::encode_jpeg(&thumbnail, self.config.thumbnail_quality)?;

        let filename = store::primary_filename(owner);
        let thumbnail_filename = store::thumbnail_filename(&filename);

        self.store.write(&filename, &primary_jpeg)?;
        self.store.write(&thumbnail_filename, &thumbnail_jpeg)?;

        info!(
            "Stored image pair for user {}: {} ({}x{}) + {} ({}x{})",
            owner,
            filename,
            primary.width(),
            primary.height(),
            thumbnail_filename,
            thumbnail.width(),
            thumbnail.height()
        );

        Ok(StoredImagePair {
            filename,
            thumbnail_filename,
        })
    }

    fn validate(
        &self,
        filename: &str,
        declared_len: Option<u64>,
        actual_len: u64,
    ) -> MediaErrorResult<()> {
        if filename.is_empty() {
            return Err(MediaError::validation("No selected file"));
        }

        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .ok_or_else(|| MediaError::validation("Invalid file type"))?;
        if !self
            .config
            .allowed_extensions
            .iter()
            .any(|allowed| *allowed == extension)
        {
            debug!("Rejected upload with extension '{}'", extension);
            return Err(MediaError::validation("Invalid file type"));
        }

        let max = self.config.max_upload_bytes;
        if declared_len.is_some_and(|len| len > max) || actual_len > max {
            return Err(MediaError::validation("File too large"));
        }

        Ok(())
    }
}
