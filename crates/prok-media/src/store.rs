//! Filesystem store for processed image pairs.
//!
//! Naming contract: the primary copy is
//! `profile_<owner>_<random>.jpg` (random component = fresh UUIDv4, so
//! concurrent or retried uploads cannot collide and names are not
//! guessable from the owner id alone); its thumbnail is the same name
//! under a `thumb_` prefix. The thumbnail is never tracked separately —
//! the prefix rule is the derivation.

use crate::error::{MediaError, Result as MediaErrorResult};

use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use uuid::Uuid;

pub const THUMBNAIL_PREFIX: &str = "thumb_";

/// Unique, collision-proof name for a new primary image.
pub fn primary_filename(owner: Uuid) -> String {
    format!("profile_{}_{}.jpg", owner.simple(), Uuid::new_v4().simple())
}

/// Deterministic thumbnail name for a primary image.
pub fn thumbnail_filename(primary: &str) -> String {
    format!("{THUMBNAIL_PREFIX}{primary}")
}

pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[track_caller]
    pub fn write(&self, filename: &str, bytes: &[u8]) -> MediaErrorResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;

        let path = self.dir.join(filename);
        fs::write(&path, bytes).map_err(|e| io_error(&path, e))?;

        Ok(())
    }
}

#[track_caller]
fn io_error(path: &Path, source: std::io::Error) -> MediaError {
    MediaError::Io {
        path: path.to_path_buf(),
        source,
        location: ErrorLocation::from(Location::caller()),
    }
}
