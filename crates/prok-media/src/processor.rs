//! Pure image transforms: decode, color normalization, bounded resize,
//! JPEG re-encode.

use crate::error::{MediaError, Result as MediaErrorResult};

use std::io::Cursor;
use std::panic::Location;

use error_location::ErrorLocation;
use image::{DynamicImage, ImageOutputFormat};

/// Open a byte stream as an image.
///
/// Corrupt or unsupported bytes become a [`MediaError::Decode`], never a
/// raw codec error surfaced to the caller.
#[track_caller]
pub fn decode(bytes: &[u8]) -> MediaErrorResult<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| MediaError::Decode {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Force a fixed 3-channel representation so gray, palette, and
/// alpha-channel inputs are handled uniformly. One-way and lossy.
pub fn normalize(image: DynamicImage) -> DynamicImage {
    DynamicImage::ImageRgb8(image.to_rgb8())
}

/// Constrain to a bounding box preserving aspect ratio. Downscale only:
/// an image already inside the box is returned unchanged.
pub fn fit_within(image: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    if image.width() <= max_width && image.height() <= max_height {
        image.clone()
    } else {
        image.thumbnail(max_width, max_height)
    }
}

#[track_caller]
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> MediaErrorResult<Vec<u8>> {
    let mut buffer = Vec::new();

    image
        .write_to(&mut Cursor::new(&mut buffer), ImageOutputFormat::Jpeg(quality))
        .map_err(|e| MediaError::Encode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(buffer)
}
