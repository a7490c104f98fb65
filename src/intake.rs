//! Image intake
//!
//! Loads a user-supplied file, proves it decodes as a raster image, and
//! produces the base64 data URL the analysis client transmits. Unreadable
//! files and oversized files are rejected with explicit errors.

use crate::error::{Result, SentientVisionError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sentient_vision_common::{data_url, UploadedImage};
use std::path::Path;

/// An accepted image plus its decoded pixel dimensions.
pub struct LoadedImage {
    pub uploaded: UploadedImage,
    pub width: u32,
    pub height: u32,
}

/// Load and validate an image file.
///
/// # Arguments
/// * `path` - image file to load
/// * `max_bytes` - enforced upper bound on the file size
pub fn load_image(path: &Path, max_bytes: u64) -> Result<LoadedImage> {
    if !path.exists() {
        return Err(SentientVisionError::FileNotFound(
            path.display().to_string(),
        ));
    }

    let size = std::fs::metadata(path)?.len();
    if size > max_bytes {
        return Err(SentientVisionError::ImageTooLarge(size, max_bytes));
    }

    let bytes = std::fs::read(path)?;

    // Decode to prove the file is a readable raster image.
    let format = image::guess_format(&bytes)
        .map_err(|e| SentientVisionError::ImageLoad(e.to_string()))?;
    let decoded = image::load_from_memory_with_format(&bytes, format)
        .map_err(|e| SentientVisionError::ImageLoad(e.to_string()))?;

    let mime_type = format.to_mime_type();
    let encoded = STANDARD.encode(&bytes);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    Ok(LoadedImage {
        uploaded: UploadedImage {
            file_name,
            mime_type: mime_type.to_string(),
            data_url: data_url::build(mime_type, &encoded),
        },
        width: decoded.width(),
        height: decoded.height(),
    })
}
