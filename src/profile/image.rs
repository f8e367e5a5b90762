//! Profile image validation and encoding.
//!
//! A selected image is checked against the JPEG/PNG allow-list (by content
//! sniffing, not file extension) and the size cap before being base64
//! encoded for the `image` field of the profile update. Rejections
//! short-circuit before any event dispatch and never reach the network.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use thiserror::Error;

/// Maximum accepted image size: 1 MiB.
pub const MAX_IMAGE_BYTES: usize = 1_048_576;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("Only JPG and PNG images can be uploaded")]
    UnsupportedFormat,

    #[error("Image size must be 1MB or less (got {size} bytes)")]
    TooLarge { size: usize },
}

/// Validate and base64-encode an image for the profile update payload.
pub fn encode_profile_image(bytes: &[u8]) -> Result<String, ImageError> {
    let format = image::guess_format(bytes).map_err(|_| ImageError::UnsupportedFormat)?;
    if !matches!(format, ImageFormat::Jpeg | ImageFormat::Png) {
        return Err(ImageError::UnsupportedFormat);
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge { size: bytes.len() });
    }
    Ok(STANDARD.encode(bytes))
}
