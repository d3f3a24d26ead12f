//! Image upload validation and decoding
//!
//! Uploads are accepted when the file extension names a supported image
//! format and the file is no larger than the configured limit (5 MiB by
//! default). Accepted files are decoded with the `image` crate into an RGBA
//! buffer, which implements `PixelSource` for sampling.
//!
//! ## Supported Formats
//!
//! - JPEG, PNG, GIF (first frame only), WebP, TIFF, BMP

use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::debug;

use crate::error::{AnalysisError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    /// MIME type of the format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Tiff => "image/tiff",
            ImageFormat::Bmp => "image/bmp",
        }
    }
}

/// Check that a file is an accepted image upload
///
/// # Errors
///
/// Returns `InvalidInput` (`file_type`) for an unrecognized extension,
/// `InvalidInput` (`file_size`) when the file exceeds `max_bytes`, and
/// `ImageLoadError` if the file metadata cannot be read.
pub fn validate_upload(path: &Path, max_bytes: u64) -> Result<ImageFormat> {
    let format = ImageFormat::from_extension(path)
        .ok_or_else(|| AnalysisError::invalid_input("file_type", path.display()))?;

    let metadata = std::fs::metadata(path).map_err(|e| {
        AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    if metadata.len() > max_bytes {
        return Err(AnalysisError::invalid_input("file_size", metadata.len()));
    }

    Ok(format)
}

/// Validate and decode an image file into an RGBA buffer
///
/// # Errors
///
/// Returns the `validate_upload` errors, or `ImageLoadError` if the file
/// cannot be opened or decoded.
///
/// # Example
///
/// ```rust,no_run
/// use style_scan::image_loader::load_image;
/// use std::path::Path;
///
/// let image = load_image(Path::new("outfit.jpg"), 5 * 1024 * 1024)?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), style_scan::AnalysisError>(())
/// ```
pub fn load_image(path: &Path, max_bytes: u64) -> Result<RgbaImage> {
    let format = validate_upload(path, max_bytes)?;

    let reader = ImageReader::open(path).map_err(|e| {
        AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let image = reader.decode().map_err(|e| {
        AnalysisError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    let rgba = image.to_rgba8();
    debug!(
        path = %path.display(),
        mime = format.mime_type(),
        width = rgba.width(),
        height = rgba.height(),
        "decoded image"
    );
    Ok(rgba)
}
