//! Image loading helpers.

use crate::core::SplitError;
use image::RgbImage;
use std::path::Path;

/// Loads an image from a file path and converts it to an `RgbImage`.
///
/// The pipeline itself consumes decoded rasters; this helper is for callers
/// that hold scan file paths. Any format supported by the `image` crate is
/// accepted.
///
/// # Errors
///
/// Returns `SplitError::Image` if the file cannot be decoded.
pub fn load_image(path: &Path) -> Result<RgbImage, SplitError> {
    let img = image::open(path)?;
    Ok(img.to_rgb8())
}
