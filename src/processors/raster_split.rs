//! Cutting a raster image at the separator column.

use crate::core::SplitError;
use image::imageops::crop_imm;
use image::RgbImage;

/// Splits an image into left and right sub-images at a pixel column.
///
/// The left image spans columns `[0, x)`, the right image spans
/// `[x, width)`: the two widths always sum to the original width, no column
/// is duplicated or dropped, and both halves keep the original height and
/// color depth.
///
/// # Returns
///
/// * `Ok((left, right))` - The two sub-images.
/// * `Err(SplitError::InvalidPageGeometry)` - If `x` is `0` or beyond the
///   last column, which would leave one side empty.
pub fn split_image(page: u32, image: &RgbImage, x: u32) -> Result<(RgbImage, RgbImage), SplitError> {
    let (width, height) = image.dimensions();
    if x == 0 || x >= width {
        return Err(SplitError::invalid_geometry(
            page,
            format!("split column {x} outside raster of width {width}"),
        ));
    }

    let left = crop_imm(image, 0, 0, x, height).to_image();
    let right = crop_imm(image, x, 0, width - x, height).to_image();
    Ok((left, right))
}
