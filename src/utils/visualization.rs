//! Diagnostic visualization of detected lines.
//!
//! Renders detected line candidates over the original scan so a human can
//! inspect why a separator was (or was not) found. These overlays are never
//! consumed programmatically.

use crate::core::SplitError;
use crate::processors::HoughLine;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use std::path::Path;
use tracing::debug;

const LINE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Draws every line candidate over a copy of the image.
///
/// Each polar line is extended across the whole raster; out-of-bounds
/// segments are clipped by the drawing routine.
pub fn draw_line_overlay(image: &RgbImage, lines: &[HoughLine]) -> RgbImage {
    let mut canvas = image.clone();
    let (width, height) = canvas.dimensions();
    let reach = (width as f32).hypot(height as f32);

    for line in lines {
        let (sin, cos) = line.theta.sin_cos();
        // Closest point of the line to the origin, then extend along the
        // line direction in both ways.
        let (px, py) = (line.rho * cos, line.rho * sin);
        let (dx, dy) = (-sin, cos);
        let start = (px - reach * dx, py - reach * dy);
        let end = (px + reach * dx, py + reach * dy);
        draw_line_segment_mut(&mut canvas, start, end, LINE_COLOR);
    }
    canvas
}

/// Draws the line overlay and writes it to `path` as an image file.
///
/// The format is inferred from the file extension, as with
/// [`image::ImageBuffer::save`].
pub fn save_line_overlay(
    image: &RgbImage,
    lines: &[HoughLine],
    path: &Path,
) -> Result<(), SplitError> {
    let overlay = draw_line_overlay(image, lines);
    overlay.save(path)?;
    debug!(path = %path.display(), line_count = lines.len(), "line overlay written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_marks_a_vertical_line() {
        let image = RgbImage::from_pixel(60, 40, Rgb([255, 255, 255]));
        let line = HoughLine {
            rho: 30.0,
            theta: 0.0,
            votes: 10,
        };

        let overlay = draw_line_overlay(&image, &[line]);
        assert_eq!(overlay.dimensions(), image.dimensions());
        assert_eq!(*overlay.get_pixel(30, 20), LINE_COLOR);
        // The source image is untouched.
        assert_eq!(*image.get_pixel(30, 20), Rgb([255, 255, 255]));
    }

    #[test]
    fn overlay_with_no_lines_is_a_plain_copy() {
        let image = RgbImage::from_pixel(10, 10, Rgb([7, 7, 7]));
        let overlay = draw_line_overlay(&image, &[]);
        assert_eq!(overlay, image);
    }
}
