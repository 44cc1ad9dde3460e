//! Conversion between pixel space and document space.
//!
//! The raster image and the parsed text layout use coordinate systems of
//! different scale. The scaling between them is linear per axis, computed
//! once per page, so positions can be converted in either direction without
//! accumulating drift.

use crate::core::SplitError;
use crate::domain::DoublePage;

/// Per-axis linear scaling between a page's pixel and document coordinates.
///
/// Both scale factors are guaranteed strictly positive and finite;
/// construction fails with [`SplitError::InvalidPageGeometry`] otherwise.
/// `to_pixel_x` and `to_document_x` are exact inverses up to floating-point
/// rounding, likewise for the y-axis pair.
#[derive(Debug, Clone, Copy)]
pub struct PageScaling {
    x: f32,
    y: f32,
}

impl PageScaling {
    /// Computes the scaling for one double page.
    pub fn for_page(page: &DoublePage) -> Result<Self, SplitError> {
        let (pixel_width, pixel_height) = page.image.dimensions();
        if pixel_width == 0 || pixel_height == 0 {
            return Err(SplitError::invalid_geometry(
                page.number,
                format!("raster is {pixel_width}x{pixel_height} pixels"),
            ));
        }
        if !page.width.is_finite() || page.width <= 0.0 {
            return Err(SplitError::invalid_geometry(
                page.number,
                format!("document width is {}", page.width),
            ));
        }
        if !page.height.is_finite() || page.height <= 0.0 {
            return Err(SplitError::invalid_geometry(
                page.number,
                format!("document height is {}", page.height),
            ));
        }
        Ok(Self {
            x: pixel_width as f32 / page.width,
            y: pixel_height as f32 / page.height,
        })
    }

    /// The horizontal scale factor (pixels per document unit).
    pub fn x_scale(&self) -> f32 {
        self.x
    }

    /// The vertical scale factor (pixels per document unit).
    pub fn y_scale(&self) -> f32 {
        self.y
    }

    /// Converts a document-space x-coordinate to pixel space.
    pub fn to_pixel_x(&self, x: f32) -> f32 {
        x * self.x
    }

    /// Converts a pixel-space x-coordinate to document space.
    pub fn to_document_x(&self, x: f32) -> f32 {
        x / self.x
    }

    /// Converts a document-space y-coordinate to pixel space.
    pub fn to_pixel_y(&self, y: f32) -> f32 {
        y * self.y
    }

    /// Converts a pixel-space y-coordinate to document space.
    pub fn to_document_y(&self, y: f32) -> f32 {
        y / self.y
    }
}
