//! Utility functions for image loading and diagnostics.

mod image;
pub mod visualization;

pub use image::load_image;
pub use visualization::{draw_line_overlay, save_line_overlay};
