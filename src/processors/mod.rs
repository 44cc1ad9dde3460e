//! Geometric processing for double-page separation.
//!
//! This module provides the algorithms that turn a scanned double page into
//! two single pages:
//!
//! * `line_detect` - Canny edge detection plus a Hough transform producing
//!   straight-line candidates
//! * `separator` - Selection of the single vertical line separating the two
//!   physical pages
//! * `scaling` - Conversion between pixel space and document space
//! * `raster_split` - Cutting the raster image at the separator column
//! * `text_split` - Partitioning and re-basing the text fragments

mod line_detect;
mod raster_split;
mod scaling;
mod separator;
mod text_split;

pub use line_detect::{HoughLine, LineDetector};
pub use raster_split::split_image;
pub use scaling::PageScaling;
pub use separator::SeparatorLocator;
pub use text_split::{split_fragments, FragmentWarning};
