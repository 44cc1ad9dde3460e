//! Constants used throughout the page-splitting pipeline.
//!
//! This module defines the default values for the detection and splitting
//! parameters. All of them can be overridden through
//! [`SplitConfig`](crate::core::SplitConfig); the defaults are tuned for
//! double-page book scans at typical archive resolutions (around 300 DPI).

/// The default minimum column width in pixels.
///
/// This constant bounds the separator search: the separator line must lie at
/// least half this distance away from either image edge, since each physical
/// page must be at least one column wide.
pub const DEFAULT_MIN_COLUMN_WIDTH: u32 = 410;

/// The default low intensity-gradient threshold for Canny edge detection.
pub const DEFAULT_CANNY_LOW_THRESHOLD: f32 = 50.0;

/// The default high intensity-gradient threshold for Canny edge detection.
pub const DEFAULT_CANNY_HIGH_THRESHOLD: f32 = 150.0;

/// The default smoothing kernel size applied before edge detection.
///
/// Must be odd. The kernel size is mapped to a Gaussian sigma using the same
/// formula OpenCV uses for its default kernels.
pub const DEFAULT_CANNY_KERNEL_SIZE: u32 = 3;

/// The default distance resolution of the Hough accumulator, in pixels.
pub const DEFAULT_HOUGH_RHO_RESOLUTION: f32 = 1.0;

/// The default angular resolution of the Hough accumulator, in radians.
pub const DEFAULT_HOUGH_THETA_RESOLUTION: f32 = std::f32::consts::PI / 500.0;

/// The default minimum vote count for a Hough cell to become a line candidate.
pub const DEFAULT_HOUGH_VOTE_THRESHOLD: u32 = 350;

/// The default suppression radius, in accumulator bins, used to cluster
/// near-duplicate line detections into a single candidate.
pub const DEFAULT_HOUGH_SUPPRESSION_RADIUS: u32 = 8;

/// The default tolerance, in radians, for treating a detected line as
/// vertical when searching for the page separator.
pub const DEFAULT_VERTICAL_TOLERANCE: f32 = std::f32::consts::PI / 36.0;

/// The default threshold for parallel processing.
///
/// Documents with more double pages than this are processed on a rayon
/// worker pool; smaller documents are processed sequentially.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4;
