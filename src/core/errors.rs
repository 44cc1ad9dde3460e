//! Error types for the page-splitting pipeline.
//!
//! This module defines the error kinds that can occur while splitting a
//! double page: a missing separator line, invalid page geometry, and the
//! usual configuration and I/O failures. Per-page errors carry the page
//! number so that batch processing can report which pages failed without
//! aborting the rest of the run.

use crate::processors::HoughLine;
use thiserror::Error;

/// Enum representing the errors that can occur while splitting double pages.
///
/// `SeparatorNotFound` and `InvalidPageGeometry` are fatal for the affected
/// page only; the batch driver collects them and continues with the
/// remaining pages. Configuration errors are raised before any page is
/// processed.
#[derive(Error, Debug)]
pub enum SplitError {
    /// No qualifying near-vertical line survived separator filtering.
    ///
    /// Carries the full candidate list returned by line detection so the
    /// failure can be diagnosed (e.g. by rendering a line overlay).
    #[error("no page separator line found for page {page} ({} candidate lines)", .candidates.len())]
    SeparatorNotFound {
        /// The number of the double page that failed.
        page: u32,
        /// Every line candidate that was considered, for diagnostics.
        candidates: Vec<HoughLine>,
    },

    /// A page declared zero, negative, or non-finite dimensions, or a split
    /// position fell outside the raster.
    #[error("invalid geometry for page {page}: {detail}")]
    InvalidPageGeometry {
        /// The number of the double page that failed.
        page: u32,
        /// A message describing which dimension was invalid.
        detail: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    Config {
        /// A message describing the configuration error.
        message: String,
    },

    /// Error occurred while loading or encoding an image.
    #[error("image")]
    Image(#[from] image::ImageError),

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl SplitError {
    /// Creates a `SplitError` for invalid page geometry.
    pub fn invalid_geometry(page: u32, detail: impl Into<String>) -> Self {
        Self::InvalidPageGeometry {
            page,
            detail: detail.into(),
        }
    }

    /// Creates a `SplitError` for configuration errors.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a `SplitError` for configuration errors with field context.
    pub fn config_with_context(field: &str, value: &str, reason: &str) -> Self {
        Self::Config {
            message: format!(
                "configuration error in field '{}' with value '{}': {}",
                field, value, reason
            ),
        }
    }
}
