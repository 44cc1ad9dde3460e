//! Configuration for the page-splitting pipeline.
//!
//! All parameters that affect detection and splitting live here as plain
//! numeric fields, so the pipeline can be exercised with varying parameters
//! in tests without any environment coupling. The defaults come from
//! [`crate::core::constants`] and are tuned for double-page book scans.

use crate::core::constants::*;
use crate::core::errors::SplitError;
use serde::{Deserialize, Serialize};

/// Configuration for double-page separation.
///
/// Groups the edge-detection thresholds, the Hough transform resolution, and
/// the separator search bounds. Construct with [`SplitConfig::default`] and
/// override individual fields as needed; [`SplitConfig::validate`] is called
/// by the pipeline before any page is processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Minimum width of a physical page column, in pixels.
    ///
    /// The separator line must lie at least `min_column_width / 2` pixels
    /// away from either image edge.
    pub min_column_width: u32,

    /// Low intensity-gradient threshold for Canny edge detection.
    pub canny_low_threshold: f32,

    /// High intensity-gradient threshold for Canny edge detection.
    pub canny_high_threshold: f32,

    /// Smoothing kernel size applied before edge detection. Must be odd.
    pub canny_kernel_size: u32,

    /// Distance resolution of the Hough accumulator, in pixels.
    pub hough_rho_resolution: f32,

    /// Angular resolution of the Hough accumulator, in radians.
    pub hough_theta_resolution: f32,

    /// Minimum accumulated vote count for a line candidate to be accepted.
    pub hough_vote_threshold: u32,

    /// Suppression radius, in accumulator bins, for clustering
    /// near-duplicate detections.
    pub hough_suppression_radius: u32,

    /// Tolerance, in radians, for treating a line as vertical during
    /// separator search.
    pub vertical_tolerance: f32,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            min_column_width: DEFAULT_MIN_COLUMN_WIDTH,
            canny_low_threshold: DEFAULT_CANNY_LOW_THRESHOLD,
            canny_high_threshold: DEFAULT_CANNY_HIGH_THRESHOLD,
            canny_kernel_size: DEFAULT_CANNY_KERNEL_SIZE,
            hough_rho_resolution: DEFAULT_HOUGH_RHO_RESOLUTION,
            hough_theta_resolution: DEFAULT_HOUGH_THETA_RESOLUTION,
            hough_vote_threshold: DEFAULT_HOUGH_VOTE_THRESHOLD,
            hough_suppression_radius: DEFAULT_HOUGH_SUPPRESSION_RADIUS,
            vertical_tolerance: DEFAULT_VERTICAL_TOLERANCE,
        }
    }
}

impl SplitConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If all parameters are usable.
    /// * `Err(SplitError::Config)` - Describing the first invalid field.
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.min_column_width == 0 {
            return Err(SplitError::config_with_context(
                "min_column_width",
                "0",
                "must be positive",
            ));
        }
        if !self.canny_low_threshold.is_finite() || self.canny_low_threshold < 0.0 {
            return Err(SplitError::config_with_context(
                "canny_low_threshold",
                &self.canny_low_threshold.to_string(),
                "must be finite and non-negative",
            ));
        }
        if !self.canny_high_threshold.is_finite()
            || self.canny_high_threshold < self.canny_low_threshold
        {
            return Err(SplitError::config_with_context(
                "canny_high_threshold",
                &self.canny_high_threshold.to_string(),
                "must be finite and not below canny_low_threshold",
            ));
        }
        if self.canny_kernel_size == 0 || self.canny_kernel_size % 2 == 0 {
            return Err(SplitError::config_with_context(
                "canny_kernel_size",
                &self.canny_kernel_size.to_string(),
                "must be odd",
            ));
        }
        if !self.hough_rho_resolution.is_finite() || self.hough_rho_resolution <= 0.0 {
            return Err(SplitError::config_with_context(
                "hough_rho_resolution",
                &self.hough_rho_resolution.to_string(),
                "must be finite and positive",
            ));
        }
        if !self.hough_theta_resolution.is_finite()
            || self.hough_theta_resolution <= 0.0
            || self.hough_theta_resolution > std::f32::consts::PI
        {
            return Err(SplitError::config_with_context(
                "hough_theta_resolution",
                &self.hough_theta_resolution.to_string(),
                "must be in (0, pi]",
            ));
        }
        if self.hough_vote_threshold == 0 {
            return Err(SplitError::config_with_context(
                "hough_vote_threshold",
                "0",
                "must be positive",
            ));
        }
        if !self.vertical_tolerance.is_finite()
            || self.vertical_tolerance <= 0.0
            || self.vertical_tolerance >= std::f32::consts::FRAC_PI_2
        {
            return Err(SplitError::config_with_context(
                "vertical_tolerance",
                &self.vertical_tolerance.to_string(),
                "must be in (0, pi/2)",
            ));
        }
        Ok(())
    }

    /// The minimum distance, in pixels, the separator may lie from either
    /// image edge.
    pub fn min_edge_distance(&self) -> f32 {
        self.min_column_width as f32 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SplitConfig::default().validate().is_ok());
    }

    #[test]
    fn even_kernel_size_rejected() {
        let config = SplitConfig {
            canny_kernel_size: 4,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_canny_thresholds_rejected() {
        let config = SplitConfig {
            canny_low_threshold: 200.0,
            canny_high_threshold: 100.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_min_column_width_rejected() {
        let config = SplitConfig {
            min_column_width: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn min_edge_distance_is_half_column_width() {
        let config = SplitConfig {
            min_column_width: 410,
            ..Default::default()
        };
        assert_eq!(config.min_edge_distance(), 205.0);
    }
}
