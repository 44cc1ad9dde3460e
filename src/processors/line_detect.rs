//! Straight-line detection on scanned raster images.
//!
//! Runs Canny edge detection over a smoothed grayscale copy of the page and
//! feeds the edge map into a Hough transform with configurable distance and
//! angular resolution. Near-duplicate accumulator peaks are clustered by
//! suppressing everything within a bin radius of a stronger peak, so a thick
//! physical line yields one candidate instead of a bundle.

use crate::core::SplitConfig;
use image::imageops::grayscale;
use image::RgbImage;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use tracing::debug;

/// A detected straight-line candidate in polar form.
///
/// The line is the set of points satisfying `x * cos(theta) + y * sin(theta)
/// = rho`, with `theta` in `[0, pi)` being the direction of the line's
/// normal. A perfectly vertical line has `theta` near `0` or `pi`; a
/// horizontal line has `theta` near `pi/2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoughLine {
    /// Signed perpendicular distance from the image origin, in pixels.
    pub rho: f32,
    /// Angle of the line normal, in radians, within `[0, pi)`.
    pub theta: f32,
    /// Number of edge pixels that voted for this line.
    pub votes: u32,
}

impl HoughLine {
    /// Angular distance of this line's direction from vertical, in radians.
    pub fn tilt_from_vertical(&self) -> f32 {
        self.theta.min(PI - self.theta)
    }

    /// The x-coordinate where this line crosses the horizontal row `y`.
    ///
    /// Returns `None` for (near-)horizontal lines, which cross a row
    /// everywhere or nowhere.
    pub fn x_at(&self, y: f32) -> Option<f32> {
        let cos = self.theta.cos();
        if cos.abs() < 1e-6 {
            return None;
        }
        Some((self.rho - y * self.theta.sin()) / cos)
    }
}

/// Detects straight-line candidates in a raster image.
///
/// Deterministic for a fixed image and configuration. An image with no
/// qualifying lines yields an empty candidate set; classifying that as a
/// failure is left to the separator locator.
#[derive(Debug, Clone)]
pub struct LineDetector {
    low_threshold: f32,
    high_threshold: f32,
    smoothing_sigma: f32,
    rho_resolution: f32,
    theta_resolution: f32,
    vote_threshold: u32,
    suppression_radius: u32,
}

impl LineDetector {
    /// Creates a detector from the pipeline configuration.
    ///
    /// The configured smoothing kernel size is mapped to a Gaussian sigma
    /// with the formula OpenCV uses for its default kernels, so the original
    /// parameter values keep their meaning.
    pub fn from_config(config: &SplitConfig) -> Self {
        let k = config.canny_kernel_size as f32;
        let smoothing_sigma = (0.3 * ((k - 1.0) * 0.5 - 1.0) + 0.8).max(0.1);
        Self {
            low_threshold: config.canny_low_threshold,
            high_threshold: config.canny_high_threshold,
            smoothing_sigma,
            rho_resolution: config.hough_rho_resolution,
            theta_resolution: config.hough_theta_resolution,
            vote_threshold: config.hough_vote_threshold,
            suppression_radius: config.hough_suppression_radius,
        }
    }

    /// Detects line candidates in the given image.
    ///
    /// # Returns
    ///
    /// The surviving candidates, strongest first. Empty if no accumulator
    /// cell reached the vote threshold.
    pub fn detect(&self, image: &RgbImage) -> Vec<HoughLine> {
        let gray = grayscale(image);
        let blurred = gaussian_blur_f32(&gray, self.smoothing_sigma);
        let edges = canny(&blurred, self.low_threshold, self.high_threshold);

        let lines = self.hough_transform(&edges);
        debug!(
            line_count = lines.len(),
            vote_threshold = self.vote_threshold,
            "hough line detection complete"
        );
        lines
    }

    /// Accumulates edge pixels into the polar parameter space and extracts
    /// vote-threshold peaks with non-maximum suppression.
    fn hough_transform(&self, edges: &image::GrayImage) -> Vec<HoughLine> {
        let (width, height) = edges.dimensions();
        if width == 0 || height == 0 {
            return Vec::new();
        }

        let theta_bins = ((PI / self.theta_resolution).ceil() as usize).max(1);
        let rho_max = (width as f32).hypot(height as f32);
        let rho_bins = (2.0 * rho_max / self.rho_resolution).ceil() as usize + 1;

        let trig: Vec<(f32, f32)> = (0..theta_bins)
            .map(|t| {
                let theta = t as f32 * self.theta_resolution;
                (theta.cos(), theta.sin())
            })
            .collect();

        let mut accumulator = vec![0u32; theta_bins * rho_bins];
        for (x, y, pixel) in edges.enumerate_pixels() {
            if pixel.0[0] == 0 {
                continue;
            }
            let (fx, fy) = (x as f32, y as f32);
            for (t, &(cos, sin)) in trig.iter().enumerate() {
                let rho = fx * cos + fy * sin;
                let r = (((rho + rho_max) / self.rho_resolution).round() as usize)
                    .min(rho_bins - 1);
                accumulator[t * rho_bins + r] += 1;
            }
        }

        // Collect cells over the vote threshold, strongest first. Ties are
        // ordered by bin index so detection stays deterministic.
        let mut peaks: Vec<(u32, usize, usize)> = Vec::new();
        for t in 0..theta_bins {
            for r in 0..rho_bins {
                let votes = accumulator[t * rho_bins + r];
                if votes >= self.vote_threshold {
                    peaks.push((votes, t, r));
                }
            }
        }
        peaks.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

        // Greedy non-maximum suppression: a peak within the suppression
        // radius (in bins) of a stronger kept peak is treated as a
        // near-duplicate of the same physical line. Theta wraps at pi with
        // the sign of rho flipping, so across the wrap the mirrored rho bin
        // is compared.
        let radius = self.suppression_radius as usize;
        let mut kept: Vec<(usize, usize)> = Vec::new();
        let mut lines = Vec::new();
        for (votes, t, r) in peaks {
            let suppressed = kept.iter().any(|&(kt, kr)| {
                let direct = t.abs_diff(kt);
                let wrapped = theta_bins - direct;
                if direct <= wrapped {
                    direct <= radius && r.abs_diff(kr) <= radius
                } else {
                    wrapped <= radius && r.abs_diff(rho_bins - 1 - kr) <= radius
                }
            });
            if suppressed {
                continue;
            }
            kept.push((t, r));
            lines.push(HoughLine {
                rho: r as f32 * self.rho_resolution - rho_max,
                theta: t as f32 * self.theta_resolution,
                votes,
            });
        }
        lines
    }
}
