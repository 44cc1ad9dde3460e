//! Separator line location.
//!
//! Reduces the noisy line-candidate set to the single x-coordinate that best
//! represents the boundary between the two physical pages: keep only
//! near-vertical candidates, drop anything implausibly close to an image
//! edge, and of the survivors take the one closest to the horizontal image
//! center, breaking ties by vote count.

use crate::core::SplitError;
use crate::processors::line_detect::HoughLine;
use tracing::debug;

/// Two candidate offsets closer together than this are treated as equally
/// central and the tie goes to the higher vote count.
const OFFSET_TIE_TOLERANCE: f32 = 0.5;

/// Locates the page separator among detected line candidates.
#[derive(Debug, Clone)]
pub struct SeparatorLocator {
    image_width: u32,
    image_height: u32,
    min_edge_distance: f32,
    vertical_tolerance: f32,
}

impl SeparatorLocator {
    /// Creates a locator for an image of the given pixel dimensions.
    ///
    /// # Arguments
    ///
    /// * `image_width` / `image_height` - Raster dimensions in pixels.
    /// * `min_edge_distance` - Minimum distance, in pixels, the separator
    ///   must keep from either vertical image edge (half the minimum column
    ///   width: each physical page must be at least one column wide).
    /// * `vertical_tolerance` - Maximum tilt from vertical, in radians, for
    ///   a candidate to be considered.
    pub fn new(
        image_width: u32,
        image_height: u32,
        min_edge_distance: f32,
        vertical_tolerance: f32,
    ) -> Self {
        Self {
            image_width,
            image_height,
            min_edge_distance,
            vertical_tolerance,
        }
    }

    /// Selects the separator x-coordinate, in pixel space.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - The pixel x-coordinate of the chosen separator.
    /// * `Err(SplitError::SeparatorNotFound)` - If no candidate survives
    ///   filtering. The error carries the full candidate list for
    ///   diagnostics.
    pub fn locate(&self, page: u32, candidates: &[HoughLine]) -> Result<f32, SplitError> {
        let center = self.image_width as f32 / 2.0;
        let mid_row = self.image_height as f32 / 2.0;
        let max_x = self.image_width as f32 - self.min_edge_distance;

        let mut best: Option<(f32, u32, f32)> = None; // (offset, votes, x)
        for line in candidates {
            if line.tilt_from_vertical() > self.vertical_tolerance {
                continue;
            }
            let Some(x) = line.x_at(mid_row) else {
                continue;
            };
            if x < self.min_edge_distance || x > max_x {
                debug!(page, x, "vertical candidate too close to an image edge");
                continue;
            }
            let offset = (x - center).abs();
            let better = match best {
                None => true,
                Some((best_offset, best_votes, _)) => {
                    if (offset - best_offset).abs() <= OFFSET_TIE_TOLERANCE {
                        line.votes > best_votes
                    } else {
                        offset < best_offset
                    }
                }
            };
            if better {
                best = Some((offset, line.votes, x));
            }
        }

        match best {
            Some((offset, votes, x)) => {
                debug!(page, x, offset, votes, "separator line selected");
                Ok(x)
            }
            None => Err(SplitError::SeparatorNotFound {
                page,
                candidates: candidates.to_vec(),
            }),
        }
    }
}
