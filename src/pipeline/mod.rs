//! Batch orchestration: from double pages to a split document.
//!
//! [`PageSplitter`] runs the per-page pipeline (line detection, separator
//! location, raster and text splitting) and assembles the results into a
//! [`SplitDocument`]. Pages are independent of each other, so documents over
//! the parallel threshold are processed on a rayon worker pool; the output
//! ordering contract (by page number, left before right) is restored when
//! the results are collected. A failed page is recorded in the report and
//! never blocks the remaining pages.

mod report;

pub use report::{BatchReport, PageFailure};

use crate::core::constants::DEFAULT_PARALLEL_THRESHOLD;
use crate::core::{SplitConfig, SplitError};
use crate::domain::{DoublePage, PageSide, SplitDocument, SplitPage};
use crate::processors::{
    split_fragments, split_image, FragmentWarning, LineDetector, PageScaling, SeparatorLocator,
};
use crate::utils::visualization::save_line_overlay;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// The two sides of one split double page, plus any fragment warnings
/// collected while partitioning its text.
#[derive(Debug)]
pub struct PageSplit {
    /// The left physical page.
    pub left: SplitPage,
    /// The right physical page.
    pub right: SplitPage,
    /// Warnings for fragments outside the page bounds.
    pub warnings: Vec<FragmentWarning>,
}

/// Result of splitting a whole document.
#[derive(Debug)]
pub struct BatchOutcome {
    /// All successfully split pages, ordered by double-page number, left
    /// before right.
    pub document: SplitDocument,
    /// Per-page outcomes: successes, failures with reasons, and warnings.
    pub report: BatchReport,
}

/// Splits scanned double pages into single pages.
///
/// Construction validates the configuration once; the splitter itself is
/// immutable and can be shared across threads.
#[derive(Debug, Clone)]
pub struct PageSplitter {
    config: SplitConfig,
    diagnostics_dir: Option<PathBuf>,
}

impl PageSplitter {
    /// Creates a splitter with the given configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(PageSplitter)` - If the configuration is valid.
    /// * `Err(SplitError::Config)` - Describing the first invalid field.
    pub fn new(config: SplitConfig) -> Result<Self, SplitError> {
        config.validate()?;
        Ok(Self {
            config,
            diagnostics_dir: None,
        })
    }

    /// Enables diagnostic output: for every page, an overlay image with the
    /// detected lines drawn over the original raster is written to `dir`.
    ///
    /// Overlay write failures are logged as warnings and do not fail the
    /// page; the overlays are for human inspection only.
    pub fn with_diagnostics_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.diagnostics_dir = Some(dir.into());
        self
    }

    /// Splits a single double page into its left and right physical pages.
    ///
    /// # Returns
    ///
    /// * `Ok(PageSplit)` - Both sides with re-based fragments.
    /// * `Err(SplitError)` - `SeparatorNotFound` if no qualifying vertical
    ///   line exists, `InvalidPageGeometry` for unusable dimensions. Both
    ///   are fatal for this page only.
    pub fn split_page(&self, page: &DoublePage) -> Result<PageSplit, SplitError> {
        let scaling = PageScaling::for_page(page)?;
        let (pixel_width, pixel_height) = page.image.dimensions();
        if pixel_width < 2 {
            return Err(SplitError::invalid_geometry(
                page.number,
                format!("raster of width {pixel_width} cannot hold two pages"),
            ));
        }

        debug!(page = page.number, "detecting lines");
        let detector = LineDetector::from_config(&self.config);
        let lines = detector.detect(&page.image);
        debug!(
            page = page.number,
            line_count = lines.len(),
            "line detection finished"
        );

        if let Some(dir) = &self.diagnostics_dir {
            let path = dir.join(format!("page-{}-lines.png", page.number));
            if let Err(error) = save_line_overlay(&page.image, &lines, &path) {
                warn!(page = page.number, %error, "failed to write line overlay");
            }
        }

        let locator = SeparatorLocator::new(
            pixel_width,
            pixel_height,
            self.config.min_edge_distance(),
            self.config.vertical_tolerance,
        );
        let separator_pixel_x = locator.locate(page.number, &lines)?;
        let separator_document_x = scaling.to_document_x(separator_pixel_x);
        info!(
            page = page.number,
            separator_pixel_x, separator_document_x, "separator located"
        );

        // Snap the raster cut to the nearest whole column inside the image.
        let cut_column = (separator_pixel_x.round() as u32).clamp(1, pixel_width - 1);
        let (left_image, right_image) = split_image(page.number, &page.image, cut_column)?;

        let (left_fragments, right_fragments, warnings) =
            split_fragments(page, separator_document_x);

        let left = SplitPage {
            number: page.number,
            side: PageSide::Left,
            width: separator_document_x,
            height: page.height,
            image: left_image,
            fragments: left_fragments,
        };
        let right = SplitPage {
            number: page.number,
            side: PageSide::Right,
            width: page.width - separator_document_x,
            height: page.height,
            image: right_image,
            fragments: right_fragments,
        };

        Ok(PageSplit {
            left,
            right,
            warnings,
        })
    }

    /// Splits every double page of a document.
    ///
    /// Pages are processed independently (in parallel for larger documents)
    /// and a page failure is recorded without aborting the batch. The
    /// returned document is ordered by original page number, left page
    /// before right page.
    pub fn split_document(&self, pages: &[DoublePage]) -> BatchOutcome {
        let mut results: Vec<(u32, Result<PageSplit, SplitError>)> =
            if pages.len() > DEFAULT_PARALLEL_THRESHOLD {
                pages
                    .par_iter()
                    .map(|page| (page.number, self.split_page(page)))
                    .collect()
            } else {
                pages
                    .iter()
                    .map(|page| (page.number, self.split_page(page)))
                    .collect()
            };
        results.sort_by_key(|(number, _)| *number);

        let mut split_pages = Vec::with_capacity(results.len() * 2);
        let mut report = BatchReport::default();
        for (number, result) in results {
            match result {
                Ok(split) => {
                    report.succeeded.push(number);
                    report.warnings.extend(split.warnings);
                    split_pages.push(split.left);
                    split_pages.push(split.right);
                }
                Err(error) => {
                    warn!(page = number, %error, "page failed to split");
                    report.failed.push(PageFailure {
                        page: number,
                        error,
                    });
                }
            }
        }

        info!(
            total = report.total_pages(),
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            warnings = report.warnings.len(),
            "document split finished"
        );
        BatchOutcome {
            document: SplitDocument::new(split_pages),
            report,
        }
    }
}
