//! # scansplit
//!
//! Double-page scan separation for table-extraction pipelines.
//!
//! A scanned ledger or book is often captured as one raster image holding two
//! facing physical pages. This crate detects the near-vertical line that
//! separates the two pages, then splits both the raster image and the
//! positioned text fragments (as produced by an upstream layout parser) into
//! two coordinate-consistent single-page datasets.
//!
//! ## Modules
//!
//! * [`core`] - Error handling, configuration, and shared constants
//! * [`domain`] - Input and output data model (pages, fragments, split results)
//! * [`processors`] - Line detection, separator location, and splitting algorithms
//! * [`pipeline`] - Batch orchestration over whole documents
//! * [`utils`] - Image loading and diagnostic visualization helpers

pub mod core;
pub mod domain;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    // Error handling
    pub use crate::core::{SplitConfig, SplitError};

    // Domain types
    pub use crate::domain::{DoublePage, PageSide, SplitDocument, SplitPage, TextFragment};

    // Pipeline (high-level API)
    pub use crate::pipeline::{BatchOutcome, BatchReport, PageFailure, PageSplit, PageSplitter};

    // Detection primitives
    pub use crate::processors::{FragmentWarning, HoughLine, PageScaling};

    // Image utilities
    pub use crate::utils::load_image;
}
