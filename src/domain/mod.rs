//! Domain types for the page-splitting pipeline.
//!
//! This module defines the data model flowing through the pipeline: the
//! scanned [`DoublePage`] inputs with their positioned [`TextFragment`]s, and
//! the [`SplitPage`] / [`SplitDocument`] outputs handed to downstream table
//! extraction.

mod page;

pub use page::{DoublePage, PageSide, SplitDocument, SplitPage, TextFragment};
