//! Page and text-fragment types.

use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A positioned piece of text in document space, as produced by an upstream
/// layout parser.
///
/// Coordinates are in the document coordinate system of the owning page,
/// which generally differs in scale from the raster pixel coordinate system.
/// Style attributes are carried through splitting unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// X-coordinate of the fragment origin, in document space.
    pub x: f32,
    /// Y-coordinate of the fragment origin, in document space.
    pub y: f32,
    /// Width of the fragment bounding box, in document space.
    pub width: f32,
    /// Height of the fragment bounding box, in document space.
    pub height: f32,
    /// The literal text content.
    pub text: String,
    /// Optional style attributes (font, size, ...), passed through unchanged.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl TextFragment {
    /// Creates a fragment with the given bounding box and text and no
    /// style attributes.
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// The x-coordinate of the horizontal center of the bounding box.
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// One scanned double page: a raster image holding two facing physical pages,
/// plus the positioned text fragments parsed from it.
///
/// Produced once by the upstream parser and treated as a read-only input.
/// The document-space dimensions are declared by the source layout and are
/// independent of the raster resolution.
#[derive(Debug, Clone)]
pub struct DoublePage {
    /// Page number in source order. Unique and monotonic across a document.
    pub number: u32,
    /// Document-space width declared by the source layout.
    pub width: f32,
    /// Document-space height declared by the source layout.
    pub height: f32,
    /// The decoded raster image of the scan.
    pub image: RgbImage,
    /// Text fragments in source order, positioned in document space.
    pub fragments: Vec<TextFragment>,
}

impl DoublePage {
    /// Width of the raster image, in pixels.
    pub fn pixel_width(&self) -> u32 {
        self.image.width()
    }

    /// Height of the raster image, in pixels.
    pub fn pixel_height(&self) -> u32 {
        self.image.height()
    }
}

/// Which side of the separator a split page came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSide {
    /// The left physical page, keeping the original coordinate origin.
    Left,
    /// The right physical page, re-based to the separator position.
    Right,
}

impl fmt::Display for PageSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSide::Left => write!(f, "left"),
            PageSide::Right => write!(f, "right"),
        }
    }
}

/// One physical page derived from a [`DoublePage`].
///
/// Holds the sub-image on its side of the separator and the text fragments
/// re-based to the page-local origin: left pages keep their coordinates,
/// right pages have the separator's document-space x subtracted from every
/// fragment x.
#[derive(Debug, Clone)]
pub struct SplitPage {
    /// The number of the double page this side was cut from.
    pub number: u32,
    /// Which side of the separator this page covers.
    pub side: PageSide,
    /// Document-space width of this single page.
    pub width: f32,
    /// Document-space height (unchanged by splitting).
    pub height: f32,
    /// The raster sub-image for this side.
    pub image: RgbImage,
    /// Re-based text fragments, preserving their original relative order.
    pub fragments: Vec<TextFragment>,
}

impl SplitPage {
    /// A stable identifier derived from the originating page number and the
    /// side, e.g. `"3-left"`.
    pub fn id(&self) -> String {
        format!("{}-{}", self.number, self.side)
    }
}

/// The ordered collection of all split pages across a document.
///
/// Pages are ordered first by originating double-page number, then left
/// before right. This is the sole artifact handed to downstream table
/// extraction; the input double pages stay untouched.
#[derive(Debug, Clone, Default)]
pub struct SplitDocument {
    pages: Vec<SplitPage>,
}

impl SplitDocument {
    /// Creates a split document from pages already in output order.
    pub(crate) fn new(pages: Vec<SplitPage>) -> Self {
        Self { pages }
    }

    /// The split pages, ordered by double-page number and side.
    pub fn pages(&self) -> &[SplitPage] {
        &self.pages
    }

    /// Number of split pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns true if no page was split successfully.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterates over the split pages in output order.
    pub fn iter(&self) -> std::slice::Iter<'_, SplitPage> {
        self.pages.iter()
    }

    /// Consumes the document, yielding the ordered pages.
    pub fn into_pages(self) -> Vec<SplitPage> {
        self.pages
    }
}

impl IntoIterator for SplitDocument {
    type Item = SplitPage;
    type IntoIter = std::vec::IntoIter<SplitPage>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

impl<'a> IntoIterator for &'a SplitDocument {
    type Item = &'a SplitPage;
    type IntoIter = std::slice::Iter<'a, SplitPage>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_page_id_combines_number_and_side() {
        let page = SplitPage {
            number: 7,
            side: PageSide::Right,
            width: 250.0,
            height: 350.0,
            image: RgbImage::new(4, 4),
            fragments: Vec::new(),
        };
        assert_eq!(page.id(), "7-right");
    }

    #[test]
    fn fragment_center_x() {
        let fragment = TextFragment::new(10.0, 0.0, 20.0, 5.0, "x");
        assert_eq!(fragment.center_x(), 20.0);
    }

    #[test]
    fn page_side_ordering_is_left_before_right() {
        assert!(PageSide::Left < PageSide::Right);
    }
}
