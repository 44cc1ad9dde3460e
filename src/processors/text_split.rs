//! Partitioning text fragments at the separator.
//!
//! The partition is half-open on the fragment origin: a fragment belongs to
//! the left page iff its x-coordinate is strictly less than the separator's
//! document-space x, otherwise to the right page. Right-side fragments are
//! re-based by subtracting the separator x; y-coordinates are untouched.
//! Every input fragment lands in exactly one output sequence, and relative
//! order within each side is preserved.

use crate::domain::{DoublePage, TextFragment};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A non-fatal finding about a single text fragment.
///
/// Emitted when a fragment's bounding box falls outside its page's declared
/// document bounds. The fragment is still assigned to the side nearer to its
/// bounding-box center rather than dropped, to avoid silent data loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentWarning {
    /// The double page the fragment belongs to.
    pub page: u32,
    /// Index of the fragment in the page's original fragment sequence.
    pub fragment_index: usize,
    /// A message describing the finding.
    pub detail: String,
}

/// Partitions a page's fragments into left and right sequences at the given
/// document-space separator position.
///
/// # Returns
///
/// `(left, right, warnings)`: the two re-based fragment sequences, plus a
/// warning per fragment whose bounding box lies outside the page bounds.
pub fn split_fragments(
    page: &DoublePage,
    separator_x: f32,
) -> (Vec<TextFragment>, Vec<TextFragment>, Vec<FragmentWarning>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut warnings = Vec::new();

    for (index, fragment) in page.fragments.iter().enumerate() {
        let out_of_bounds = fragment.x < 0.0
            || fragment.y < 0.0
            || fragment.x + fragment.width > page.width
            || fragment.y + fragment.height > page.height;

        let goes_left = if out_of_bounds {
            let detail = format!(
                "fragment at ({}, {}) size {}x{} outside page bounds {}x{}",
                fragment.x, fragment.y, fragment.width, fragment.height, page.width, page.height
            );
            warn!(page = page.number, index, %detail, "fragment out of bounds");
            warnings.push(FragmentWarning {
                page: page.number,
                fragment_index: index,
                detail,
            });
            // Defensive nearer-side assignment by bounding-box center.
            fragment.center_x() < separator_x
        } else {
            fragment.x < separator_x
        };

        if goes_left {
            left.push(fragment.clone());
        } else {
            let mut rebased = fragment.clone();
            rebased.x -= separator_x;
            right.push(rebased);
        }
    }

    (left, right, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn page_with(fragments: Vec<TextFragment>) -> DoublePage {
        DoublePage {
            number: 4,
            width: 500.0,
            height: 350.0,
            image: RgbImage::new(8, 8),
            fragments,
        }
    }

    #[test]
    fn partition_is_complete_and_disjoint() {
        let page = page_with(vec![
            TextFragment::new(100.0, 10.0, 40.0, 8.0, "a"),
            TextFragment::new(300.0, 10.0, 40.0, 8.0, "b"),
            TextFragment::new(40.0, 20.0, 40.0, 8.0, "c"),
            TextFragment::new(420.0, 20.0, 40.0, 8.0, "d"),
        ]);
        let (left, right, warnings) = split_fragments(&page, 250.0);

        assert_eq!(left.len() + right.len(), page.fragments.len());
        assert!(warnings.is_empty());
        assert!(left.iter().all(|f| ["a", "c"].contains(&f.text.as_str())));
        assert!(right.iter().all(|f| ["b", "d"].contains(&f.text.as_str())));
    }

    #[test]
    fn boundary_is_half_open_left_inclusive_below() {
        let page = page_with(vec![
            TextFragment::new(249.9, 0.0, 1.0, 1.0, "just-left"),
            TextFragment::new(250.1, 0.0, 1.0, 1.0, "just-right"),
            TextFragment::new(250.0, 0.0, 1.0, 1.0, "exactly-on"),
        ]);
        let (left, right, _) = split_fragments(&page, 250.0);

        assert_eq!(left.len(), 1);
        assert_eq!(left[0].text, "just-left");
        assert_eq!(right.len(), 2);
        // A fragment exactly on the separator goes right.
        assert!(right.iter().any(|f| f.text == "exactly-on"));
    }

    #[test]
    fn right_fragments_are_rebased_left_unchanged() {
        let page = page_with(vec![
            TextFragment::new(100.0, 30.0, 40.0, 8.0, "left"),
            TextFragment::new(300.0, 60.0, 40.0, 8.0, "right"),
        ]);
        let (left, right, _) = split_fragments(&page, 250.0);

        assert_eq!(left[0].x, 100.0);
        assert_eq!(left[0].y, 30.0);
        assert!((right[0].x - 50.0).abs() < 1e-4);
        // y and size are unchanged by splitting.
        assert_eq!(right[0].y, 60.0);
        assert_eq!(right[0].width, 40.0);
    }

    #[test]
    fn relative_order_is_preserved_per_side() {
        let page = page_with(vec![
            TextFragment::new(10.0, 0.0, 5.0, 5.0, "l1"),
            TextFragment::new(400.0, 0.0, 5.0, 5.0, "r1"),
            TextFragment::new(20.0, 10.0, 5.0, 5.0, "l2"),
            TextFragment::new(300.0, 10.0, 5.0, 5.0, "r2"),
        ]);
        let (left, right, _) = split_fragments(&page, 250.0);

        let left_texts: Vec<_> = left.iter().map(|f| f.text.as_str()).collect();
        let right_texts: Vec<_> = right.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(left_texts, ["l1", "l2"]);
        assert_eq!(right_texts, ["r1", "r2"]);
    }

    #[test]
    fn out_of_bounds_fragment_warns_and_goes_to_nearer_side() {
        // Origin is left of the separator but the box hangs past the page
        // edge; the center (at x=530) is nearer the right side.
        let page = page_with(vec![TextFragment::new(240.0, 0.0, 580.0, 8.0, "wide")]);
        let (left, right, warnings) = split_fragments(&page, 250.0);

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].fragment_index, 0);
        assert!(left.is_empty());
        assert_eq!(right.len(), 1);
    }

    #[test]
    fn attributes_are_carried_through_unchanged() {
        let mut fragment = TextFragment::new(300.0, 0.0, 10.0, 5.0, "styled");
        fragment
            .attributes
            .insert("font".to_string(), "Garamond".to_string());
        let page = page_with(vec![fragment]);

        let (_, right, _) = split_fragments(&page, 250.0);
        assert_eq!(right[0].attributes.get("font").unwrap(), "Garamond");
    }
}
