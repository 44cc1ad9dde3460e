//! End-to-end tests of the double-page splitting pipeline on synthetic
//! scans: a white raster with a dark vertical rule at the page boundary,
//! plus text fragments placed in document space.

use image::{Rgb, RgbImage};
use scansplit::prelude::*;

/// Builds a white double-page raster with a 3px dark vertical rule at
/// `line_x`.
fn scan_with_separator(width: u32, height: u32, line_x: u32) -> RgbImage {
    let mut image = RgbImage::from_pixel(width, height, Rgb([250, 250, 250]));
    for y in 0..height {
        for x in line_x - 1..=line_x + 1 {
            image.put_pixel(x, y, Rgb([25, 25, 25]));
        }
    }
    image
}

fn double_page(number: u32, image: RgbImage, doc_width: f32, doc_height: f32) -> DoublePage {
    DoublePage {
        number,
        width: doc_width,
        height: doc_height,
        image,
        fragments: Vec::new(),
    }
}

/// A 2000x1400 scan with the separator at pixel x=1000 and a 4:1 scale on
/// both axes: the separator must map to document x=250, a fragment at x=100
/// stays left unchanged, and a fragment at x=300 moves right re-based to 50.
#[test]
fn separator_maps_to_document_space_and_fragments_rebase() {
    let mut page = double_page(1, scan_with_separator(2000, 1400, 1000), 500.0, 350.0);
    page.fragments = vec![
        TextFragment::new(100.0, 40.0, 30.0, 10.0, "left side"),
        TextFragment::new(300.0, 40.0, 30.0, 10.0, "right side"),
    ];

    let splitter = PageSplitter::new(SplitConfig::default()).unwrap();
    let split = splitter.split_page(&page).unwrap();

    // Separator at pixel 1000 / scale 4 = document 250, within the width of
    // the drawn rule.
    assert!(
        (split.left.width - 250.0).abs() < 1.5,
        "left width {} not near 250",
        split.left.width
    );
    assert!((split.left.width + split.right.width - 500.0).abs() < 1e-3);
    assert_eq!(split.left.height, 350.0);
    assert_eq!(split.right.height, 350.0);

    // Raster conservation: widths sum exactly, heights unchanged.
    assert_eq!(split.left.image.width() + split.right.image.width(), 2000);
    assert_eq!(split.left.image.height(), 1400);
    assert_eq!(split.right.image.height(), 1400);

    // Fragment partition and re-basing.
    assert_eq!(split.left.fragments.len(), 1);
    assert_eq!(split.left.fragments[0].text, "left side");
    assert_eq!(split.left.fragments[0].x, 100.0);

    assert_eq!(split.right.fragments.len(), 1);
    assert_eq!(split.right.fragments[0].text, "right side");
    assert!(
        (split.right.fragments[0].x - 50.0).abs() < 1.5,
        "rebased x {} not near 50",
        split.right.fragments[0].x
    );
    // new_x + separator_document_x == original_x
    assert!((split.right.fragments[0].x + split.left.width - 300.0).abs() < 1e-3);

    assert!(split.warnings.is_empty());
    assert_eq!(split.left.id(), "1-left");
    assert_eq!(split.right.id(), "1-right");
}

/// A page without any qualifying vertical line fails with
/// `SeparatorNotFound` while the rest of the batch is still processed.
#[test]
fn page_without_separator_fails_alone() {
    let config = SplitConfig {
        min_column_width: 200,
        ..Default::default()
    };
    let pages = vec![
        double_page(1, scan_with_separator(700, 500, 350), 350.0, 250.0),
        double_page(2, RgbImage::from_pixel(700, 500, Rgb([250, 250, 250])), 350.0, 250.0),
        double_page(3, scan_with_separator(700, 500, 340), 350.0, 250.0),
    ];

    let splitter = PageSplitter::new(config).unwrap();
    let outcome = splitter.split_document(&pages);

    assert_eq!(outcome.report.succeeded, vec![1, 3]);
    assert_eq!(outcome.report.failed.len(), 1);
    let failure = &outcome.report.failed[0];
    assert_eq!(failure.page, 2);
    assert!(matches!(
        failure.error,
        SplitError::SeparatorNotFound { page: 2, .. }
    ));

    // The surviving pages appear in order, left before right.
    let ids: Vec<String> = outcome.document.iter().map(|p| p.id()).collect();
    assert_eq!(ids, ["1-left", "1-right", "3-left", "3-right"]);
}

/// Invalid document geometry is fatal for that page only.
#[test]
fn invalid_geometry_is_reported_per_page() {
    let config = SplitConfig {
        min_column_width: 200,
        ..Default::default()
    };
    let pages = vec![
        double_page(1, scan_with_separator(700, 500, 350), 350.0, 250.0),
        double_page(2, scan_with_separator(700, 500, 350), 0.0, 250.0),
    ];

    let splitter = PageSplitter::new(config).unwrap();
    let outcome = splitter.split_document(&pages);

    assert_eq!(outcome.report.succeeded, vec![1]);
    assert!(matches!(
        outcome.report.failed[0].error,
        SplitError::InvalidPageGeometry { page: 2, .. }
    ));
    assert_eq!(outcome.document.len(), 2);
}

/// Splitting the same input twice yields identical separators and
/// partitions.
#[test]
fn pipeline_is_deterministic() {
    let config = SplitConfig {
        min_column_width: 200,
        ..Default::default()
    };
    let mut page = double_page(5, scan_with_separator(700, 500, 360), 350.0, 250.0);
    page.fragments = (0..20)
        .map(|i| TextFragment::new(i as f32 * 17.0, 10.0, 8.0, 4.0, format!("w{i}")))
        .collect();

    let splitter = PageSplitter::new(config).unwrap();
    let first = splitter.split_page(&page).unwrap();
    let second = splitter.split_page(&page).unwrap();

    assert_eq!(first.left.width, second.left.width);
    assert_eq!(first.left.fragments, second.left.fragments);
    assert_eq!(first.right.fragments, second.right.fragments);
    assert_eq!(first.left.image, second.left.image);
}

/// Documents above the parallel threshold still come back ordered by page
/// number, left before right.
#[test]
fn parallel_batch_preserves_output_order() {
    let config = SplitConfig {
        min_column_width: 200,
        ..Default::default()
    };
    // Feed pages out of order; six pages exceeds the parallel threshold.
    let pages: Vec<DoublePage> = [6u32, 2, 4, 1, 5, 3]
        .into_iter()
        .map(|n| double_page(n, scan_with_separator(700, 500, 350), 350.0, 250.0))
        .collect();

    let splitter = PageSplitter::new(config).unwrap();
    let outcome = splitter.split_document(&pages);

    assert!(outcome.report.failed.is_empty());
    let ids: Vec<String> = outcome.document.iter().map(|p| p.id()).collect();
    assert_eq!(
        ids,
        [
            "1-left", "1-right", "2-left", "2-right", "3-left", "3-right", "4-left", "4-right",
            "5-left", "5-right", "6-left", "6-right"
        ]
    );
}

/// With a diagnostics directory set, a line overlay is written per page.
#[test]
fn diagnostics_overlay_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let config = SplitConfig {
        min_column_width: 200,
        ..Default::default()
    };
    let page = double_page(3, scan_with_separator(700, 500, 350), 350.0, 250.0);

    let splitter = PageSplitter::new(config)
        .unwrap()
        .with_diagnostics_dir(dir.path());
    splitter.split_page(&page).unwrap();

    assert!(dir.path().join("page-3-lines.png").exists());
}

/// Fragment partition over a batch stays complete: no fragment is lost or
/// duplicated by splitting.
#[test]
fn fragment_partition_is_lossless() {
    let config = SplitConfig {
        min_column_width: 200,
        ..Default::default()
    };
    let mut page = double_page(1, scan_with_separator(700, 500, 350), 350.0, 250.0);
    page.fragments = (0..40)
        .map(|i| TextFragment::new((i * 8) as f32 + 3.0, (i % 7) as f32 * 30.0, 6.0, 4.0, format!("t{i}")))
        .collect();
    let original_texts: Vec<String> = page.fragments.iter().map(|f| f.text.clone()).collect();

    let splitter = PageSplitter::new(config).unwrap();
    let split = splitter.split_page(&page).unwrap();

    let mut seen: Vec<String> = split
        .left
        .fragments
        .iter()
        .chain(split.right.fragments.iter())
        .map(|f| f.text.clone())
        .collect();
    seen.sort();
    let mut expected = original_texts;
    expected.sort();
    assert_eq!(seen, expected);
}
