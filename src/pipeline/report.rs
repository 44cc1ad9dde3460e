//! Batch reporting for document splitting.

use crate::core::SplitError;
use crate::processors::FragmentWarning;
use std::fmt;

/// A page that could not be split, with the error that stopped it.
#[derive(Debug)]
pub struct PageFailure {
    /// The number of the double page that failed.
    pub page: u32,
    /// The per-page error. Detection is deterministic, so re-running with
    /// the same configuration reproduces it.
    pub error: SplitError,
}

/// Summary of one batch run: which pages succeeded, which failed and why,
/// and any fragment-level warnings on pages that still succeeded.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Numbers of double pages split successfully, in output order.
    pub succeeded: Vec<u32>,
    /// Pages that failed, with their errors.
    pub failed: Vec<PageFailure>,
    /// Fragment warnings collected across all successful pages.
    pub warnings: Vec<FragmentWarning>,
}

impl BatchReport {
    /// Returns true if every page succeeded without warnings.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.warnings.is_empty()
    }

    /// Total number of double pages processed.
    pub fn total_pages(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "split {} double pages: {} succeeded, {} failed, {} fragment warnings",
            self.total_pages(),
            self.succeeded.len(),
            self.failed.len(),
            self.warnings.len()
        )?;
        for failure in &self.failed {
            writeln!(f, "  page {} failed: {}", failure.page, failure.error)?;
        }
        for warning in &self.warnings {
            writeln!(
                f,
                "  page {} fragment {}: {}",
                warning.page, warning.fragment_index, warning.detail
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_report() {
        let report = BatchReport {
            succeeded: vec![1, 2],
            ..Default::default()
        };
        assert!(report.is_clean());
        assert_eq!(report.total_pages(), 2);
    }

    #[test]
    fn display_lists_failures() {
        let report = BatchReport {
            succeeded: vec![1],
            failed: vec![PageFailure {
                page: 2,
                error: SplitError::SeparatorNotFound {
                    page: 2,
                    candidates: Vec::new(),
                },
            }],
            warnings: Vec::new(),
        };
        let text = report.to_string();
        assert!(text.contains("1 succeeded"));
        assert!(text.contains("page 2 failed"));
    }
}
