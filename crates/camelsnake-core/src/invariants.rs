//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::config::ScanState;

impl ScanState {
    /// A word can only start at or before the character being scanned.
    pub(crate) fn assert_boundary_not_ahead(&self, index: usize) {
        debug_assert!(
            self.prev_boundary <= index,
            "ScanState: boundary {} is ahead of char index {index}",
            self.prev_boundary
        );
    }
}
