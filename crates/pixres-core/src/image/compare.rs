//! Image comparison
//!
//! Exact equality plus a small difference summary used by the regression
//! harness when two images disagree.

use super::Image;

/// Summary of the differences between two same-sized images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDiff {
    /// Number of samples that differ
    pub differing_samples: usize,
    /// Largest absolute sample difference
    pub max_abs_diff: u8,
}

impl Image {
    /// Check that two images have the same geometry and identical samples.
    pub fn equals(&self, other: &Image) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }

    /// Compare samples of two images with equal geometry.
    ///
    /// Returns `None` if width, height, channels or depth differ.
    pub fn diff(&self, other: &Image) -> Option<ImageDiff> {
        if !self.sizes_equal(other) {
            return None;
        }
        let mut differing_samples = 0;
        let mut max_abs_diff = 0u8;
        for (&a, &b) in self.data().iter().zip(other.data()) {
            let d = a.abs_diff(b);
            if d != 0 {
                differing_samples += 1;
                max_abs_diff = max_abs_diff.max(d);
            }
        }
        Some(ImageDiff {
            differing_samples,
            max_abs_diff,
        })
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Image {}
