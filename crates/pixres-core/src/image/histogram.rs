//! Sample value histograms

use super::Image;

impl Image {
    /// Histogram of sample values over all pixels and channels.
    pub fn gray_histogram(&self) -> [u32; 256] {
        let mut hist = [0u32; 256];
        for &v in self.data() {
            hist[v as usize] += 1;
        }
        hist
    }

    /// Number of distinct sample values present in the image.
    pub fn count_levels(&self) -> usize {
        self.gray_histogram().iter().filter(|&&n| n > 0).count()
    }
}
