//! Row-range partitioning for parallel rendering.
//!
//! Divides the image into contiguous bands of whole rows, one per worker.
//! Bands are disjoint and together cover every row exactly once, so each
//! worker can write its band of the output buffer without coordination.

use rand::RngCore;

use crate::renderer::{color_to_rgb, render_pixel, RenderConfig};
use crate::{Camera, Hittable};

/// A contiguous band of image rows `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    /// First row (inclusive)
    pub start: u32,
    /// Last row (exclusive)
    pub end: u32,
    /// Index of the worker that owns this band
    pub index: usize,
}

impl RowRange {
    /// Create a new row range.
    pub fn new(start: u32, end: u32, index: usize) -> Self {
        Self { start, end, index }
    }

    /// Number of rows in the band.
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `height` rows into exactly `workers` contiguous bands.
///
/// Every band gets `height / workers` rows and the first
/// `height % workers` bands take one extra, so sizes differ by at most one.
/// When there are more workers than rows the trailing bands are empty.
pub fn partition_rows(height: u32, workers: usize) -> Vec<RowRange> {
    if workers == 0 {
        return Vec::new();
    }

    let base = height as usize / workers;
    let extra = height as usize % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0u32;
    for index in 0..workers {
        let rows = (base + usize::from(index < extra)) as u32;
        ranges.push(RowRange::new(start, start + rows, index));
        start += rows;
    }

    ranges
}

/// Render every pixel of a band into `rows`.
///
/// `rows` is the band's slice of the RGB output buffer: `range.len()` rows
/// of `camera.image_width * 3` bytes, starting at row `range.start`.
pub fn render_rows(
    range: &RowRange,
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
    rows: &mut [u8],
) {
    let row_stride = camera.image_width as usize * 3;

    for (y, row) in (range.start..range.end).zip(rows.chunks_exact_mut(row_stride)) {
        for (x, pixel) in (0..camera.image_width).zip(row.chunks_exact_mut(3)) {
            let color = render_pixel(camera, world, x, y, config, rng);
            pixel.copy_from_slice(&color_to_rgb(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scene;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_covers(ranges: &[RowRange], height: u32) {
        let mut next = 0;
        for (i, range) in ranges.iter().enumerate() {
            assert_eq!(range.index, i);
            assert_eq!(range.start, next);
            assert!(range.start <= range.end);
            next = range.end;
        }
        assert_eq!(next, height);
    }

    #[test]
    fn test_partition_exact_fit() {
        let ranges = partition_rows(1080, 8);
        assert_eq!(ranges.len(), 8);
        assert!(ranges.iter().all(|r| r.len() == 135));
        assert_covers(&ranges, 1080);
    }

    #[test]
    fn test_partition_remainder_spread() {
        let ranges = partition_rows(225, 8);
        assert_eq!(ranges.len(), 8);

        let sizes: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![29, 28, 28, 28, 28, 28, 28, 28]);
        assert_covers(&ranges, 225);
    }

    #[test]
    fn test_partition_more_workers_than_rows() {
        let ranges = partition_rows(3, 8);
        assert_eq!(ranges.len(), 8);

        assert_eq!(ranges.iter().filter(|r| r.len() == 1).count(), 3);
        assert!(ranges[3..].iter().all(|r| r.is_empty()));
        assert_covers(&ranges, 3);
    }

    #[test]
    fn test_partition_single_worker() {
        let ranges = partition_rows(17, 1);
        assert_eq!(ranges, vec![RowRange::new(0, 17, 0)]);
    }

    #[test]
    fn test_partition_zero_workers() {
        assert!(partition_rows(10, 0).is_empty());
    }

    #[test]
    fn test_render_rows_fills_band() {
        let world = Scene::new();
        let mut camera = Camera::new(4, 6).with_quality(1, 2);
        camera.initialize();
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        let range = RowRange::new(2, 4, 1);
        let mut rows = vec![0u8; range.len() * 4 * 3];
        render_rows(&range, &camera, &world, &config, &mut rng, &mut rows);

        // Empty scene: every pixel is sky, whose blue channel is saturated
        assert!(rows.chunks(3).all(|px| px[2] == 255));
    }
}
