// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fills a grid of escape counts, one per pixel, by mapping each
//! pixel onto the viewport and running the escape-time map on it.
//! Every pixel is independent of every other, so the threaded version
//! simply hands each worker its own band of rows.

use itertools::iproduct;
use std::panic;
use std::time::Instant;

use escape::evaluate;
use viewport::Viewport;

/// A width x height grid of iteration counts, addressed by (x, y)
/// with y growing downward.  Stored row by row.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationGrid {
    width: usize,
    height: usize,
    counts: Vec<u8>,
}

impl IterationGrid {
    /// A grid of the given size with every count at zero.
    pub fn new(width: usize, height: usize) -> Self {
        IterationGrid {
            width,
            height,
            counts: vec![0 as u8; width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of cells.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if the grid has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The count at column x, row y.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.counts[self.offset(x, y)]
    }

    /// Stores the count at column x, row y.
    pub fn set(&mut self, x: usize, y: usize, count: u8) {
        let offset = self.offset(x, y);
        self.counts[offset] = count;
    }

    /// How many cells hold each iteration count.
    pub fn histogram(&self) -> [usize; 256] {
        let mut histogram = [0 as usize; 256];
        for &count in &self.counts {
            histogram[count as usize] += 1;
        }
        histogram
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) outside the grid", x, y);
        y * self.width + x
    }
}

/// The single-threaded renderer.  The height comes from the viewport's
/// aspect ratio; the viewport itself is left untouched.
pub fn render(viewport: &Viewport, width: usize) -> IterationGrid {
    let started = Instant::now();
    let height = viewport.height_from_aspect(width);
    let mut grid = IterationGrid::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        grid.set(x, y, evaluate(viewport.pixel_to_plane(x, y, width, height)));
    }
    debug!("rendered {}x{} in {:?}", width, height, started.elapsed());
    grid
}

/// Fills one band of rows, starting at `top`, into `band`.
fn render_band(viewport: &Viewport, band: &mut [u8], top: usize, width: usize, height: usize) {
    for (i, count) in band.iter_mut().enumerate() {
        let (x, y) = (i % width, top + i / width);
        *count = evaluate(viewport.pixel_to_plane(x, y, width, height));
    }
}

/// A multi-threaded version of `render`.  The rows are cut into one
/// contiguous band per thread; the result is identical to the
/// single-threaded grid.
pub fn render_threaded(viewport: &Viewport, width: usize, threads: usize) -> IterationGrid {
    let started = Instant::now();
    let height = viewport.height_from_aspect(width);
    let mut grid = IterationGrid::new(width, height);
    if grid.is_empty() {
        return grid;
    }

    let threads = threads.max(1).min(height);
    let rows_per_band = (height + threads - 1) / threads;
    let outcome = crossbeam::scope(|spawner| {
        for (i, band) in grid.counts.chunks_mut(rows_per_band * width).enumerate() {
            spawner.spawn(move |_| {
                render_band(viewport, band, i * rows_per_band, width, height);
            });
        }
    });
    if let Err(cause) = outcome {
        panic::resume_unwind(cause);
    }
    debug!(
        "rendered {}x{} on {} threads in {:?}",
        width,
        height,
        threads,
        started.elapsed()
    );
    grid
}
