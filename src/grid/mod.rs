//! Uniform grid of range probes ("pylons").
//!
//! Probes sit at the centers of `step x step` cells. The grid is built once
//! per image geometry; each frame only overwrites the probe values. The
//! outermost ring of probes is a permanent border: it is never sampled, never
//! becomes a head and stops both flood fills, so interior probes can address
//! their four neighbors without bounds checks.

use crate::filter::PixelFilter;
use crate::image::ImageView;

mod eliminate;
mod group;
#[cfg(test)]
mod recursive_reference;

/// Smallest accepted probe spacing; smaller values are raised to this.
pub const MIN_PROBE_STEP: usize = 3;

/// Range assigned to border probes, which are never sampled.
pub const BORDER_RANGE: u8 = u8::MAX;

/// One sampling point of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe {
    img_x: usize,
    img_y: usize,
    is_border: bool,
    range: u8,
    is_head: bool,
    is_grouped: bool,
}

impl Probe {
    fn new(img_x: usize, img_y: usize, is_border: bool) -> Self {
        Self {
            img_x,
            img_y,
            is_border,
            range: BORDER_RANGE,
            is_head: !is_border,
            is_grouped: false,
        }
    }

    fn reset_at(&mut self, range: u8) {
        self.range = range;
        self.is_head = !self.is_border;
        self.is_grouped = false;
    }

    /// Whether `neighbor` proves that this probe is not a local minimum.
    ///
    /// A border never discards. A lower neighbor always does; an equal one
    /// only once it has itself been discarded, so a plateau of heads does not
    /// eliminate itself.
    pub(crate) fn is_discarded_by(&self, neighbor: &Probe) -> bool {
        if neighbor.is_border {
            return false;
        }
        neighbor.range < self.range || (neighbor.range == self.range && !neighbor.is_head)
    }

    fn kernel_inside(&self, radius: usize, width: usize, height: usize) -> bool {
        // img_x < width and img_y < height hold for every probe.
        self.img_x >= radius
            && radius < width - self.img_x
            && self.img_y >= radius
            && radius < height - self.img_y
    }

    /// Column of the probe in image coordinates.
    pub fn img_x(&self) -> usize {
        self.img_x
    }

    /// Row of the probe in image coordinates.
    pub fn img_y(&self) -> usize {
        self.img_y
    }

    /// Whether the probe belongs to the outermost grid ring.
    pub fn is_border(&self) -> bool {
        self.is_border
    }

    /// Filtered range sampled in the last reset.
    pub fn range(&self) -> u8 {
        self.range
    }

    /// Whether the probe is still a head candidate.
    pub fn is_head(&self) -> bool {
        self.is_head
    }

    /// Whether the grouping pass has consumed the probe.
    pub fn is_grouped(&self) -> bool {
        self.is_grouped
    }
}

/// Row-major grid of probes for one image geometry.
#[derive(Clone, Debug)]
pub struct ProbeGrid {
    width: usize,
    height: usize,
    step: usize,
    rows: usize,
    cols: usize,
    probes: Vec<Probe>,
}

impl ProbeGrid {
    /// Places probes over a `width x height` image every `step` pixels.
    ///
    /// `step` is raised to [`MIN_PROBE_STEP`] when smaller. The grid has
    /// `height / step` rows and `width / step` columns.
    pub fn new(width: usize, height: usize, step: usize) -> Self {
        let step = step.max(MIN_PROBE_STEP);
        let rows = height / step;
        let cols = width / step;
        let half = step / 2;

        let mut probes = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let is_border = row == 0 || row == rows - 1 || col == 0 || col == cols - 1;
                probes.push(Probe::new(col * step + half, row * step + half, is_border));
            }
        }

        Self {
            width,
            height,
            step,
            rows,
            cols,
            probes,
        }
    }

    /// Image width the grid was built for.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height the grid was built for.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Effective probe spacing after clamping.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of probe rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of probe columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All probes in row-major order.
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// Returns the probe at `(row, col)` if it exists.
    pub fn probe(&self, row: usize, col: usize) -> Option<&Probe> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.probes.get(self.index(row, col))
    }

    #[inline]
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Indices of the E, N, W and S neighbors of an interior probe.
    #[inline]
    pub(crate) fn neighbors(&self, index: usize) -> [usize; 4] {
        [index + 1, index - self.cols, index - 1, index + self.cols]
    }

    /// Row-major indices of the interior (non-border) probes.
    pub(crate) fn interior_indices(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.rows.saturating_sub(2) * self.cols.saturating_sub(2));
        for row in 1..self.rows.saturating_sub(1) {
            for col in 1..self.cols.saturating_sub(1) {
                out.push(self.index(row, col));
            }
        }
        out
    }

    /// Samples every interior probe from `image` and marks it as a head.
    ///
    /// Probes whose filter kernel would leave the image read the raw pixel
    /// instead. Border probes keep their sentinel state.
    ///
    /// # Panics
    ///
    /// Panics if `image` is smaller than the geometry the grid was built for.
    pub fn reset(&mut self, image: ImageView<'_, u8>, filter: &dyn PixelFilter) {
        let radius = filter.radius();
        let (width, height) = (image.width(), image.height());
        for idx in self.interior_indices() {
            let probe = &mut self.probes[idx];
            let range = if probe.kernel_inside(radius, width, height) {
                filter.calculate(image, probe.img_x, probe.img_y)
            } else {
                image.at(probe.img_x, probe.img_y)
            };
            probe.reset_at(range);
        }
    }
}
