//! Histogram-based quantile filter for 8-bit samples.
//!
//! The kernel is a square of side `2 * radius + 1`. Only every `step`-th row
//! and column is sampled, which trades accuracy for speed on large radii. The
//! visited samples are counted into a 256-bucket histogram and the buckets are
//! scanned in ascending order until the running count exceeds the target
//! count `round(probed_area * quantile)`. Rounding is half-to-even, so the
//! median of an odd-sized kernel is its middle sample.
//!
//! Besides noise removal, quantiles away from 0.5 reshape the surface: low
//! quantiles grow near objects (heads become wider plateaus), high quantiles
//! shrink them.

use crate::filter::PixelFilter;
use crate::image::ImageView;
use crate::util::{PylonGridError, PylonGridResult};

const BUCKETS: usize = 256;

/// Order-statistic filter over a square, optionally subsampled neighborhood.
#[derive(Clone, Debug)]
pub struct QuantileFilter {
    radius: usize,
    quantile: f64,
    step: usize,
    probed_area: usize,
    target_count: usize,
}

/// Number of samples a kernel visits, or `None` if it does not fit in `usize`.
fn probed_area(radius: usize, step: usize) -> Option<usize> {
    let side = radius.checked_mul(2)?.checked_add(1)?;
    let per_axis = side.div_ceil(step);
    per_axis.checked_mul(per_axis)
}

pub(super) fn validate(radius: usize, quantile: f64, step: usize) -> PylonGridResult<()> {
    if !quantile.is_finite() || !(0.0..=1.0).contains(&quantile) {
        return Err(PylonGridError::InvalidFilterConfig {
            reason: "quantile must be within [0, 1]",
        });
    }
    if step == 0 {
        return Err(PylonGridError::InvalidFilterConfig {
            reason: "step must be at least 1",
        });
    }
    if probed_area(radius, step).is_none() {
        return Err(PylonGridError::InvalidFilterConfig {
            reason: "radius too large",
        });
    }
    Ok(())
}

impl QuantileFilter {
    /// Creates a filter; `quantile` must be in `[0, 1]` and `step >= 1`.
    pub fn new(radius: usize, quantile: f64, step: usize) -> PylonGridResult<Self> {
        validate(radius, quantile, step)?;
        let probed_area = probed_area(radius, step).ok_or(PylonGridError::InvalidFilterConfig {
            reason: "radius too large",
        })?;
        // A count equal to the area is never exceeded; quantile 1.0 means the maximum.
        let target_count = ((probed_area as f64 * quantile).round_ties_even() as usize)
            .min(probed_area - 1);
        Ok(Self {
            radius,
            quantile,
            step,
            probed_area,
            target_count,
        })
    }

    /// Creates a median filter with full sampling.
    pub fn median(radius: usize) -> Self {
        Self::new(radius, 0.5, 1).expect("median parameters are valid")
    }

    /// Number of samples visited per evaluation.
    pub fn probed_area(&self) -> usize {
        self.probed_area
    }

    /// Running count that the selected bucket must exceed.
    pub fn target_count(&self) -> usize {
        self.target_count
    }
}

impl PixelFilter for QuantileFilter {
    fn radius(&self) -> usize {
        self.radius
    }

    fn quantile(&self) -> f64 {
        self.quantile
    }

    fn step(&self) -> usize {
        self.step
    }

    /// # Panics
    ///
    /// Panics if the kernel centered at `(x, y)` leaves the image.
    fn calculate(&self, image: ImageView<'_, u8>, x: usize, y: usize) -> u8 {
        assert!(
            x >= self.radius && y >= self.radius,
            "kernel at ({x}, {y}) crosses the image origin"
        );
        let min_x = x - self.radius;
        let max_x = x + self.radius;
        let min_y = y - self.radius;
        let max_y = y + self.radius;

        let mut histogram = [0u32; BUCKETS];
        for ky in (min_y..=max_y).step_by(self.step) {
            let row = image.row(ky).expect("kernel row within image");
            for &value in row[min_x..=max_x].iter().step_by(self.step) {
                histogram[value as usize] += 1;
            }
        }

        let mut count = 0usize;
        for (value, &bucket) in histogram.iter().enumerate() {
            count += bucket as usize;
            if count > self.target_count {
                return value as u8;
            }
        }
        unreachable!(
            "histogram of {} samples never exceeded target {}",
            self.probed_area, self.target_count
        );
    }
}
