//! Pixel filters used to denoise each probe sample.
//!
//! A probe reads its range through a [`PixelFilter`]. Two implementations are
//! provided: [`PassThroughFilter`] returns the raw sample, [`QuantileFilter`]
//! returns an order statistic (median by default) of a square neighborhood.

use crate::image::ImageView;
use crate::util::PylonGridResult;

mod quantile;

pub use quantile::QuantileFilter;

/// Order-statistic filter evaluated at a single pixel.
pub trait PixelFilter: Send + Sync {
    /// Half side of the square kernel; the kernel side is `2 * radius + 1`.
    fn radius(&self) -> usize;

    /// Quantile selected from the kernel samples, in `[0, 1]`.
    fn quantile(&self) -> f64;

    /// Sampling stride inside the kernel.
    fn step(&self) -> usize;

    /// Filters the kernel centered at `(x, y)`.
    ///
    /// The caller guarantees that the whole kernel lies inside `image`;
    /// implementations may panic otherwise.
    fn calculate(&self, image: ImageView<'_, u8>, x: usize, y: usize) -> u8;
}

/// Identity filter: returns the sample under the probe unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassThroughFilter;

impl PixelFilter for PassThroughFilter {
    fn radius(&self) -> usize {
        1
    }

    fn quantile(&self) -> f64 {
        0.5
    }

    fn step(&self) -> usize {
        1
    }

    #[inline]
    fn calculate(&self, image: ImageView<'_, u8>, x: usize, y: usize) -> u8 {
        image.at(x, y)
    }
}

/// Parameters of a [`QuantileFilter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterConfig {
    /// Half side of the square kernel.
    pub radius: usize,
    /// Quantile in `[0, 1]`; 0.5 selects the median.
    pub quantile: f64,
    /// Sample every `step`-th row and column of the kernel (at least 1).
    pub step: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            radius: 1,
            quantile: 0.5,
            step: 1,
        }
    }
}

impl FilterConfig {
    /// Checks the parameters without building the filter.
    pub fn validate(&self) -> PylonGridResult<()> {
        quantile::validate(self.radius, self.quantile, self.step)
    }

    /// Builds the histogram filter described by this configuration.
    pub fn build(&self) -> PylonGridResult<QuantileFilter> {
        QuantileFilter::new(self.radius, self.quantile, self.step)
    }
}
