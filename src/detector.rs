//! Head detector: probe grid reset, tail discard and grouping per frame.

use std::fmt;
use std::sync::Arc;

use crate::filter::{FilterConfig, PassThroughFilter, PixelFilter};
use crate::grid::{ProbeGrid, MIN_PROBE_STEP};
use crate::head::Head;
use crate::image::ImageView;
use crate::trace::{trace_debug, trace_event, trace_span};
use crate::util::{PylonGridError, PylonGridResult};

/// Anything that turns a range image into a list of heads.
pub trait HeadDetector {
    /// Detects the heads visible in `image`.
    fn detect_heads(&mut self, image: ImageView<'_, u8>) -> PylonGridResult<Vec<Head>>;
}

/// Detector configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectorConfig {
    /// Pixels between neighboring probes; values below
    /// [`MIN_PROBE_STEP`] are raised to it.
    pub step: usize,
    /// Quantile filter applied around each probe; `None` reads raw pixels.
    pub filter: Option<FilterConfig>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            step: 5,
            filter: None,
        }
    }
}

impl DetectorConfig {
    /// Validates the filter parameters, if any.
    pub fn validate(&self) -> PylonGridResult<()> {
        match &self.filter {
            Some(filter) => filter.validate(),
            None => Ok(()),
        }
    }

    /// Probe spacing actually used by the grid.
    pub fn effective_step(&self) -> usize {
        self.step.max(MIN_PROBE_STEP)
    }
}

/// Range-minimum head detector bound to one image geometry.
///
/// The probe grid is reused across frames; only the probe values change.
/// A detector must not be shared between threads while detecting, but clones
/// are independent and can run in parallel.
#[derive(Clone)]
pub struct Detector {
    grid: ProbeGrid,
    filter: Arc<dyn PixelFilter>,
}

impl fmt::Debug for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Detector")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("step", &self.grid.step())
            .field("filter_radius", &self.filter.radius())
            .field("filter_quantile", &self.filter.quantile())
            .field("filter_step", &self.filter.step())
            .finish()
    }
}

impl Detector {
    /// Builds a detector for `width x height` range images.
    pub fn new(width: usize, height: usize, config: DetectorConfig) -> PylonGridResult<Self> {
        config.validate()?;
        let filter: Arc<dyn PixelFilter> = match config.filter {
            Some(filter) => Arc::new(filter.build()?),
            None => Arc::new(PassThroughFilter),
        };
        Self::from_parts(width, height, config.step, filter)
    }

    /// Builds a detector with a caller-supplied filter.
    pub fn with_filter<F>(width: usize, height: usize, step: usize, filter: F) -> PylonGridResult<Self>
    where
        F: PixelFilter + 'static,
    {
        Self::from_parts(width, height, step, Arc::new(filter))
    }

    fn from_parts(
        width: usize,
        height: usize,
        step: usize,
        filter: Arc<dyn PixelFilter>,
    ) -> PylonGridResult<Self> {
        if width == 0 || height == 0 {
            return Err(PylonGridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            grid: ProbeGrid::new(width, height, step),
            filter,
        })
    }

    /// Probe grid with the states left by the last detection.
    pub fn grid(&self) -> &ProbeGrid {
        &self.grid
    }

    /// Filter used to sample the probes.
    pub fn filter(&self) -> &dyn PixelFilter {
        self.filter.as_ref()
    }

    /// Detects the heads in one frame.
    ///
    /// The frame must have the geometry the detector was built for. Heads are
    /// returned in row-major order of their first probe.
    pub fn detect(&mut self, image: ImageView<'_, u8>) -> PylonGridResult<Vec<Head>> {
        let grid = &mut self.grid;
        if image.width() != grid.width() || image.height() != grid.height() {
            return Err(PylonGridError::GeometryMismatch {
                expected_width: grid.width(),
                expected_height: grid.height(),
                width: image.width(),
                height: image.height(),
            });
        }

        let _span = trace_span!(
            "detect",
            rows = grid.rows(),
            cols = grid.cols(),
            step = grid.step()
        )
        .entered();

        grid.reset(image, self.filter.as_ref());
        let discarded = grid.discard_tails();
        trace_debug!("discard_tails", discarded = discarded);
        let heads = grid.group_heads();
        trace_event!("heads", count = heads.len());
        Ok(heads)
    }

    /// Runs the detector over a sequence of frames.
    pub fn detect_frames(
        &mut self,
        frames: &[ImageView<'_, u8>],
    ) -> PylonGridResult<Vec<Vec<Head>>> {
        frames.iter().map(|frame| self.detect(*frame)).collect()
    }
}

impl HeadDetector for Detector {
    fn detect_heads(&mut self, image: ImageView<'_, u8>) -> PylonGridResult<Vec<Head>> {
        self.detect(image)
    }
}

/// Detects heads in many frames in parallel, one detector clone per worker.
///
/// Produces the same output as [`Detector::detect_frames`].
#[cfg(feature = "rayon")]
pub fn par_detect_frames(
    detector: &Detector,
    frames: &[ImageView<'_, u8>],
) -> PylonGridResult<Vec<Vec<Head>>> {
    use rayon::prelude::*;

    frames
        .par_iter()
        .map_init(|| detector.clone(), |local, frame| local.detect(*frame))
        .collect()
}
