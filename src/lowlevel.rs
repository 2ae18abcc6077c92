//! Low-level access to the probe grid.
//!
//! These types let callers run the reset, tail discard and grouping passes
//! one at a time, e.g. to inspect probe states between passes or to draw
//! debug overlays. Most users should prefer [`crate::Detector`].

pub use crate::grid::{Probe, ProbeGrid, BORDER_RANGE, MIN_PROBE_STEP};
