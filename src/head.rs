//! Head detections produced by the grouping pass.

use std::fmt;

/// A head found in the range image.
///
/// The center is the integer centroid of the probes that formed the head; its
/// accuracy is bounded by the probe spacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Head {
    /// Range of the head from the reference plane.
    pub range: u8,
    /// Column of the head center in image coordinates.
    pub center_x: usize,
    /// Row of the head center in image coordinates.
    pub center_y: usize,
}

impl fmt::Display for Head {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Head(range={}, center=({}, {}))",
            self.range, self.center_x, self.center_y
        )
    }
}
