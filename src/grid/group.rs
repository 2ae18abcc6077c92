//! Grouping of surviving head probes into head detections.
//!
//! Head probes that touch through an edge (4-connectivity) form one head.
//! Diagonal contact does not join groups.

use super::{Probe, ProbeGrid};
use crate::head::Head;

/// Running accumulator for one connected group of head probes.
#[derive(Clone, Copy, Debug, Default)]
struct ProbeGroup {
    sum_x: usize,
    sum_y: usize,
    count: usize,
    range: u8,
}

impl ProbeGroup {
    fn register(&mut self, probe: &mut Probe) {
        probe.is_grouped = true;
        self.count += 1;
        // last registered probe wins
        self.range = probe.range;
        self.sum_x += probe.img_x;
        self.sum_y += probe.img_y;
    }

    fn to_head(self) -> Option<Head> {
        if self.count == 0 {
            return None;
        }
        Some(Head {
            range: self.range,
            center_x: self.sum_x / self.count,
            center_y: self.sum_y / self.count,
        })
    }
}

impl ProbeGrid {
    /// Merges 4-connected head probes into one [`Head`] per group.
    ///
    /// Heads are ordered by the row-major position of the first probe of each
    /// group. Call after [`ProbeGrid::discard_tails`].
    pub fn group_heads(&mut self) -> Vec<Head> {
        let mut heads = Vec::new();
        let mut stack = Vec::new();
        let cols = self.cols;
        for start in self.interior_indices() {
            let mut group = ProbeGroup::default();
            stack.push(start);
            while let Some(index) = stack.pop() {
                let probe = &mut self.probes[index];
                if !probe.is_head || probe.is_grouped {
                    continue;
                }
                group.register(probe);
                // Visit order N, S, W, E.
                stack.extend([index + 1, index - 1, index + cols, index - cols]);
            }
            if let Some(head) = group.to_head() {
                heads.push(head);
            }
        }
        heads
    }
}
