//! Tail discard: removes probes that are not local range minima.
//!
//! A probe that has a discarding neighbor (see [`Probe::is_discarded_by`]),
//! or that was reached from a discarded neighbor, stops being a head. The
//! discard then spreads to every neighbor that does not itself discard the
//! probe, skipping the one it came from. The spread runs on an explicit stack
//! in the same depth-first order as a recursion over E, N, W, S, so large
//! grids cannot exhaust the call stack.
//!
//! `is_head` only ever goes from true to false, so the result is a fixed
//! point: running the pass again changes nothing.

use super::{Probe, ProbeGrid};

#[derive(Clone, Copy, Debug)]
struct Visit {
    index: usize,
    from: Option<usize>,
}

impl ProbeGrid {
    /// Discards every interior probe that is not a local range minimum.
    ///
    /// Returns the number of probes that stopped being heads.
    pub fn discard_tails(&mut self) -> usize {
        let mut stack = Vec::new();
        let mut discarded = 0;
        for index in self.interior_indices() {
            stack.push(Visit { index, from: None });
            discarded += self.spread_discard(&mut stack);
        }
        discarded
    }

    fn spread_discard(&mut self, stack: &mut Vec<Visit>) -> usize {
        let mut discarded = 0;
        while let Some(Visit { index, from }) = stack.pop() {
            let current: Probe = self.probes[index];
            // Borders are never heads, so every probe past this point is interior.
            if !current.is_head {
                continue;
            }

            let neighbors = self.neighbors(index);
            let accounted = neighbors
                .map(|n| from == Some(n) || current.is_discarded_by(&self.probes[n]));
            if !accounted.contains(&true) {
                continue;
            }

            self.probes[index].is_head = false;
            discarded += 1;
            // Pushed in reverse so the east branch is explored first.
            for (&neighbor, &done) in neighbors.iter().zip(accounted.iter()).rev() {
                if !done {
                    stack.push(Visit {
                        index: neighbor,
                        from: Some(index),
                    });
                }
            }
        }
        discarded
    }
}
