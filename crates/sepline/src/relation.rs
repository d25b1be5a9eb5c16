//! Symmetric "still connected" relation over point ids.
//!
//! Purpose
//! - Record, for every pair of points, whether some committed line already
//!   separates them. Starts complete, only ever loses pairs; `remaining()`
//!   reaching zero terminates the greedy loop.
//!
//! The relation is a flat boolean matrix indexed by stable point id; the
//! diagonal is never consulted. The live count is over *ordered* pairs, so
//! it starts at `n·(n−1)` and every disconnect subtracts 2.

use crate::points::PointId;

/// Complete-graph connectivity matrix with a live ordered-pair count.
#[derive(Clone, Debug)]
pub struct PairRelation {
    n: usize,
    connected: Vec<bool>,
    remaining: usize,
}

impl PairRelation {
    /// Fully-connected relation over `n` points.
    ///
    /// Panics if the constructed pair count differs from `n·(n−1)`: that is
    /// an internal consistency violation and continuing would mask a
    /// correctness bug, so the whole run aborts.
    pub fn complete(n: usize) -> Self {
        let mut connected = vec![false; n * n];
        let mut remaining = 0usize;
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    connected[i * n + j] = true;
                    remaining += 1;
                }
            }
        }
        assert_eq!(
            remaining,
            n * (n.saturating_sub(1)),
            "pair relation must start complete"
        );
        Self {
            n,
            connected,
            remaining,
        }
    }

    #[inline]
    fn idx(&self, a: PointId, b: PointId) -> usize {
        a.0 * self.n + b.0
    }

    /// Whether `a` and `b` are still unseparated. `a != b` expected.
    #[inline]
    pub fn is_connected(&self, a: PointId, b: PointId) -> bool {
        self.connected[self.idx(a, b)]
    }

    /// Clear both directions of the pair; no-op if already disconnected.
    pub fn disconnect(&mut self, a: PointId, b: PointId) {
        if self.connected[self.idx(a, b)] {
            let ab = self.idx(a, b);
            let ba = self.idx(b, a);
            self.connected[ab] = false;
            self.connected[ba] = false;
            self.remaining -= 2;
        }
    }

    /// Live count of connected ordered pairs. Never increases.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_counts_ordered_pairs() {
        assert_eq!(PairRelation::complete(0).remaining(), 0);
        assert_eq!(PairRelation::complete(1).remaining(), 0);
        assert_eq!(PairRelation::complete(2).remaining(), 2);
        assert_eq!(PairRelation::complete(5).remaining(), 20);
    }

    #[test]
    fn disconnect_is_symmetric_and_idempotent() {
        let mut rel = PairRelation::complete(3);
        let (a, b) = (PointId(0), PointId(2));
        assert!(rel.is_connected(a, b));
        rel.disconnect(a, b);
        assert!(!rel.is_connected(a, b));
        assert!(!rel.is_connected(b, a));
        assert_eq!(rel.remaining(), 4);
        // Second disconnect is a no-op.
        rel.disconnect(b, a);
        assert_eq!(rel.remaining(), 4);
    }

    #[test]
    fn drains_to_zero() {
        let mut rel = PairRelation::complete(3);
        for i in 0..3 {
            for j in (i + 1)..3 {
                rel.disconnect(PointId(i), PointId(j));
            }
        }
        assert_eq!(rel.remaining(), 0);
    }
}
