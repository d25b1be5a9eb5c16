//! Axis-parallel lines and the candidate generator.
//!
//! Purpose
//! - Produce the fixed candidate pool for one instance: a vertical bisector
//!   between every x-adjacent pair, then a horizontal bisector between every
//!   y-adjacent pair. Every adjacent pair thus owns exactly one candidate,
//!   which is what guarantees the greedy loop can always make progress.
//!
//! Candidate coordinates are fixed for the instance's lifetime; committing a
//! line never moves another. Generation order (vertical ascending, then
//! horizontal ascending) is the tie-break order of the selector, so it must
//! stay reproducible.

use std::fmt;

use crate::points::PointSet;

/// Line orientation: vertical (fixed x) or horizontal (fixed y).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    V,
    H,
}

/// An axis-parallel line at a fixed coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub axis: Axis,
    pub coord: f64,
}

impl Line {
    #[inline]
    pub fn vertical(coord: f64) -> Self {
        Self {
            axis: Axis::V,
            coord,
        }
    }

    #[inline]
    pub fn horizontal(coord: f64) -> Self {
        Self {
            axis: Axis::H,
            coord,
        }
    }
}

/// External rendering: axis marker plus the coordinate with one decimal.
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.axis {
            Axis::V => 'v',
            Axis::H => 'h',
        };
        write!(f, "{} {:.1}", marker, self.coord)
    }
}

/// Generate the `2(n−1)` candidate bisectors for a point set (none for n ≤ 1).
///
/// If two adjacent points share a coordinate on the relevant axis the
/// candidate coincides with both points; that is accepted as-is, and the
/// ≤-is-left scoring policy means such a line cannot separate the pair.
pub fn candidate_lines(ps: &PointSet) -> Vec<Line> {
    let n = ps.len();
    if n <= 1 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(2 * (n - 1));
    for i in 0..n - 1 {
        let mid = (ps.nth_by_x(i).x as f64 + ps.nth_by_x(i + 1).x as f64) / 2.0;
        out.push(Line::vertical(mid));
    }
    for i in 0..n - 1 {
        let mid = (ps.nth_by_y(i).y as f64 + ps.nth_by_y(i + 1).y as f64) / 2.0;
        out.push(Line::horizontal(mid));
    }
    out
}
