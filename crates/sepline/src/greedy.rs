//! Greedy selector: score candidates, commit the best, repeat.
//!
//! Purpose
//! - Drive the separation to completion: while any pair is still connected,
//!   score every live candidate by the number of connected pairs it would
//!   disconnect ("links to break"), commit the maximum, and update the
//!   relation. Ties go to the earliest-generated candidate, which makes the
//!   output a fixed, reproducible sequence.
//!
//! Scoring policy
//! - A point whose coordinate equals the line's coordinate counts as
//!   left/below. The boundary is the last in-order point not exceeding the
//!   line; if no point lies strictly beyond the line there is no split point
//!   and the candidate scores 0. Altering this policy changes which lines
//!   get selected and how many are emitted.
//!
//! Cost
//! - O(n) boundary search and O(n²) pair scan per candidate, per iteration.
//!   With the fixed input bound this is the accepted dominant cost.

use crate::lines::{candidate_lines, Axis, Line};
use crate::points::{Point, PointSet};
use crate::relation::PairRelation;

/// One instance's separation state: relation, candidate pool, committed lines.
#[derive(Clone, Debug)]
pub struct Separator<'a> {
    points: &'a PointSet,
    relation: PairRelation,
    candidates: Vec<Line>,
    live: Vec<bool>,
    committed: Vec<Line>,
}

impl<'a> Separator<'a> {
    /// Fully-connected relation plus the complete candidate pool, all live.
    pub fn new(points: &'a PointSet) -> Self {
        let relation = PairRelation::complete(points.len());
        let candidates = candidate_lines(points);
        let live = vec![true; candidates.len()];
        Self {
            points,
            relation,
            candidates,
            live,
            committed: Vec::new(),
        }
    }

    /// Live count of connected ordered pairs.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.relation.remaining()
    }

    #[inline]
    fn nth_on_axis(&self, axis: Axis, i: usize) -> &Point {
        match axis {
            Axis::V => self.points.nth_by_x(i),
            Axis::H => self.points.nth_by_y(i),
        }
    }

    #[inline]
    fn coord_on_axis(p: &Point, axis: Axis) -> f64 {
        match axis {
            Axis::V => p.x as f64,
            Axis::H => p.y as f64,
        }
    }

    /// Rank (in the line's axis ordering) of the last point not exceeding the
    /// line's coordinate, or `None` if the line splits nothing: either the
    /// first point already lies beyond it, or no point does.
    fn boundary(&self, line: &Line) -> Option<usize> {
        for i in 0..self.points.len() {
            let coord = Self::coord_on_axis(self.nth_on_axis(line.axis, i), line.axis);
            if coord > line.coord {
                return i.checked_sub(1);
            }
        }
        None
    }

    /// Number of still-connected pairs the line would disconnect.
    fn links_to_break(&self, line: &Line) -> usize {
        let Some(k) = self.boundary(line) else {
            return 0;
        };
        let mut links = 0;
        for i in 0..=k {
            let p = self.nth_on_axis(line.axis, i);
            for j in k + 1..self.points.len() {
                let q = self.nth_on_axis(line.axis, j);
                if self.relation.is_connected(p.id, q.id) {
                    links += 1;
                }
            }
        }
        links
    }

    /// Commit candidate `idx`: append it to the result, retire it, and
    /// disconnect every pair it splits.
    pub(crate) fn commit(&mut self, idx: usize) {
        let line = self.candidates[idx];
        self.live[idx] = false;
        self.committed.push(line);
        let Some(k) = self.boundary(&line) else {
            return;
        };
        for i in 0..=k {
            let p = self.nth_on_axis(line.axis, i).id;
            for j in k + 1..self.points.len() {
                let q = self.nth_on_axis(line.axis, j).id;
                self.relation.disconnect(p, q);
            }
        }
    }

    /// Index of the live candidate with the strictly greatest score, ties to
    /// the earliest generation index.
    pub(crate) fn best_candidate(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (idx, line) in self.candidates.iter().enumerate() {
            if !self.live[idx] {
                continue;
            }
            let score = self.links_to_break(line);
            let better = match best {
                None => true,
                Some((_, top)) => score > top,
            };
            if better {
                best = Some((idx, score));
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Run the commit loop to termination and return the lines in
    /// commitment order.
    ///
    /// Panics if connected pairs remain with no live candidate left: the
    /// pre-generated bisector between each adjacent pair rules that out, so
    /// hitting it means the candidate pool was corrupted.
    pub fn run(mut self) -> Vec<Line> {
        while self.relation.remaining() > 0 {
            match self.best_candidate() {
                Some(idx) => self.commit(idx),
                None => panic!("connected pairs remain but no live candidate"),
            }
        }
        self.committed
    }
}

/// One-shot separation of a point set.
pub fn separate(points: &PointSet) -> Vec<Line> {
    Separator::new(points).run()
}
