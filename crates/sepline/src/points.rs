//! Input point sets and their two access orderings.
//!
//! Purpose
//! - Own one instance's points and expose them sorted by x and by y. Ids are
//!   assigned from input order and index the pairwise relation.
//!
//! Notes
//! - Input files are pre-sorted by x, so the x-ordering is input order.
//! - The y-ordering uses a stable sort; equal-y points keep input order.

/// Fixed upper bound on points per instance (and on the batch index range).
pub const MAX_POINTS: usize = 100;

/// Stable point identity, equal to the point's input order index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointId(pub usize);

/// A 2D input point. Never mutated after load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub id: PointId,
    pub x: i64,
    pub y: i64,
}

/// One instance's points plus the x- and y-orderings.
///
/// Invariants:
/// - `points[i].id == PointId(i)`.
/// - `by_x` and `by_y` are permutations of `0..len()`, ascending on the
///   respective coordinate (`by_x` is input order; input is x-sorted).
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    points: Vec<Point>,
    by_x: Vec<usize>,
    by_y: Vec<usize>,
}

impl PointSet {
    /// Build from raw `(x, y)` pairs already sorted ascending by x.
    pub fn from_sorted_by_x(coords: &[(i64, i64)]) -> Self {
        let points: Vec<Point> = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point {
                id: PointId(i),
                x,
                y,
            })
            .collect();
        let by_x: Vec<usize> = (0..points.len()).collect();
        let mut by_y = by_x.clone();
        // Stable: equal-y points keep input (x) order.
        by_y.sort_by_key(|&i| points[i].y);
        Self { points, by_x, by_y }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn point(&self, id: PointId) -> &Point {
        &self.points[id.0]
    }

    /// The point at rank `i` in ascending-x order.
    #[inline]
    pub fn nth_by_x(&self, i: usize) -> &Point {
        &self.points[self.by_x[i]]
    }

    /// The point at rank `i` in ascending-y order.
    #[inline]
    pub fn nth_by_y(&self, i: usize) -> &Point {
        &self.points[self.by_y[i]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_input_order() {
        let ps = PointSet::from_sorted_by_x(&[(0, 7), (3, 1), (9, 4)]);
        assert_eq!(ps.len(), 3);
        for i in 0..3 {
            assert_eq!(ps.nth_by_x(i).id, PointId(i));
        }
    }

    #[test]
    fn y_order_sorts_and_is_stable() {
        let ps = PointSet::from_sorted_by_x(&[(0, 5), (2, 1), (4, 5), (6, 0)]);
        let ys: Vec<i64> = (0..4).map(|i| ps.nth_by_y(i).y).collect();
        assert_eq!(ys, vec![0, 1, 5, 5]);
        // The two y=5 points keep input order: id 0 before id 2.
        assert_eq!(ps.nth_by_y(2).id, PointId(0));
        assert_eq!(ps.nth_by_y(3).id, PointId(2));
    }

    #[test]
    fn empty_set() {
        let ps = PointSet::from_sorted_by_x(&[]);
        assert!(ps.is_empty());
    }
}
