//! Greedy separation of 2D point sets by axis-parallel lines.
//!
//! Purpose
//! - Given a bounded set of integer points, compute an ordered sequence of
//!   vertical/horizontal lines such that every pair of points ends up on
//!   opposite sides of at least one line, no line passes through a point
//!   (distinct coordinates assumed), and the sequence is built greedily:
//!   each step commits the candidate line that disconnects the most
//!   still-connected pairs.
//!
//! Design
//! - One instance at a time, fully synchronous: `PointSet`, `PairRelation`,
//!   and the candidate pool are owned per run and dropped at the end.
//! - The result is greedy, not exact-optimal; determinism is guaranteed by a
//!   fixed candidate generation order and an earliest-candidate tie-break.

pub mod greedy;
pub mod lines;
pub mod points;
pub mod rand;
pub mod relation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use greedy::{separate, Separator};
pub use lines::{candidate_lines, Axis, Line};
pub use points::{Point, PointId, PointSet, MAX_POINTS};
pub use relation::PairRelation;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::greedy::{separate, Separator};
    pub use crate::lines::{candidate_lines, Axis, Line};
    pub use crate::points::{Point, PointId, PointSet, MAX_POINTS};
    pub use crate::rand::{draw_instance, InstanceCfg, PointCount, ReplayToken};
    pub use crate::relation::PairRelation;
}
