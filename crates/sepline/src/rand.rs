//! Random instances with replay tokens.
//!
//! Purpose
//! - Provide a small, deterministic sampler for separation instances used by
//!   tests, benches, and the `gen` subcommand. Draws are reproducible and
//!   indexable via a `(seed, index)` replay token.
//!
//! Model
//! - Sample `n` distinct x-coordinates and `n` distinct y-coordinates in the
//!   configured range, pair them up, and sort ascending by x so the result
//!   matches the instance-file contract. Distinct per-axis coordinates keep
//!   every candidate line strictly between its two points.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Instance sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct InstanceCfg {
    pub count: PointCount,
    /// Inclusive coordinate range for both axes.
    pub coord_min: i64,
    pub coord_max: i64,
}

impl Default for InstanceCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(20),
            coord_min: 0,
            coord_max: 999,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random instance: `n` points, distinct x and distinct y, sorted
/// ascending by x. `None` when the coordinate span cannot host `n` distinct
/// values.
pub fn draw_instance(cfg: InstanceCfg, tok: ReplayToken) -> Option<Vec<(i64, i64)>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let span = cfg.coord_max.checked_sub(cfg.coord_min)?.checked_add(1)?;
    if span < n as i64 {
        return None;
    }
    let xs = draw_distinct(&mut rng, cfg.coord_min, cfg.coord_max, n);
    let ys = draw_distinct(&mut rng, cfg.coord_min, cfg.coord_max, n);
    let mut pts: Vec<(i64, i64)> = xs.into_iter().zip(ys).collect();
    pts.sort_unstable_by_key(|&(x, _)| x);
    Some(pts)
}

fn draw_distinct<R: Rng>(rng: &mut R, min: i64, max: i64, n: usize) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(n);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let v = rng.gen_range(min..=max);
        if seen.insert(v) {
            out.push(v);
        }
    }
    out
}
