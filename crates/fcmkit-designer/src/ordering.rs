//! Path ordering
//!
//! Greedy nearest-neighbour tour over the paths of a piece. Paths are first
//! sorted by the y of their start point, then each step picks the remaining
//! path whose start is closest to where the tool lifted off. Vertical travel
//! is weighted so the tool finishes a row before moving down.

use fcmkit_core::Point;

use crate::model::Path;

/// Default weight on vertical displacement
pub const DEFAULT_Y_WEIGHT: f64 = 10.0;

/// Anisotropic travel distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelMetric {
    pub y_weight: f64,
}

impl Default for TravelMetric {
    fn default() -> Self {
        Self {
            y_weight: DEFAULT_Y_WEIGHT,
        }
    }
}

impl TravelMetric {
    pub fn new(y_weight: f64) -> Self {
        Self { y_weight }
    }

    /// `sqrt(dx^2 + (y_weight * dy)^2)`
    pub fn distance(&self, from: Point, to: Point) -> f64 {
        let dx = (to.x - from.x) as f64;
        let dy = (to.y - from.y) as f64 * self.y_weight;
        (dx * dx + dy * dy).sqrt()
    }

    /// Weighted travel between consecutive paths
    pub fn tour_length(&self, paths: &[Path]) -> f64 {
        paths
            .windows(2)
            .map(|pair| self.distance(pair[0].end_point(), pair[1].start))
            .sum()
    }
}

/// Reorders `paths` into a travel-minimizing tour.
///
/// Every input path appears exactly once. Ties go to the candidate that
/// comes first in start-y order, so the result is deterministic.
pub fn order_paths(mut paths: Vec<Path>, metric: TravelMetric) -> Vec<Path> {
    paths.sort_by_key(|path| path.start.y);

    let mut remaining = paths.into_iter();
    let Some(first) = remaining.next() else {
        return Vec::new();
    };
    let mut remaining: Vec<Path> = remaining.collect();

    let mut ordered = Vec::with_capacity(remaining.len() + 1);
    let mut position = first.end_point();
    ordered.push(first);

    while !remaining.is_empty() {
        let mut best_index = 0;
        let mut best_score = f64::MAX;

        for (index, candidate) in remaining.iter().enumerate() {
            let score = metric.distance(position, candidate.start);
            if score < best_score {
                best_score = score;
                best_index = index;
            }
        }

        let next = remaining.remove(best_index);
        position = next.end_point();
        ordered.push(next);
    }

    ordered
}
