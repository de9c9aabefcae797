//! Reference results by exhaustive sort.

use knn_vector::{DistanceMetric, Vector};
use std::cmp::Ordering;

/// Absolute tolerance used when comparing distances.
pub const DISTANCE_TOLERANCE: f64 = 1e-9;

/// The `min(k, n)` nearest vectors by sorting every distance.
///
/// Returns `(position in vectors, distance)` pairs. Sorting is stable, NaN
/// distances go last, and equal distances keep input order, so the result
/// should match a correct top-k selection exactly.
pub fn reference_knn(
    vectors: &[Vector],
    metric: &dyn DistanceMetric,
    k: usize,
    target: &Vector,
) -> Vec<(usize, f64)> {
    let mut all: Vec<(usize, f64)> = vectors
        .iter()
        .enumerate()
        .map(|(i, v)| (i, metric.distance(target, v)))
        .collect();

    all.sort_by(|a, b| match (a.1.is_nan(), b.1.is_nan()) {
        (false, false) => a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    });
    all.truncate(k);
    all
}

/// True if `distances` never decrease by more than `DISTANCE_TOLERANCE`.
///
/// NaNs are ignored.
pub fn is_non_decreasing(distances: &[f64]) -> bool {
    let finite: Vec<f64> = distances.iter().copied().filter(|d| !d.is_nan()).collect();
    finite
        .windows(2)
        .all(|w| w[1] >= w[0] - DISTANCE_TOLERANCE)
}
