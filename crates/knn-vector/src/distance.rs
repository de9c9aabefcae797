//! Distance metrics for vector similarity.
//!
//! A metric maps two vectors of equal dimension to a dissimilarity score
//! where lower means more similar. Metrics are injected into an index at
//! build time, so any closure with the right shape is a metric:
//!
//! ```
//! use knn_vector::{DistanceMetric, Vector};
//!
//! let manhattan = |a: &Vector, b: &Vector| -> f64 {
//!     a.point.iter().zip(&b.point).map(|(x, y)| (x - y).abs()).sum()
//! };
//! let a = Vector::from_point(vec![0.0, 0.0]);
//! let b = Vector::from_point(vec![1.0, 2.0]);
//! assert_eq!(manhattan.distance(&a, &b), 3.0);
//! ```

use crate::vector::Vector;

/// Pluggable distance function.
///
/// Implementations must be pure: the same pair always yields the same
/// score. Dimension equality is a precondition; the index validates it
/// before calling the metric.
pub trait DistanceMetric: Send + Sync {
    /// Distance between `a` and `b` (lower = more similar).
    fn distance(&self, a: &Vector, b: &Vector) -> f64;
}

impl<F> DistanceMetric for F
where
    F: Fn(&Vector, &Vector) -> f64 + Send + Sync,
{
    #[inline]
    fn distance(&self, a: &Vector, b: &Vector) -> f64 {
        self(a, b)
    }
}

/// Cosine distance: `1 - (a · b) / (||a|| * ||b||)`.
///
/// - 0 = identical direction
/// - 1 = orthogonal
/// - 2 = opposite direction
///
/// Zero-magnitude inputs yield NaN. Rounding may push results slightly
/// outside `[0, 2]`; nothing is clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CosineMetric;

impl DistanceMetric for CosineMetric {
    #[inline]
    fn distance(&self, a: &Vector, b: &Vector) -> f64 {
        cosine_distance(&a.point, &b.point)
    }
}

/// Compute cosine distance between two coordinate slices.
///
/// Symmetric bit-for-bit: `cosine_distance(a, b) == cosine_distance(b, a)`.
///
/// # Example
///
/// ```
/// use knn_vector::cosine_distance;
///
/// assert!(cosine_distance(&[1.0, 2.0], &[1.0, 2.0]).abs() < 1e-12);
/// assert!((cosine_distance(&[1.0, 0.0], &[0.0, 1.0]) - 1.0).abs() < 1e-12);
/// assert!(cosine_distance(&[0.0, 0.0], &[1.0, 1.0]).is_nan());
/// ```
#[inline]
pub fn cosine_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");

    let (dot, norm_a, norm_b) = dot_and_norms(a, b);

    1.0 - dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Compute dot product and squared norms in a single pass.
///
/// Returns (dot, norm_a_squared, norm_b_squared)
#[inline]
fn dot_and_norms(a: &[f64], b: &[f64]) -> (f64, f64, f64) {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (&x, &y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    (dot, norm_a, norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_distance() {
        // Identical vectors = 0 distance
        let a = [1.0, 2.0, 3.0];
        assert!(cosine_distance(&a, &a).abs() < 1e-12);

        // Orthogonal vectors = 1 distance
        let b = [1.0, 0.0];
        let c = [0.0, 1.0];
        assert_eq!(cosine_distance(&b, &c), 1.0);

        // Opposite vectors = 2 distance
        let d = [1.0, 0.0];
        let e = [-1.0, 0.0];
        assert!((cosine_distance(&d, &e) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_ignores_magnitude() {
        let a = [1.0, 1.0];
        let b = [100.0, 100.0];
        assert!(cosine_distance(&a, &b).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_is_nan() {
        let zero = [0.0, 0.0, 0.0];
        let b = [1.0, 2.0, 3.0];
        assert!(cosine_distance(&zero, &b).is_nan());
        assert!(cosine_distance(&b, &zero).is_nan());
        assert!(cosine_distance(&zero, &zero).is_nan());
    }

    #[test]
    fn test_symmetric_exact() {
        let a = [0.3, -1.7, 2.2, 1e6];
        let b = [-4.1, 0.01, 7.5, -3.0];
        assert_eq!(cosine_distance(&a, &b), cosine_distance(&b, &a));
    }

    #[test]
    fn test_metric_trait() {
        let a = Vector::new("a", vec![1.0, 0.0]);
        let b = Vector::new("b", vec![0.0, 1.0]);
        assert_eq!(CosineMetric.distance(&a, &b), 1.0);

        let constant = |_: &Vector, _: &Vector| 42.0_f64;
        assert_eq!(constant.distance(&a, &b), 42.0);

        fn first_coord(a: &Vector, b: &Vector) -> f64 {
            (a.point[0] - b.point[0]).abs()
        }
        assert_eq!(first_coord.distance(&a, &b), 1.0);
    }

    #[test]
    fn test_high_dimensional() {
        // 768 dimensions (common embedding size)
        let a: Vec<f64> = (0..768).map(|i| (i as f64).sin()).collect();
        let b: Vec<f64> = a.iter().map(|x| -x).collect();
        assert!((cosine_distance(&a, &b) - 2.0).abs() < 1e-9);
    }
}
