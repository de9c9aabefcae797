//! Vector generators.
//!
//! Provides proptest strategies for:
//! - Single points and vectors of a fixed dimension
//! - Non-empty collections sharing one dimension
//!
//! and a seeded generator for benchmark workloads.

use knn_vector::Vector;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Coordinate range used by all generators.
pub const COORD_RANGE: Range<f64> = -1e6..1e6;

/// Strategy for a point of exactly `dims` coordinates.
pub fn arb_point(dims: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(COORD_RANGE, dims)
}

/// Strategy for an anonymous vector of exactly `dims` coordinates.
pub fn arb_vector(dims: usize) -> impl Strategy<Value = Vector> {
    arb_point(dims).prop_map(Vector::from_point)
}

/// Strategy for a non-empty collection of vectors sharing one dimension.
///
/// Vectors are named `v0`, `v1`, ... in order and carry their position as
/// a little-endian payload.
pub fn arb_vectors(
    dims: Range<usize>,
    len: Range<usize>,
) -> impl Strategy<Value = Vec<Vector>> {
    let len = len.start.max(1)..len.end.max(2);
    dims.prop_flat_map(move |d| prop::collection::vec(arb_point(d), len.clone()))
        .prop_map(|points| {
            points
                .into_iter()
                .enumerate()
                .map(|(i, point)| {
                    Vector::with_payload(format!("v{}", i), (i as u64).to_le_bytes().to_vec(), point)
                })
                .collect()
        })
}

/// Generate `n` vectors of `dims` coordinates from a fixed seed.
pub fn random_vectors(seed: u64, n: usize, dims: usize) -> Vec<Vector> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let point = (0..dims).map(|_| rng.gen_range(COORD_RANGE)).collect();
            Vector::new(format!("vec{}", i), point)
        })
        .collect()
}
