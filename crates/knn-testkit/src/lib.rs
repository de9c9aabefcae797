//! Test and benchmark tooling for knn-vector.
//!
//! This crate provides:
//! - Property-based test generators (proptest strategies)
//! - Seeded workload generators for benchmarks
//! - A full-sort reference oracle to check search results against
//! - Tracing setup for tests
//!
//! # Usage
//!
//! ```
//! use knn_testkit::{random_vectors, reference_knn};
//! use knn_vector::{BruteForceIndex, CosineMetric, NearestNeighborIndex};
//!
//! let vectors = random_vectors(7, 50, 16);
//! let target = vectors[0].clone();
//! let index = BruteForceIndex::new(vectors.clone(), CosineMetric).unwrap();
//!
//! let found = index.search(5, &target).unwrap();
//! let expected = reference_knn(&vectors, &CosineMetric, 5, &target);
//! assert_eq!(found.len(), expected.len());
//! ```

pub mod generators;
pub mod oracle;

pub use generators::{arb_point, arb_vector, arb_vectors, random_vectors, COORD_RANGE};
pub use oracle::{is_non_decreasing, reference_knn, DISTANCE_TOLERANCE};

/// Install a `tracing` subscriber honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
