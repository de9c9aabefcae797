//! Exact k-nearest-neighbor search over an immutable vector snapshot.
//!
//! This crate provides:
//!
//! - **Vector**: identifier, opaque payload, `f64` coordinates
//! - **DistanceMetric**: pluggable dissimilarity function (closures work too)
//! - **CosineMetric**: `1 - cosine similarity`
//! - **NearestNeighborIndex trait**: the "k closest vectors" capability
//! - **BruteForceIndex**: exhaustive scan with bounded top-k selection
//! - **TopK**: the fixed-capacity max-heap behind the scan
//!
//! # Architecture
//!
//! ```text
//! Vec<Vector> + metric ──build()──▶ BruteForceIndex (immutable)
//!                                        │
//!                          search(k, target), any thread
//!                                        ▼
//!                      scan n vectors ─▶ TopK (cap k) ─▶ nearest-first
//! ```
//!
//! Construction validates once. Searches are stateless, allocate their own
//! heap and never write to the index, so `&BruteForceIndex` can be shared
//! across threads without locking.
//!
//! # Example
//!
//! ```
//! use knn_vector::{BruteForceIndex, CosineMetric, NearestNeighborIndex, Vector};
//!
//! let index = BruteForceIndex::new(
//!     vec![
//!         Vector::new("east", vec![1.0, 0.0]),
//!         Vector::new("north", vec![0.0, 1.0]),
//!         Vector::new("west", vec![-1.0, 0.0]),
//!     ],
//!     CosineMetric,
//! )
//! .unwrap();
//!
//! let results = index.search(2, &Vector::from_point(vec![1.0, 0.1])).unwrap();
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].id, "east");
//! assert_eq!(results[1].id, "north");
//! ```

mod brute;
mod config;
mod distance;
mod error;
mod topk;
mod traits;
mod vector;

pub use brute::{BruteForceIndex, BruteForceIndexBuilder};
pub use config::IndexConfig;
pub use distance::{cosine_distance, CosineMetric, DistanceMetric};
pub use error::{BuildError, KnnError, QueryError, Result};
pub use topk::TopK;
pub use traits::{NearestNeighborIndex, Neighbor};
pub use vector::{Payload, Vector};
