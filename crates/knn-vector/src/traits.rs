//! Core traits for nearest-neighbor indices.
//!
//! The `NearestNeighborIndex` trait is the single capability callers depend
//! on. `BruteForceIndex` is the exact implementation; approximate indices
//! can implement the same trait without callers changing.

use crate::error::QueryError;
use crate::vector::Vector;

/// A stored vector paired with its distance to the query target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a> {
    /// The stored vector.
    pub vector: &'a Vector,
    /// Distance to the target (lower = more similar, may be NaN).
    pub distance: f64,
}

impl<'a> Neighbor<'a> {
    /// Identifier of the stored vector.
    pub fn id(&self) -> &'a str {
        &self.vector.id
    }
}

/// Common interface for nearest-neighbor indices.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; searches take `&self` and may run
/// concurrently.
pub trait NearestNeighborIndex: Send + Sync {
    /// Return the `min(k, len())` stored vectors closest to `target`,
    /// sorted by distance (ascending).
    ///
    /// `k == 0` yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target dimension doesn't match the index dimension
    /// - The target contains invalid values, when the index rejects them
    fn search(&self, k: usize, target: &Vector) -> Result<Vec<&Vector>, QueryError>;

    /// Get the number of vectors in the index.
    fn len(&self) -> usize;

    /// Check if the index is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the dimension of vectors in this index.
    fn dimensions(&self) -> usize;
}
