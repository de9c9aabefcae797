//! Brute force vector index.
//!
//! Exhaustive scan with bounded top-k selection. Built once from a vector
//! snapshot and never mutated afterwards.

use crate::config::IndexConfig;
use crate::distance::DistanceMetric;
use crate::error::{BuildError, QueryError};
use crate::topk::TopK;
use crate::traits::{NearestNeighborIndex, Neighbor};
use crate::vector::Vector;
use std::fmt;
use std::sync::Arc;

/// Brute force vector index.
///
/// Owns an immutable snapshot of vectors and a bound distance metric. Every
/// search computes the distance from the target to each stored vector and
/// keeps the best `k` in a bounded max-heap.
///
/// # Use Cases
///
/// - Small to medium collections where exact results matter
/// - Baseline for benchmarking approximate indices
/// - Reference results in tests
///
/// # Performance
///
/// - Build: O(n) validation, no precomputation
/// - Search: O(n * d) metric evaluations + O(n log k) selection
///
/// # Thread Safety
///
/// Nothing is mutated after construction, so `&BruteForceIndex` may be
/// searched from any number of threads without locking.
pub struct BruteForceIndex {
    /// Stored vectors, in input order
    vectors: Vec<Vector>,
    /// Common point length of all stored vectors
    dimensions: usize,
    /// Distance metric to use
    metric: Arc<dyn DistanceMetric>,
    config: IndexConfig,
}

impl BruteForceIndex {
    /// Start building an index.
    ///
    /// # Example
    ///
    /// ```
    /// use knn_vector::{BruteForceIndex, CosineMetric, IndexConfig, Vector};
    ///
    /// let index = BruteForceIndex::builder()
    ///     .vector(Vector::new("a", vec![1.0, 0.0]))
    ///     .vector(Vector::new("b", vec![0.0, 1.0]))
    ///     .metric(CosineMetric)
    ///     .config(IndexConfig::new().with_reject_non_finite(true))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(index.vectors().len(), 2);
    /// ```
    pub fn builder() -> BruteForceIndexBuilder {
        BruteForceIndexBuilder::default()
    }

    /// Build an index from `vectors` using `metric` and the default config.
    ///
    /// # Errors
    ///
    /// - [`BuildError::EmptyInput`] if `vectors` is empty
    /// - [`BuildError::DimensionMismatch`] if point lengths differ
    pub fn new<M>(vectors: Vec<Vector>, metric: M) -> Result<Self, BuildError>
    where
        M: DistanceMetric + 'static,
    {
        Self::builder().vectors(vectors).metric(metric).build()
    }

    /// Stored vectors, in input order.
    pub fn vectors(&self) -> &[Vector] {
        &self.vectors
    }

    /// The bound distance metric.
    pub fn metric(&self) -> &dyn DistanceMetric {
        self.metric.as_ref()
    }

    /// Get the index configuration.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Search, returning each result with its distance to `target`.
    ///
    /// Results are ordered nearest-first. Equal distances keep input order;
    /// NaN distances sort after all others.
    pub fn search_with_distances(
        &self,
        k: usize,
        target: &Vector,
    ) -> Result<Vec<Neighbor<'_>>, QueryError> {
        self.validate_target(target)?;

        if k == 0 {
            return Ok(vec![]);
        }

        let mut top = TopK::new(k.min(self.vectors.len()));
        for vector in &self.vectors {
            let distance = self.metric.distance(target, vector);
            top.push(vector, distance);
        }

        let results: Vec<Neighbor<'_>> = top
            .into_sorted()
            .into_iter()
            .map(|(vector, distance)| Neighbor { vector, distance })
            .collect();

        tracing::trace!(
            k,
            scanned = self.vectors.len(),
            returned = results.len(),
            "brute force search"
        );

        Ok(results)
    }

    /// Validate a query target's dimensions and values.
    fn validate_target(&self, target: &Vector) -> Result<(), QueryError> {
        if target.dimensions() != self.dimensions {
            tracing::debug!(
                expected = self.dimensions,
                actual = target.dimensions(),
                "rejecting query target"
            );
            return Err(QueryError::DimensionMismatch {
                expected: self.dimensions,
                actual: target.dimensions(),
            });
        }

        if self.config.reject_non_finite {
            if let Some(i) = target.first_non_finite() {
                return Err(QueryError::InvalidVector(format!(
                    "non-finite value at index {} of query target",
                    i
                )));
            }
        }

        Ok(())
    }
}

impl NearestNeighborIndex for BruteForceIndex {
    fn search(&self, k: usize, target: &Vector) -> Result<Vec<&Vector>, QueryError> {
        let neighbors = self.search_with_distances(k, target)?;
        Ok(neighbors.into_iter().map(|n| n.vector).collect())
    }

    fn len(&self) -> usize {
        self.vectors.len()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

impl fmt::Debug for BruteForceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BruteForceIndex")
            .field("len", &self.vectors.len())
            .field("dimensions", &self.dimensions)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Validating builder for [`BruteForceIndex`].
#[derive(Default)]
pub struct BruteForceIndexBuilder {
    vectors: Vec<Vector>,
    metric: Option<Arc<dyn DistanceMetric>>,
    config: IndexConfig,
}

impl BruteForceIndexBuilder {
    /// Append vectors to the snapshot.
    pub fn vectors(mut self, vectors: impl IntoIterator<Item = Vector>) -> Self {
        self.vectors.extend(vectors);
        self
    }

    /// Append a single vector to the snapshot.
    pub fn vector(mut self, vector: Vector) -> Self {
        self.vectors.push(vector);
        self
    }

    /// Set the distance metric.
    pub fn metric<M>(mut self, metric: M) -> Self
    where
        M: DistanceMetric + 'static,
    {
        self.metric = Some(Arc::new(metric));
        self
    }

    /// Set a metric already shared with other indices.
    pub fn shared_metric(mut self, metric: Arc<dyn DistanceMetric>) -> Self {
        self.metric = Some(metric);
        self
    }

    /// Set the index configuration.
    pub fn config(mut self, config: IndexConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the snapshot and build the index.
    ///
    /// Checks run in order, the first failure wins:
    /// 1. at least one vector
    /// 2. a metric was set
    /// 3. every point has the first point's length
    /// 4. all coordinates finite, if the config asks for it
    pub fn build(self) -> Result<BruteForceIndex, BuildError> {
        let Self {
            vectors,
            metric,
            config,
        } = self;

        let dimensions = match vectors.first() {
            Some(first) => first.dimensions(),
            None => return Err(BuildError::EmptyInput),
        };

        let metric = metric.ok_or(BuildError::MissingMetric)?;

        if let Some((index, v)) = vectors
            .iter()
            .enumerate()
            .find(|(_, v)| v.dimensions() != dimensions)
        {
            tracing::debug!(
                index,
                expected = dimensions,
                actual = v.dimensions(),
                "rejecting vector snapshot"
            );
            return Err(BuildError::DimensionMismatch {
                index,
                expected: dimensions,
                actual: v.dimensions(),
            });
        }

        if config.reject_non_finite {
            for (index, v) in vectors.iter().enumerate() {
                if let Some(i) = v.first_non_finite() {
                    return Err(BuildError::InvalidVector(format!(
                        "non-finite value at index {} of vector {} ({:?})",
                        i, index, v.id
                    )));
                }
            }
        }

        tracing::debug!(
            vectors = vectors.len(),
            dimensions,
            "built brute force index"
        );

        Ok(BruteForceIndex {
            vectors,
            dimensions,
            metric,
            config,
        })
    }
}
