//! Error types for index construction and search.

use thiserror::Error;

/// Errors returned while building an index.
///
/// The display strings of the first three variants are stable; callers may
/// match on them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// The vector collection was empty.
    #[error("no vectors provided")]
    EmptyInput,

    /// No distance metric was supplied to the builder.
    #[error("no distance function provided")]
    MissingMetric,

    /// A vector's point length differs from the first vector's.
    #[error("vectors must have the same dimension")]
    DimensionMismatch {
        /// Position of the offending vector in the input collection.
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A coordinate was NaN or infinite (only with `reject_non_finite`).
    #[error("Invalid vector: {0}")]
    InvalidVector(String),
}

/// Errors returned by a search call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The target's point length differs from the index dimension.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A target coordinate was NaN or infinite (only with `reject_non_finite`).
    #[error("Invalid vector: {0}")]
    InvalidVector(String),
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnnError {
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),
}

/// Result type for callers that mix construction and search.
pub type Result<T> = std::result::Result<T, KnnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_build_messages() {
        assert_eq!(BuildError::EmptyInput.to_string(), "no vectors provided");
        assert_eq!(
            BuildError::MissingMetric.to_string(),
            "no distance function provided"
        );
        let err = BuildError::DimensionMismatch {
            index: 2,
            expected: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "vectors must have the same dimension");
    }

    #[test]
    fn test_knn_error_from() {
        let err: KnnError = QueryError::DimensionMismatch {
            expected: 3,
            actual: 2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Query error: Dimension mismatch: expected 3, got 2"
        );

        let err: KnnError = BuildError::EmptyInput.into();
        assert!(matches!(err, KnnError::Build(BuildError::EmptyInput)));
    }
}
