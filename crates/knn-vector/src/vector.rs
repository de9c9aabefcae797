//! The stored vector value.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Opaque caller-defined bytes carried alongside a vector.
pub type Payload = Bytes;

/// An immutable vector: identifier, payload and coordinates.
///
/// Identifiers are not required to be unique or non-empty. The payload is
/// never inspected by the index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    /// Caller-chosen identifier.
    pub id: String,
    /// Caller-defined data, returned untouched with search results.
    pub payload: Payload,
    /// Coordinates.
    pub point: Vec<f64>,
}

impl Vector {
    /// Create a vector with an empty payload.
    pub fn new(id: impl Into<String>, point: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            payload: Payload::new(),
            point,
        }
    }

    /// Create a vector carrying a payload.
    pub fn with_payload(id: impl Into<String>, payload: impl Into<Payload>, point: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            payload: payload.into(),
            point,
        }
    }

    /// Create an anonymous vector, typically a query target.
    pub fn from_point(point: Vec<f64>) -> Self {
        Self::new(String::new(), point)
    }

    /// Number of coordinates.
    pub fn dimensions(&self) -> usize {
        self.point.len()
    }

    /// Index of the first NaN or infinite coordinate, if any.
    pub(crate) fn first_non_finite(&self) -> Option<usize> {
        self.point.iter().position(|v| !v.is_finite())
    }
}
