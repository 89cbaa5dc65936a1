//! Error types for the PostGIS adapter layer.

use thiserror::Error;

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for PostGIS adapter operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Failure reported by the underlying connection layer.
    ///
    /// Catalog-query and statement-execution failures are never compensated
    /// here; they carry through to the caller unchanged.
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Column not found on the target table.
    #[error("Column not found: {table}.{name}")]
    ColumnNotFound { table: String, name: String },

    /// A spatial attribute received a condition value it cannot express.
    #[error("Unsupported condition value for spatial attribute {attribute}: {reason}")]
    UnsupportedConditionValue { attribute: String, reason: String },

    /// Geometry could not be written as EWKB.
    #[error("Geometry encoding failed: {message}")]
    GeometryEncode { message: String },
}

impl Error {
    /// Wrap a connection-layer error.
    pub fn backend<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(source))
    }

    /// Create an unsupported-condition-value error.
    pub fn unsupported_condition_value(
        attribute: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::UnsupportedConditionValue {
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }

    /// Create a geometry encoding error.
    pub fn geometry_encode(message: impl Into<String>) -> Self {
        Self::GeometryEncode {
            message: message.into(),
        }
    }
}
