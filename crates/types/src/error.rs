//! Error types for configuration values and loaders

use crate::Kind;
use thiserror::Error;

/// Boxed error used where the underlying cause comes from another layer
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for loading and reading configuration values
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The requested path is absent from the supplied file set
    #[error("path not found (path: {path})")]
    PathNotFound { path: String },

    /// The file content could not be parsed
    #[error("{source} (path: {path})")]
    Parse {
        path: String,
        #[source]
        source: BoxError,
    },

    /// The file content exceeds the configured size limit
    #[error("content too large: {size} bytes exceeds limit of {limit} (path: {path})")]
    TooLarge {
        path: String,
        size: usize,
        limit: usize,
    },

    /// Scalar or shape mismatch when extracting a typed value
    #[error("cannot convert {found} to {expected}")]
    TypeCoercion { expected: &'static str, found: Kind },

    /// Iteration requested on a node that is not a list or a struct
    #[error("unsupported iterator type `{kind}`")]
    UnsupportedIterator { kind: Kind },

    /// Failure in one of the decoding branches
    #[error("{source}: (position: {position})")]
    Decode {
        position: String,
        #[source]
        source: BoxError,
    },

    /// Failure re-serializing a node
    #[error("marshal error: {0}")]
    Marshal(#[source] BoxError),
}

impl ConfigError {
    /// Build a coercion error for a value of kind `found`
    pub fn coercion(expected: &'static str, found: Kind) -> Self {
        ConfigError::TypeCoercion { expected, found }
    }

    /// Wrap a decoding failure with the position of the node being decoded
    pub fn decode(position: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ConfigError::Decode {
            position: position.into(),
            source: source.into(),
        }
    }

    /// Returns true if this is a missing-path error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::PathNotFound { .. })
    }
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ConfigError::PathNotFound {
            path: "app.yaml".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "path not found (path: app.yaml)");
    }

    #[test]
    fn test_decode_message_carries_position() {
        let err = ConfigError::decode("unsupported operation", anyhow::anyhow!("bad port"));
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "bad port: (position: unsupported operation)");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_coercion_message() {
        let err = ConfigError::coercion("int64", Kind::Struct);
        assert_eq!(err.to_string(), "cannot convert struct to int64");
    }
}
