//! Error types for anythink

use std::fmt;
use thiserror::Error;

/// Main error type for anythink
#[derive(Debug, Error)]
pub enum AnythinkError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Comment not found
    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    /// Caller-supplied data failed a precondition
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage engine failed or is unreachable
    #[error("Storage unavailable: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unsupported schema version
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AnythinkError>,
    },
}

/// Failure category surfaced to callers of the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing field or malformed input
    Validation,
    /// Referenced id does not exist
    NotFound,
    /// Underlying engine failed
    StorageUnavailable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::NotFound => write!(f, "not_found"),
            ErrorKind::StorageUnavailable => write!(f, "storage_unavailable"),
        }
    }
}

impl AnythinkError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AnythinkError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Fold the error into the three-way taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnythinkError::Validation(_) => ErrorKind::Validation,
            AnythinkError::CommentNotFound(_) => ErrorKind::NotFound,
            AnythinkError::WithContext { source, .. } => source.kind(),
            AnythinkError::Io(_)
            | AnythinkError::Serde(_)
            | AnythinkError::Toml(_)
            | AnythinkError::Storage(_)
            | AnythinkError::Config(_)
            | AnythinkError::UnsupportedSchemaVersion(_) => ErrorKind::StorageUnavailable,
        }
    }

    /// Message without the variant prefix, for validation errors shown to users
    pub fn detail(&self) -> String {
        match self {
            AnythinkError::Validation(msg) => msg.clone(),
            AnythinkError::WithContext { source, .. } => source.detail(),
            other => other.to_string(),
        }
    }
}

impl From<toml::de::Error> for AnythinkError {
    fn from(err: toml::de::Error) -> Self {
        AnythinkError::Toml(err.to_string())
    }
}

/// Result type alias for anythink
pub type Result<T> = std::result::Result<T, AnythinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnythinkError::CommentNotFound("abc-123".to_string());
        assert_eq!(err.to_string(), "Comment not found: abc-123");
    }

    #[test]
    fn test_error_with_context() {
        let err = AnythinkError::Validation("Text is required".to_string());
        let err = err.with_context("Failed to create comment");
        assert!(err.to_string().contains("Failed to create comment"));
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.detail(), "Text is required");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AnythinkError = io_err.into();
        assert!(matches!(err, AnythinkError::Io(_)));
        assert_eq!(err.kind(), ErrorKind::StorageUnavailable);
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            AnythinkError::CommentNotFound("x".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            AnythinkError::Storage("down".into()).kind(),
            ErrorKind::StorageUnavailable
        );
        assert_eq!(
            AnythinkError::UnsupportedSchemaVersion("9.0".into()).kind(),
            ErrorKind::StorageUnavailable
        );
    }
}
