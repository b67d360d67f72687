//! Error types for the Country Facts application.

use thiserror::Error;

/// A shared error type for the entire application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug)]
pub enum FactsError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// HTTP transport or upstream status error
    #[error("HTTP error: {0}")]
    Http(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system, terminal)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FactsError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an Http error
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an HTTP error
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

impl From<std::io::Error> for FactsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<reqwest::Error> for FactsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Serialization {
                format: "JSON".to_string(),
                message: err.to_string(),
            }
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FactsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FactsError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, FactsError>`.
pub type Result<T> = std::result::Result<T, FactsError>;
