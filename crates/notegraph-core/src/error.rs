//! Error types for the notegraph system.
//!
//! Graph construction, queries and analytics are total functions and never
//! produce an [`Error`]. Errors only surface from configuration handling and
//! from explicit note validation requested by the caller.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// The core error type for all notegraph operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// File system error while reading or writing configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML (de)serialization failure
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Invalid configuration
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// Note collection failed validation
    #[error("Validation error: {reason}")]
    ValidationError { reason: String },

    /// Two notes share the same slug
    #[error("Duplicate slug: {slug}")]
    DuplicateSlug { slug: String },

    /// Slug not present in the graph
    #[error("Not found in graph: {key}")]
    NotFound { key: String },

    /// Generic unclassified error
    #[error("Error: {0}")]
    Other(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration-not-found error
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Error::ConfigNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create a validation error
    pub fn validation_error(reason: impl Into<String>) -> Self {
        Error::ValidationError {
            reason: reason.into(),
        }
    }

    /// Create a duplicate slug error
    pub fn duplicate_slug(slug: impl Into<String>) -> Self {
        Error::DuplicateSlug { slug: slug.into() }
    }

    /// Create a not found error
    pub fn not_found(key: impl Into<String>) -> Self {
        Error::NotFound { key: key.into() }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}
