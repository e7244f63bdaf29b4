//! Error types for the haven library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all marketplace operations.
///
/// "No match" is never an error: searches that match nothing return an
/// empty collection.
#[derive(Error, Debug)]
pub enum HavenError {
    /// Malformed or out-of-range request input
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Empty or inverted ranges (check-out before check-in, zero head count)
    #[error("Invalid range for '{field}': {reason}")]
    InvalidRange { field: String, reason: String },
    /// Requested guests or travelers exceed the listing's capacity
    #[error("Capacity exceeded: requested {requested}, but the listing allows at most {capacity}")]
    CapacityExceeded { requested: u32, capacity: u32 },
    /// Listing not found for the given ID
    #[error("Listing with ID '{id}' not found")]
    ListingNotFound { id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Catalog (de)serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> HavenError {
        HavenError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for creating range errors.
pub struct InvalidRangeBuilder {
    field: String,
}

impl InvalidRangeBuilder {
    /// Create a new range error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> HavenError {
        HavenError::InvalidRange {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl HavenError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for range errors.
    pub fn invalid_range(field: impl Into<String>) -> InvalidRangeBuilder {
        InvalidRangeBuilder::new(field)
    }

    /// Whether the error was caused by the caller's request rather than the
    /// environment. Interfaces use this to pick between "bad request" and
    /// "internal" reporting.
    pub fn is_rejected_request(&self) -> bool {
        matches!(
            self,
            HavenError::InvalidInput { .. }
                | HavenError::InvalidRange { .. }
                | HavenError::CapacityExceeded { .. }
                | HavenError::ListingNotFound { .. }
        )
    }
}

/// Extension trait for catalog-related Results.
pub trait CatalogResultExt<T> {
    /// Map an I/O error to a file system error for `path`.
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> CatalogResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| HavenError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Extension trait for Result to attach configuration context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to HavenError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| HavenError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for marketplace operations
pub type Result<T> = std::result::Result<T, HavenError>;
