//! Error types for the storage module.

use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by an [`ObjectBackend`](super::ObjectBackend).
#[derive(Debug, Error)]
pub enum BackendError {
    /// The requested object does not exist.
    #[error("object `{key}` not found in bucket `{bucket}`")]
    NotFound {
        /// Bucket that was searched.
        bucket: String,
        /// Missing object key.
        key: String,
    },

    /// The backend rejected or failed the operation.
    #[error("{operation} failed: {message}")]
    Service {
        /// Backend operation name (e.g. `PutObject`).
        operation: &'static str,
        /// Backend-provided detail.
        message: String,
        /// Underlying client error, when there is one.
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl BackendError {
    /// Creates a not-found error.
    pub fn not_found(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NotFound {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Creates a service error for `operation`.
    pub fn service(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Service {
            operation,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a service error for `operation` that keeps the client error
    /// as its source.
    pub fn service_with_source(
        operation: &'static str,
        message: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self::Service {
            operation,
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Errors returned by [`StorageService`](super::StorageService).
#[derive(Debug, Error)]
pub enum StorageError {
    /// A required construction parameter is missing.
    #[error("invalid storage configuration: {reason}")]
    Config {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// A required call parameter is empty.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// Writing the object to the backend failed.
    #[error("unable to upload object `{key}` to bucket `{bucket}`: {source}")]
    Write {
        /// Target bucket.
        bucket: String,
        /// Target key.
        key: String,
        /// Backend failure.
        #[source]
        source: BackendError,
    },

    /// Reading the object from the backend failed or the key does not exist.
    #[error("unable to download object `{key}` from bucket `{bucket}`: {source}")]
    Read {
        /// Source bucket.
        bucket: String,
        /// Source key.
        key: String,
        /// Backend failure.
        #[source]
        source: BackendError,
    },

    /// The local destination file could not be created or written.
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The file path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Creates a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Creates a write error.
    pub fn write(bucket: impl Into<String>, key: impl Into<String>, source: BackendError) -> Self {
        Self::Write {
            bucket: bucket.into(),
            key: key.into(),
            source,
        }
    }

    /// Creates a read error.
    pub fn read(bucket: impl Into<String>, key: impl Into<String>, source: BackendError) -> Self {
        Self::Read {
            bucket: bucket.into(),
            key: key.into(),
            source,
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
