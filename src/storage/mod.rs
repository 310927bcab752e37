//! Object storage for downloaded images.
//!
//! - [`StorageService`] - bucket-bound upload/download operations
//! - [`ObjectBackend`] - async trait a backend implements
//! - [`S3Backend`] - Amazon S3 (and S3-compatible) backend
//! - [`MemoryBackend`] - in-process backend for tests and offline runs

mod backend;
mod error;
mod memory;
mod s3;
mod service;

pub use backend::{ObjectBackend, ObjectStream};
pub use error::{BackendError, StorageError};
pub use memory::MemoryBackend;
pub use s3::S3Backend;
pub use service::{DEFAULT_REGION, StorageConfig, StorageService};
