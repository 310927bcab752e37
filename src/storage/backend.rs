//! Object-store backend seam.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::Stream;

use super::error::BackendError;

/// Chunked body of a downloaded object.
pub type ObjectStream = Pin<Box<dyn Stream<Item = Result<Bytes, BackendError>> + Send>>;

/// Key-addressed blob storage (bucket + key → bytes).
///
/// Implementations perform no retries and no conditional writes: a put
/// overwrites any existing object under the same key.
#[async_trait]
pub trait ObjectBackend: Send + Sync {
    /// Stores `body` as `bucket/key`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the backend rejects the write.
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> Result<(), BackendError>;

    /// Opens `bucket/key` for streaming.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] for a missing key, or
    /// [`BackendError::Service`] for any other backend failure.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectStream, BackendError>;
}
