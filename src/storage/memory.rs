//! In-process object backend.

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use futures_util::stream;

use super::backend::{ObjectBackend, ObjectStream};
use super::error::BackendError;

/// Object backend that keeps every object in memory.
///
/// Useful for tests and offline runs; contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    objects: DashMap<(String, String), Bytes>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored bytes for `bucket/key`, if any.
    #[must_use]
    pub fn object(&self, bucket: &str, key: &str) -> Option<Bytes> {
        self.objects
            .get(&(bucket.to_string(), key.to_string()))
            .map(|entry| entry.value().clone())
    }

    /// Number of stored objects across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` when nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[async_trait]
impl ObjectBackend for MemoryBackend {
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> Result<(), BackendError> {
        self.objects
            .insert((bucket.to_string(), key.to_string()), body);
        Ok(())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectStream, BackendError> {
        let body = self
            .object(bucket, key)
            .ok_or_else(|| BackendError::not_found(bucket, key))?;
        Ok(Box::pin(stream::iter([Ok::<_, BackendError>(body)])))
    }
}
