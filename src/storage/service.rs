//! Bucket-bound storage service.
//!
//! [`StorageService`] uploads byte buffers and streams objects back into local
//! files through an [`ObjectBackend`]. The bucket is fixed at construction.

use std::path::Path;

use bytes::Bytes;
use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument, warn};

use super::backend::ObjectBackend;
use super::error::StorageError;
use super::s3::S3Backend;

/// Default AWS region for the object store.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Connection settings for the S3 backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Bucket every object is read from and written to.
    pub bucket: String,
    /// AWS region of the bucket.
    pub region: String,
    /// Custom endpoint for S3-compatible stores.
    pub endpoint_url: Option<String>,
    /// Address buckets as `endpoint/bucket/key` instead of `bucket.endpoint/key`.
    pub force_path_style: bool,
}

impl StorageConfig {
    /// Creates a config for `bucket` in the default region.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            force_path_style: false,
        }
    }

    /// Sets the region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets a custom endpoint URL.
    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Enables or disables path-style addressing.
    #[must_use]
    pub fn with_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }
}

/// Uploads and downloads objects in a single bucket.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use bytes::Bytes;
/// use catbucket_core::storage::{StorageConfig, StorageService};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let storage = StorageService::connect(&StorageConfig::new("my-bucket")).await?;
/// storage.upload(Bytes::from_static(b"meow"), "cat.txt").await?;
/// storage.download("cat.txt", Path::new("./cat.txt")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StorageService<B = S3Backend> {
    backend: B,
    bucket: String,
}

impl StorageService<S3Backend> {
    /// Opens an S3 client for `config.region` bound to `config.bucket`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Config`] if the bucket or region is empty.
    #[instrument(level = "debug", skip(config), fields(bucket = %config.bucket, region = %config.region))]
    pub async fn connect(config: &StorageConfig) -> Result<Self, StorageError> {
        validate_bucket(&config.bucket)?;
        if config.region.is_empty() {
            return Err(StorageError::config("region is required"));
        }
        let backend = S3Backend::connect(config).await;
        debug!("object store client ready");
        Ok(Self {
            backend,
            bucket: config.bucket.clone(),
        })
    }
}

impl<B: ObjectBackend> StorageService<B> {
    /// Binds `backend` to `bucket`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Config`] if `bucket` is empty.
    pub fn with_backend(bucket: &str, backend: B) -> Result<Self, StorageError> {
        validate_bucket(bucket)?;
        Ok(Self {
            backend,
            bucket: bucket.to_string(),
        })
    }

    /// Returns the bucket this service writes to.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Returns a reference to the underlying backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Writes `body` as the object named `key`, replacing any existing object.
    ///
    /// # Errors
    ///
    /// - [`StorageError::InvalidArgument`] if `key` is empty
    /// - [`StorageError::Write`] on any backend failure
    #[instrument(skip(self, body), fields(bucket = %self.bucket, bytes = body.len()))]
    pub async fn upload(&self, body: Bytes, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.backend
            .put_object(&self.bucket, key, body)
            .await
            .map_err(|e| StorageError::write(&self.bucket, key, e))?;
        info!("uploaded object");
        Ok(())
    }

    /// Streams the object named `key` into a file at `destination`.
    ///
    /// The file is created (or truncated) before the object is fetched. If
    /// the fetch or the write fails, the partial file is removed. Returns the
    /// number of bytes written.
    ///
    /// # Errors
    ///
    /// - [`StorageError::InvalidArgument`] if `key` is empty
    /// - [`StorageError::Io`] if the file cannot be created or written
    /// - [`StorageError::Read`] if the backend read fails or the key does not exist
    #[instrument(skip(self, destination), fields(bucket = %self.bucket, destination = %destination.display()))]
    pub async fn download(&self, key: &str, destination: &Path) -> Result<u64, StorageError> {
        validate_key(key)?;
        let file = File::create(destination)
            .await
            .map_err(|e| StorageError::io(destination, e))?;

        match self.stream_to_file(key, file, destination).await {
            Ok(bytes_written) => {
                info!(bytes = bytes_written, "downloaded object");
                Ok(bytes_written)
            }
            Err(error) => {
                if let Err(cleanup) = tokio::fs::remove_file(destination).await {
                    warn!(error = %cleanup, "failed to remove partial download");
                }
                Err(error)
            }
        }
    }

    async fn stream_to_file(
        &self,
        key: &str,
        file: File,
        destination: &Path,
    ) -> Result<u64, StorageError> {
        let mut body = self
            .backend
            .get_object(&self.bucket, key)
            .await
            .map_err(|e| StorageError::read(&self.bucket, key, e))?;

        let mut writer = BufWriter::new(file);
        let mut bytes_written: u64 = 0;
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| StorageError::read(&self.bucket, key, e))?;
            writer
                .write_all(&chunk)
                .await
                .map_err(|e| StorageError::io(destination, e))?;
            bytes_written += chunk.len() as u64;
        }

        writer
            .flush()
            .await
            .map_err(|e| StorageError::io(destination, e))?;
        Ok(bytes_written)
    }
}

fn validate_bucket(bucket: &str) -> Result<(), StorageError> {
    if bucket.is_empty() {
        return Err(StorageError::config("bucket is required"));
    }
    Ok(())
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Err(StorageError::invalid_argument("key", "empty object key"));
    }
    Ok(())
}
