//! Amazon S3 backend built on `aws-sdk-s3`.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use futures_util::stream;
use tracing::debug;

use super::backend::{ObjectBackend, ObjectStream};
use super::error::BackendError;
use super::service::StorageConfig;

/// S3 (or S3-compatible) object backend.
///
/// Owns its SDK client; nothing is shared process-wide.
#[derive(Debug, Clone)]
pub struct S3Backend {
    client: Client,
}

impl S3Backend {
    /// Wraps an already configured SDK client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Loads AWS configuration for the configured region and builds a client.
    ///
    /// Credentials come from the standard provider chain (environment,
    /// profile, instance metadata).
    pub async fn connect(config: &StorageConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder =
            aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(config.force_path_style);
        if let Some(endpoint) = &config.endpoint_url {
            debug!(endpoint = %endpoint, "using custom S3 endpoint");
            builder = builder.endpoint_url(endpoint);
        }

        Self::from_client(Client::from_conf(builder.build()))
    }

    /// Returns a reference to the underlying SDK client.
    #[must_use]
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl ObjectBackend for S3Backend {
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> Result<(), BackendError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                BackendError::service_with_source("PutObject", DisplayErrorContext(&e).to_string(), e)
            })?;
        Ok(())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectStream, BackendError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error()
                    .is_some_and(GetObjectError::is_no_such_key)
                {
                    BackendError::not_found(bucket, key)
                } else {
                    BackendError::service_with_source(
                        "GetObject",
                        DisplayErrorContext(&e).to_string(),
                        e,
                    )
                }
            })?;

        let chunks = stream::try_unfold(output.body, |mut body| async move {
            match body.try_next().await {
                Ok(Some(chunk)) => Ok(Some((chunk, body))),
                Ok(None) => Ok(None),
                Err(e) => Err(BackendError::service_with_source(
                    "GetObject",
                    e.to_string(),
                    e,
                )),
            }
        });
        Ok(Box::pin(chunks))
    }
}
