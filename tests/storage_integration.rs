//! Integration tests for the storage module.
//!
//! The S3 backend is exercised against a mock HTTP server standing in for an
//! S3-compatible endpoint with path-style addressing.

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use bytes::Bytes;
use catbucket_core::storage::{
    BackendError, MemoryBackend, S3Backend, StorageError, StorageService,
};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

mod support;
use support::start_mock_server_or_skip;

const NO_SUCH_KEY_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>NoSuchKey</Code><Message>The specified key does not exist.</Message><Key>missing.jpg</Key><RequestId>req-1</RequestId></Error>"#;

fn s3_service(endpoint: &str) -> StorageService<S3Backend> {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
        .endpoint_url(endpoint)
        .force_path_style(true)
        .build();
    let backend = S3Backend::from_client(aws_sdk_s3::Client::from_conf(config));
    StorageService::with_backend("go-kt", backend).expect("bucket is non-empty")
}

#[tokio::test]
async fn test_memory_round_trip_is_byte_identical() {
    let service = StorageService::with_backend("go-kt", MemoryBackend::new()).unwrap();
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let destination = temp_dir.path().join("cat-5.jpg");
    let body: Vec<u8> = (0..=255u8).rev().cycle().take(300_000).collect();

    service
        .upload(Bytes::from(body.clone()), "cat-5.jpg")
        .await
        .expect("upload should succeed");
    let written = service
        .download("cat-5.jpg", &destination)
        .await
        .expect("download should succeed");

    assert_eq!(written, body.len() as u64);
    assert_eq!(std::fs::read(&destination).unwrap(), body);
}

#[tokio::test]
async fn test_s3_upload_puts_object_under_bucket_path() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("PUT"))
        .and(path("/go-kt/cat-3.jpg"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = s3_service(&mock_server.uri());
    let result = service
        .upload(Bytes::from_static(b"jpeg-bytes"), "cat-3.jpg")
        .await;

    assert!(result.is_ok(), "upload should succeed: {result:?}");
}

#[tokio::test]
async fn test_s3_download_streams_object_to_file() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    let body: Vec<u8> = (0..=255u8).cycle().take(200_000).collect();
    Mock::given(method("GET"))
        .and(path("/go-kt/cat-3.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = s3_service(&mock_server.uri());
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let destination = temp_dir.path().join("cat-3.jpg");

    let written = service
        .download("cat-3.jpg", &destination)
        .await
        .expect("download should succeed");

    assert_eq!(written, body.len() as u64);
    assert_eq!(std::fs::read(&destination).unwrap(), body);
}

#[tokio::test]
async fn test_s3_missing_key_is_read_error_not_found() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .and(path("/go-kt/missing.jpg"))
        .respond_with(
            ResponseTemplate::new(404).set_body_raw(NO_SUCH_KEY_BODY, "application/xml"),
        )
        .mount(&mock_server)
        .await;

    let service = s3_service(&mock_server.uri());
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let destination = temp_dir.path().join("missing.jpg");

    let result = service.download("missing.jpg", &destination).await;

    match result {
        Err(StorageError::Read { source, key, .. }) => {
            assert_eq!(key, "missing.jpg");
            assert!(matches!(source, BackendError::NotFound { .. }), "got: {source:?}");
        }
        other => panic!("Expected Read error, got: {other:?}"),
    }
    assert!(!destination.exists(), "no file should be left behind");
}

#[tokio::test]
async fn test_s3_rejected_put_is_write_error() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(403).set_body_raw(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>AccessDenied</Code><Message>Access Denied</Message><RequestId>req-2</RequestId></Error>"#,
            "application/xml",
        ))
        .mount(&mock_server)
        .await;

    let service = s3_service(&mock_server.uri());
    let result = service.upload(Bytes::from_static(b"x"), "cat.jpg").await;

    match result {
        Err(StorageError::Write { source, .. }) => {
            assert!(matches!(source, BackendError::Service { .. }), "got: {source:?}");
            assert!(
                std::error::Error::source(&source).is_some(),
                "SDK error should be kept as the source"
            );
        }
        other => panic!("expected write error, got {other:?}"),
    }
}
