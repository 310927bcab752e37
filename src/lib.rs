//! Catbucket Core Library
//!
//! Fetches cat breed image metadata from The Cat API, downloads an image, and
//! round-trips it through an S3 bucket.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`cats`] - API client for breed lookups and image downloads
//! - [`storage`] - Bucket-bound object storage over a pluggable backend
//! - [`pipeline`] - The lookup → fetch → upload → download sequence

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cats;
pub mod pipeline;
pub mod storage;
mod user_agent;

// Re-export commonly used types
pub use cats::{BreedMetadata, CatClient, CatError, MAINE_COON_ID, Transport};
pub use pipeline::{PipelineError, RoundTripReport, RoundTripRequest, run_round_trip};
pub use storage::{
    MemoryBackend, ObjectBackend, S3Backend, StorageConfig, StorageError, StorageService,
};
