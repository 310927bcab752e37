//! Client for The Cat API image search.
//!
//! This module looks up breed image metadata and downloads image bytes.
//!
//! # Features
//!
//! - Injectable [`Transport`] (defaults to a `reqwest::Client`)
//! - API key sent as the `x-api-key` header, never logged
//! - Configurable timeouts (10s connect, 30s read by default)
//! - Structured error types with full context
//!
//! # Example
//!
//! ```no_run
//! use catbucket_core::cats::CatClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CatClient::new("my-api-key")?;
//! let breeds = client.get_breeds("beng").await?;
//! println!("found {} images", breeds.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod constants;
mod error;
mod transport;

pub use client::{BreedMetadata, CatClient};
pub use constants::{
    API_KEY_HEADER, BREED_ID_QUERY_KEY, CONNECT_TIMEOUT_SECS, DEFAULT_SEARCH_URL, MAINE_COON_ID,
    READ_TIMEOUT_SECS,
};
pub use error::CatError;
pub use transport::{Transport, TransportError, build_transport};
