//! HTTP transport seam for the cat client.
//!
//! The client never talks to a global HTTP client: it owns a [`Transport`]
//! handed to it at construction. `reqwest::Client` is the production
//! implementation; tests substitute their own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Request, Response};

use crate::user_agent;

use super::error::CatError;

/// Failure to send a request, as reported by a [`Transport`].
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Sends a prepared request and returns the raw response.
///
/// Implementations must not inspect the status code; status handling belongs
/// to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes `request`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request could not be sent.
    async fn execute(&self, request: Request) -> Result<Response, TransportError>;
}

#[async_trait]
impl Transport for Client {
    async fn execute(&self, request: Request) -> Result<Response, TransportError> {
        Ok(Client::execute(self, request).await?)
    }
}

/// Builds the default `reqwest` transport with the given timeouts.
///
/// # Errors
///
/// Returns [`CatError::Config`] when the client cannot be built.
pub fn build_transport(
    connect_timeout_secs: u64,
    read_timeout_secs: u64,
) -> Result<Client, CatError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .timeout(Duration::from_secs(read_timeout_secs))
        .gzip(true)
        .user_agent(user_agent::default_user_agent())
        .build()
        .map_err(|e| CatError::config(format!("HTTP client construction failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_transport_with_default_timeouts() {
        let client = build_transport(10, 30);
        assert!(client.is_ok(), "default transport should build: {client:?}");
    }
}
