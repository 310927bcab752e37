//! Client for The Cat API.
//!
//! This module provides [`CatClient`], which looks up breed image metadata and
//! downloads image bytes over an injectable [`Transport`].

use std::fmt;

use bytes::Bytes;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, Method, Request, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, instrument};
use url::Url;

use super::constants::{
    API_KEY_HEADER, BREED_ID_QUERY_KEY, CONNECT_TIMEOUT_SECS, DEFAULT_SEARCH_URL,
    READ_TIMEOUT_SECS,
};
use super::error::CatError;
use super::transport::{Transport, build_transport};

/// One image search result.
///
/// Only `url` is required; the remaining fields are filled when the API
/// returns them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BreedMetadata {
    /// Absolute URL of the image.
    pub url: String,
    /// Image id assigned by the API.
    pub id: Option<String>,
    /// Image width in pixels.
    pub width: Option<u32>,
    /// Image height in pixels.
    pub height: Option<u32>,
}

/// Client for breed lookups and image downloads.
///
/// The API key is validated once at construction and sent as the `x-api-key`
/// header on every request. No request is retried.
///
/// # Example
///
/// ```no_run
/// use catbucket_core::cats::{CatClient, MAINE_COON_ID};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CatClient::new("my-api-key")?;
/// let breeds = client.get_breeds(MAINE_COON_ID).await?;
/// if let Some(first) = breeds.first() {
///     let image = client.get_cat_image(&first.url).await?;
///     println!("{} bytes", image.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct CatClient<T = Client> {
    transport: T,
    api_key: HeaderValue,
    search_url: Url,
}

impl<T> fmt::Debug for CatClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatClient")
            .field("api_key", &"<redacted>")
            .field("search_url", &self.search_url.as_str())
            .finish_non_exhaustive()
    }
}

impl CatClient<Client> {
    /// Creates a client backed by a `reqwest` transport with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`CatError::Config`] if `api_key` is empty or not a valid
    /// header value, or if the HTTP client cannot be built.
    pub fn new(api_key: &str) -> Result<Self, CatError> {
        Self::with_timeouts(api_key, CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
    }

    /// Creates a client backed by a `reqwest` transport with explicit timeouts.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_timeouts(
        api_key: &str,
        connect_timeout_secs: u64,
        read_timeout_secs: u64,
    ) -> Result<Self, CatError> {
        let api_key = api_key_header(api_key)?;
        let transport = build_transport(connect_timeout_secs, read_timeout_secs)?;
        Self::from_parts(transport, api_key)
    }
}

impl<T: Transport> CatClient<T> {
    /// Creates a client that sends every request through `transport`.
    ///
    /// # Errors
    ///
    /// Returns [`CatError::Config`] if `api_key` is empty or not a valid
    /// header value.
    pub fn with_transport(api_key: &str, transport: T) -> Result<Self, CatError> {
        let api_key = api_key_header(api_key)?;
        Self::from_parts(transport, api_key)
    }

    fn from_parts(transport: T, api_key: HeaderValue) -> Result<Self, CatError> {
        let search_url = Url::parse(DEFAULT_SEARCH_URL)
            .map_err(|e| CatError::config(format!("invalid default search URL: {e}")))?;
        Ok(Self {
            transport,
            api_key,
            search_url,
        })
    }

    /// Replaces the image search endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`CatError::Config`] if `search_url` is not an absolute URL.
    pub fn with_search_url(mut self, search_url: &str) -> Result<Self, CatError> {
        self.search_url = Url::parse(search_url)
            .map_err(|e| CatError::config(format!("invalid search URL `{search_url}`: {e}")))?;
        Ok(self)
    }

    /// Returns the image search endpoint in use.
    #[must_use]
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Returns a reference to the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Searches for images of the given breed.
    ///
    /// Results are returned in response order and may be empty.
    ///
    /// # Errors
    ///
    /// - [`CatError::InvalidArgument`] if `breed_id` is empty (no request is sent)
    /// - [`CatError::Transport`] if the request fails
    /// - [`CatError::UnexpectedStatus`] if the status is not 200
    /// - [`CatError::Decode`] if the body is not a JSON array of `{url}` records
    #[instrument(skip(self))]
    pub async fn get_breeds(&self, breed_id: &str) -> Result<Vec<BreedMetadata>, CatError> {
        if breed_id.is_empty() {
            return Err(CatError::invalid_argument("breed_id", "empty breed id"));
        }

        // Replace any breed filter already present on the search URL.
        let mut url = self.search_url.clone();
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(name, _)| name != BREED_ID_QUERY_KEY)
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair(BREED_ID_QUERY_KEY, breed_id);

        let body = self.fetch(&url).await?;
        let breeds: Vec<BreedMetadata> =
            serde_json::from_slice(&body).map_err(|e| CatError::decode(url.as_str(), e))?;

        info!(count = breeds.len(), "found breed metadata");
        Ok(breeds)
    }

    /// Downloads the image at `url` and returns its raw bytes.
    ///
    /// # Errors
    ///
    /// - [`CatError::InvalidArgument`] if `url` is empty or not absolute
    /// - [`CatError::Transport`] if the request or body read fails
    /// - [`CatError::UnexpectedStatus`] if the status is not 200
    #[instrument(skip(self))]
    pub async fn get_cat_image(&self, url: &str) -> Result<Bytes, CatError> {
        if url.is_empty() {
            return Err(CatError::invalid_argument("url", "empty image url"));
        }
        let parsed = Url::parse(url).map_err(|e| {
            CatError::invalid_argument("url", format!("`{url}` is not an absolute URL: {e}"))
        })?;

        let body = self.fetch(&parsed).await?;
        info!(bytes = body.len(), "retrieved cat image");
        Ok(body)
    }

    /// Sends an authenticated GET and returns the body of a 200 response.
    ///
    /// The response is dropped before returning on every path, so non-200
    /// bodies are never read.
    async fn fetch(&self, url: &Url) -> Result<Bytes, CatError> {
        let mut request = Request::new(Method::GET, url.clone());
        request
            .headers_mut()
            .insert(HeaderName::from_static(API_KEY_HEADER), self.api_key.clone());

        debug!(url = %url, "sending request");
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|e| CatError::transport(url.as_str(), e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CatError::unexpected_status(url.as_str(), status.as_u16()));
        }

        response
            .bytes()
            .await
            .map_err(|e| CatError::transport(url.as_str(), e))
    }
}

fn api_key_header(api_key: &str) -> Result<HeaderValue, CatError> {
    if api_key.is_empty() {
        return Err(CatError::config("apiKey is required"));
    }
    let mut value = HeaderValue::from_str(api_key)
        .map_err(|_| CatError::config("apiKey contains characters not allowed in a header"))?;
    value.set_sensitive(true);
    Ok(value)
}
