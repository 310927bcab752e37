//! Breed lookup → image fetch → upload → download, in sequence.
//!
//! Each step is awaited before the next starts and the first failure aborts
//! the run. Nothing is retried.

use std::path::PathBuf;

use chrono::{Local, Timelike};
use thiserror::Error;
use tracing::{info, instrument};
use url::Url;

use crate::cats::{CatClient, CatError, MAINE_COON_ID, Transport};
use crate::storage::{ObjectBackend, StorageError, StorageService};

/// Extension used when the image URL has none.
const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

/// Errors that abort a round trip.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The cat API lookup or image download failed.
    #[error(transparent)]
    Cats(#[from] CatError),

    /// Uploading or downloading the object failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The breed search returned no images.
    #[error("no cat metadata found for breed `{breed_id}`")]
    NoBreeds {
        /// Breed that was searched.
        breed_id: String,
    },
}

/// What to fetch and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripRequest {
    /// Breed to search for.
    pub breed_id: String,
    /// Object key; derived from the image URL when `None`.
    pub object_key: Option<String>,
    /// Local file for the downloaded object; the key as a relative path when `None`.
    pub destination: Option<PathBuf>,
}

impl Default for RoundTripRequest {
    fn default() -> Self {
        Self::new(MAINE_COON_ID)
    }
}

impl RoundTripRequest {
    /// Creates a request for `breed_id` with derived key and destination.
    pub fn new(breed_id: impl Into<String>) -> Self {
        Self {
            breed_id: breed_id.into(),
            object_key: None,
            destination: None,
        }
    }

    /// Uses `object_key` instead of a derived key.
    #[must_use]
    pub fn with_object_key(mut self, object_key: impl Into<String>) -> Self {
        self.object_key = Some(object_key.into());
        self
    }

    /// Downloads into `destination` instead of a path derived from the key.
    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }
}

/// Outcome of a successful round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripReport {
    /// Breed that was searched.
    pub breed_id: String,
    /// Number of search results returned.
    pub results: usize,
    /// Image that was fetched (the first result).
    pub image_url: String,
    /// Key the image was stored under.
    pub object_key: String,
    /// Bytes sent to the object store.
    pub bytes_uploaded: u64,
    /// Bytes written to the local file.
    pub bytes_downloaded: u64,
    /// Local file holding the downloaded object.
    pub destination: PathBuf,
}

/// Runs one round trip.
///
/// # Errors
///
/// Returns [`PipelineError::NoBreeds`] if the search is empty, otherwise the
/// first client or storage error encountered.
#[instrument(skip(cats, storage, request), fields(breed_id = %request.breed_id, bucket = %storage.bucket()))]
pub async fn run_round_trip<T, B>(
    cats: &CatClient<T>,
    storage: &StorageService<B>,
    request: &RoundTripRequest,
) -> Result<RoundTripReport, PipelineError>
where
    T: Transport,
    B: ObjectBackend,
{
    let breeds = cats.get_breeds(&request.breed_id).await?;
    let Some(first) = breeds.first() else {
        return Err(PipelineError::NoBreeds {
            breed_id: request.breed_id.clone(),
        });
    };
    info!(results = breeds.len(), image_url = %first.url, "retrieving image");

    let image = cats.get_cat_image(&first.url).await?;
    let bytes_uploaded = image.len() as u64;

    let object_key = request
        .object_key
        .clone()
        .unwrap_or_else(|| object_key_for(&first.url, current_minute()));
    storage.upload(image, &object_key).await?;

    let destination = request
        .destination
        .clone()
        .unwrap_or_else(|| PathBuf::from(&object_key));
    let bytes_downloaded = storage.download(&object_key, &destination).await?;

    info!(
        key = %object_key,
        destination = %destination.display(),
        "round trip complete"
    );
    Ok(RoundTripReport {
        breed_id: request.breed_id.clone(),
        results: breeds.len(),
        image_url: first.url.clone(),
        object_key,
        bytes_uploaded,
        bytes_downloaded,
        destination,
    })
}

/// Builds `cat-<minute>.<ext>` using the image URL's extension.
#[must_use]
pub fn object_key_for(image_url: &str, minute: u8) -> String {
    let extension = image_extension(image_url).unwrap_or_else(|| DEFAULT_IMAGE_EXTENSION.into());
    format!("cat-{minute}.{extension}")
}

fn image_extension(image_url: &str) -> Option<String> {
    let url = Url::parse(image_url).ok()?;
    let last_segment = url.path_segments()?.next_back()?;
    let (_, extension) = last_segment.rsplit_once('.')?;
    let valid = !extension.is_empty()
        && extension.len() <= 5
        && extension.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then(|| extension.to_ascii_lowercase())
}

/// Minute of the current hour, local time.
fn current_minute() -> u8 {
    u8::try_from(Local::now().minute()).unwrap_or(0)
}
