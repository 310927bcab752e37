//! Constants for the cats module (endpoint, header names, timeouts).

/// Image search endpoint of The Cat API.
pub const DEFAULT_SEARCH_URL: &str = "https://api.thecatapi.com/v1/images/search";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Query parameter selecting the breed on the search endpoint.
pub const BREED_ID_QUERY_KEY: &str = "breed_ids";

/// Breed id for the Maine Coon.
pub const MAINE_COON_ID: &str = "mcoo";

/// Default HTTP connect timeout (10 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default HTTP read timeout (30 seconds).
pub const READ_TIMEOUT_SECS: u64 = 30;
