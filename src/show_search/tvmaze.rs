//! TVMaze show search client implementation.

use super::tvmaze_types::TvMazeSearchEntry;
use super::{Show, ShowSearchError, ShowSearchProvider};

/// Default root of the TVMaze API.
const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// User agent sent with every request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Data client for the TVMaze API.
///
/// This client searches shows via https://api.tvmaze.com using the
/// `search/shows` endpoint. One instance is meant to be created per process
/// and shared by reference.
#[derive(Debug)]
pub struct TvMazeClient {
    client: reqwest::Client,
    base_url: String,
}

impl TvMazeClient {
    /// Creates a new TVMaze client talking to the public API.
    ///
    /// # Errors
    ///
    /// Returns `ShowSearchError::ClientBuild` if the underlying HTTP client
    /// cannot be initialized.
    pub fn new() -> Result<Self, ShowSearchError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new TVMaze client talking to the given API root.
    ///
    /// Used for local mirrors and for pointing the client at a mock server.
    /// A trailing slash on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ShowSearchError::ClientBuild` if the underlying HTTP client
    /// cannot be initialized.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ShowSearchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ShowSearchError::ClientBuild(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Returns the API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Parses the body of a search response into shows.
    ///
    /// The body has to be a JSON array of entries each carrying a `show`
    /// object. The number of fetched entries is logged before any entry is
    /// converted, so the reported count is always the raw array length.
    pub(crate) fn parse_search_response(body: &str) -> Result<Vec<Show>, ShowSearchError> {
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(body).map_err(|e| ShowSearchError::ParseError(e.to_string()))?;

        tracing::info!("Show data fetched. Count: {}", entries.len());

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Self::convert_entry(index, entry))
            .collect()
    }

    /// Converts one raw search entry to a show.
    fn convert_entry(index: usize, entry: serde_json::Value) -> Result<Show, ShowSearchError> {
        let entry: TvMazeSearchEntry = serde_json::from_value(entry)
            .map_err(|e| ShowSearchError::ParseError(format!("search result #{index}: {e}")))?;

        let show = entry.show.ok_or(ShowSearchError::MissingShow { index })?;

        if show.id.is_empty() {
            return Err(ShowSearchError::InvalidData(format!(
                "show '{}' at search result #{} has an empty id",
                show.name, index
            )));
        }

        Ok(show)
    }
}

impl ShowSearchProvider for TvMazeClient {
    async fn search_shows(&self, query: &str) -> Result<Vec<Show>, ShowSearchError> {
        // Build the API URL
        let url = format!("{}/search/shows", self.base_url);

        tracing::debug!(url = %url, query, "TVMaze search request");

        // Make the HTTP request with the search term as query parameter
        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| ShowSearchError::RequestError(e.to_string()))?;

        // Ensure request was successful
        if !response.status().is_success() {
            return Err(ShowSearchError::RequestError(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        // Read the body and parse the JSON response
        let body = response
            .text()
            .await
            .map_err(|e| ShowSearchError::RequestError(e.to_string()))?;

        Self::parse_search_response(&body)
    }
}
