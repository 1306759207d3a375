//! Data structures and traits for TV show search.
//!
//! This module provides the `Show` record as delivered by a search API, and
//! the `ShowSearchProvider` trait implemented by the data clients that can
//! perform such a search.

mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeClient;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during show search operations.
#[derive(Debug, Error)]
pub enum ShowSearchError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Request to the search provider failed
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Failed to parse the provider's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// A search result entry did not contain a show
    #[error("Search result #{index} has no show")]
    MissingShow { index: usize },

    /// The API returned invalid or unexpected data
    #[error("API returned invalid data: {0}")]
    InvalidData(String),
}

/// Identifier of a show.
///
/// Search APIs deliver either numeric or textual identifiers. The display
/// form is used verbatim as render key and navigation parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShowId {
    /// Numeric identifier (TVMaze uses these), kept exactly as received
    Number(serde_json::Number),
    /// Textual identifier
    Text(String),
}

impl ShowId {
    /// Returns true if the identifier has no usable content
    pub fn is_empty(&self) -> bool {
        match self {
            ShowId::Number(_) => false,
            ShowId::Text(text) => text.is_empty(),
        }
    }
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowId::Number(number) => write!(f, "{number}"),
            ShowId::Text(text) => f.write_str(text),
        }
    }
}

/// A single TV show as returned by a search.
///
/// Only `id` and `name` are interpreted. Every other attribute of the API
/// object is kept untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Unique identifier of the show
    pub id: ShowId,
    /// Display name of the show
    pub name: String,
    /// Remaining attributes, passed through unused
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Trait for data clients that can search for TV shows.
///
/// Implementors of this trait perform exactly one lookup per call. There is
/// no caching, retrying or pagination involved.
#[allow(async_fn_in_trait)]
pub trait ShowSearchProvider {
    /// Searches for shows matching the given query.
    ///
    /// # Arguments
    ///
    /// * `query` - The free text search term
    ///
    /// # Returns
    ///
    /// The matching shows in the order the provider returned them, or a
    /// ShowSearchError if any part of the lookup failed. Failure is total:
    /// no partial result is ever returned.
    async fn search_shows(&self, query: &str) -> Result<Vec<Show>, ShowSearchError>;
}
