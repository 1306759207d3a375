//! TVMaze API response types for deserialization.
//!
//! These structures mirror the JSON response format from the TVMaze API.

use super::Show;
use serde::Deserialize;

/// One element of the array returned by the TVMaze search endpoint.
///
/// The relevance `score` next to the show is not needed and left to serde's
/// unknown-field handling.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchEntry {
    /// The matched show (may be absent in malformed responses)
    pub show: Option<Show>,
}
