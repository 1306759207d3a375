//! show_listing - Render TV show search results as a list of links
//!
//! This library fetches shows from the TVMaze search API through one shared
//! data client and renders them as an HTML page, each show linking to its
//! detail route.

mod html;
mod listing;
mod shell;
mod show_search;

pub use listing::{DEFAULT_QUERY, DetailRoute, ListingPage, ShowListProps};
pub use shell::{Page, Shell, ShellContext};
pub use show_search::{Show, ShowId, ShowSearchProvider, TvMazeClient};

// Re-export error types
pub use show_search::ShowSearchError;

use std::io;
use thiserror::Error;

/// Top-level error type for show listing operations
#[derive(Debug, Error)]
pub enum ShowListingError {
    /// Error during show search
    #[error("Show search error: {0}")]
    ShowSearch(#[from] ShowSearchError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Loads the show listing for the given query and renders it
///
/// The listing page performs one search through the shell's client; the
/// rendered HTML document is only produced once that search has completed.
///
/// # Arguments
///
/// * `shell` - The application shell owning the shared data client
/// * `query` - The search term, e.g. `DEFAULT_QUERY`
///
/// # Returns
///
/// The complete HTML document, or the error that prevented loading it
///
/// # Examples
///
/// ```no_run
/// use show_listing::{render_show_listing, Shell, TvMazeClient, DEFAULT_QUERY};
///
/// # async fn run() -> Result<(), show_listing::ShowListingError> {
/// let shell = Shell::new(TvMazeClient::new()?);
/// let html = render_show_listing(&shell, DEFAULT_QUERY).await?;
/// println!("{}", html);
/// # Ok(())
/// # }
/// ```
pub async fn render_show_listing<C>(shell: &Shell<C>, query: &str) -> Result<String, ShowListingError>
where
    C: ShowSearchProvider,
{
    shell.load_and_render(&ListingPage::new(query)).await
}
