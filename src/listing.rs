//! Show listing page
//!
//! Searches the shared data client for shows and renders them as a list of
//! links, each pointing to the show's detail route.

use crate::ShowListingError;
use crate::html::{capitalize, encode_path_segment, encode_query_value, escape};
use crate::shell::{Page, ShellContext};
use crate::show_search::{Show, ShowId, ShowSearchProvider};

/// Search term used when none is configured
pub const DEFAULT_QUERY: &str = "batman";

/// Navigation target of a show's detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRoute {
    /// The routed target, `/post?id=<id>`
    pub href: String,
    /// The path displayed to the user, `/p/<id>`
    pub alias: String,
}

impl DetailRoute {
    /// Builds the detail route for the given show id
    pub fn for_show(id: &ShowId) -> Self {
        let id = id.to_string();
        Self {
            href: format!("/post?id={}", encode_query_value(&id)),
            alias: format!("/p/{}", encode_path_segment(&id)),
        }
    }
}

/// Resolved props of the listing page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShowListProps {
    /// Shows in the order the search returned them
    pub shows: Vec<Show>,
}

/// The show listing page
#[derive(Debug, Clone)]
pub struct ListingPage {
    query: String,
}

impl Default for ListingPage {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY)
    }
}

impl ListingPage {
    /// Creates a listing page searching for the given term
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Returns the search term of this page
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the page heading, e.g. "Batman TV Shows"
    pub fn heading(&self) -> String {
        format!("{} TV Shows", capitalize(self.query.trim()))
    }

    /// Renders one list entry linking to the show's detail route
    fn render_show_link(out: &mut String, show: &Show) {
        let route = DetailRoute::for_show(&show.id);
        out.push_str(&format!(
            "<li data-key=\"{key}\"><a href=\"{alias}\" data-route=\"{href}\">{name}</a></li>\n",
            key = escape(&show.id.to_string()),
            alias = escape(&route.alias),
            href = escape(&route.href),
            name = escape(&show.name),
        ));
    }
}

impl<C> Page<C> for ListingPage
where
    C: ShowSearchProvider,
{
    type Props = ShowListProps;

    fn title(&self) -> String {
        self.heading()
    }

    async fn initial_props(&self, client: &C) -> Result<ShowListProps, ShowListingError> {
        let shows = client.search_shows(&self.query).await?;
        Ok(ShowListProps { shows })
    }

    fn render(&self, _context: &ShellContext<'_, C>, props: &ShowListProps) -> String {
        let mut out = String::new();
        out.push_str(&format!("<h1>{}</h1>\n", escape(&self.heading())));
        out.push_str("<ul>\n");
        for show in &props.shows {
            Self::render_show_link(&mut out, show);
        }
        out.push_str("</ul>\n");
        out
    }
}
