//! Application shell module
//!
//! The shell owns the single data client of the application and wraps every
//! page in a common HTML document. Pages never construct clients themselves;
//! they receive the shell's client through a `ShellContext`.

use crate::ShowListingError;
use crate::html::escape;

/// Stylesheet shared by all pages rendered through the shell.
const STYLESHEET: &str = "\
h1, a { font-family: \"Arial\"; }
ul { padding: 0; }
li { list-style: none; margin: 5px 0; }
a { text-decoration: none; color: blue; }
a:hover { opacity: 0.6; }";

/// Trait for pages rendered inside the shell
///
/// A page declares an initial-data-fetch step (`initial_props`) whose result
/// is required before the page can be rendered. Sequencing the two steps is
/// the caller's responsibility, usually `Shell::load_and_render`.
#[allow(async_fn_in_trait)]
pub trait Page<C> {
    /// The resolved data the page renders from
    type Props;

    /// Returns the document title of the page
    fn title(&self) -> String;

    /// Loads the page's initial props using the shared client
    ///
    /// # Errors
    ///
    /// Any failure of the underlying data fetch is returned unchanged.
    async fn initial_props(&self, client: &C) -> Result<Self::Props, ShowListingError>;

    /// Renders the page body from resolved props
    fn render(&self, context: &ShellContext<'_, C>, props: &Self::Props) -> String;
}

/// View of the shell handed to pages while they render
///
/// Gives every page access to the one shared client.
#[derive(Debug)]
pub struct ShellContext<'a, C> {
    client: &'a C,
}

impl<'a, C> ShellContext<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Returns the shared client
    pub fn client(&self) -> &'a C {
        self.client
    }
}

/// The application shell
///
/// Constructed once per process around an already constructed client and
/// kept for the lifetime of the application.
#[derive(Debug)]
pub struct Shell<C> {
    client: C,
}

impl<C> Shell<C> {
    /// Creates a new shell providing the given client to all pages
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Returns the shared client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Renders a page with resolved props inside the shell's document
    pub fn render_page<P>(&self, page: &P, props: &P::Props) -> String
    where
        P: Page<C>,
    {
        let context = ShellContext::new(&self.client);
        let body = page.render(&context, props);

        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>{title}</title>\n\
             <style>\n{STYLESHEET}\n</style>\n\
             </head>\n\
             <body>\n\
             <div id=\"shell\">\n{body}</div>\n\
             </body>\n\
             </html>\n",
            title = escape(&page.title()),
        )
    }

    /// Loads a page's initial props and renders it
    ///
    /// The page is only rendered once its props are fully resolved. If
    /// loading fails, the error is returned and nothing is rendered.
    ///
    /// # Errors
    ///
    /// Returns whatever error the page's `initial_props` produced.
    pub async fn load_and_render<P>(&self, page: &P) -> Result<String, ShowListingError>
    where
        P: Page<C>,
    {
        let props = page.initial_props(&self.client).await?;
        Ok(self.render_page(page, &props))
    }
}
