use clap::Parser;
use show_listing::{DEFAULT_QUERY, Shell, ShowListingError, TvMazeClient, render_show_listing};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::filter::EnvFilter;

/// Fetch TV shows from the TVMaze search API and render them as an HTML list
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Search term sent to the show search
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    query: String,

    /// Root URL of the TVMaze API
    #[arg(long, default_value = "https://api.tvmaze.com")]
    base_url: String,

    /// Write the HTML document to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Installs the log subscriber, writing to stderr so stdout stays clean
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: &Cli) -> Result<(), ShowListingError> {
    // One client for the whole session, shared through the shell
    let client = TvMazeClient::with_base_url(&cli.base_url)?;
    let shell = Shell::new(client);

    let html = render_show_listing(&shell, &cli.query).await?;

    write_output(&html, cli.output.as_deref())
}

/// Writes the rendered document to the given file, or to stdout if none
fn write_output(html: &str, output: Option<&Path>) -> Result<(), ShowListingError> {
    match output {
        Some(path) => {
            fs::write(path, html)?;
            tracing::info!("Show listing written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["show_listing"]);
        assert_eq!(cli.query, "batman");
        assert_eq!(cli.base_url, "https://api.tvmaze.com");
        assert!(cli.output.is_none());
    }

    /// Returns a per-process path in the system temp directory
    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("show_listing_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_write_output_to_file() {
        let path = temp_path("write.html");

        write_output("<!DOCTYPE html>\n<p>x</p>\n", Some(&path)).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<!DOCTYPE html>\n<p>x</p>\n");

        // Cleanup
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_output_unwritable_path() {
        let path = temp_path("missing_dir").join("shows.html");

        let result = write_output("<p>x</p>", Some(&path));

        assert!(matches!(result, Err(ShowListingError::Io(_))));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_run_writes_rendered_document() {
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/search/shows"))
            .and(wiremock::matchers::query_param("q", "batman"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_string(r#"[{"show": {"id": 1, "name": "Batman"}}]"#),
            )
            .expect(2)
            .mount(&mock_server)
            .await;

        let path = temp_path("run.html");
        let cli = Cli {
            query: DEFAULT_QUERY.to_string(),
            base_url: mock_server.uri(),
            output: Some(path.clone()),
        };

        run(&cli).await.unwrap();

        let shell = Shell::new(TvMazeClient::with_base_url(mock_server.uri()).unwrap());
        let expected = render_show_listing(&shell, DEFAULT_QUERY).await.unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, expected);
        assert!(written.contains("<a href=\"/p/1\" data-route=\"/post?id=1\">Batman</a>"));

        // Cleanup
        fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_run_fails_on_unwritable_output() {
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/search/shows"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&mock_server)
            .await;

        let cli = Cli {
            query: DEFAULT_QUERY.to_string(),
            base_url: mock_server.uri(),
            output: Some(temp_path("absent_dir").join("shows.html")),
        };

        let result = run(&cli).await;

        assert!(matches!(result, Err(ShowListingError::Io(_))));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "show_listing",
            "--query",
            "superman",
            "--base-url",
            "http://localhost:8080",
            "-o",
            "shows.html",
        ]);
        assert_eq!(cli.query, "superman");
        assert_eq!(cli.base_url, "http://localhost:8080");
        assert_eq!(cli.output, Some(PathBuf::from("shows.html")));
    }
}
