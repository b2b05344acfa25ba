//! CLI command implementations

use anyhow::{Context, anyhow};
use clap::Subcommand;
use folio_search::query::parse_categories;
use folio_search::{
    MAX_PAGE_SIZE, PaperSearchService, RuntimeMode, SearchConfig, SearchRequest, SortOrder,
};
use folio_web::WebServerConfig;
use tracing::debug;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Server {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Serve deterministic demo data instead of querying arXiv
        #[arg(long)]
        demo: bool,
    },
    /// Run a one-shot paper search and print the results
    Search {
        /// Free-text query
        query: String,
        /// Zero-based offset of the first result
        #[arg(long, default_value = "0")]
        start: u64,
        /// Number of results to fetch
        #[arg(short, long, default_value = "10")]
        max_results: u64,
        /// Sort order: relevance, date_new or date_old
        #[arg(short, long, default_value = "relevance")]
        sort: String,
        /// Comma-separated arXiv category codes, e.g. cs,math
        #[arg(long)]
        categories: Option<String>,
        /// Search demo data instead of querying arXiv
        #[arg(long)]
        demo: bool,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns an error when the server fails to start or a search cannot
/// be completed.
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Server { host, port, demo } => start_server(host, port, demo).await,
        Commands::Search {
            query,
            start,
            max_results,
            sort,
            categories,
            demo,
        } => run_search(query, start, max_results, sort, categories, demo).await,
    }
}

/// Start the web server for the search UI and API
///
/// # Errors
/// Returns an error when the listen address is unavailable or the
/// server fails while serving.
pub async fn start_server(host: String, port: u16, demo: bool) -> anyhow::Result<()> {
    let mode = if demo {
        RuntimeMode::Development
    } else {
        RuntimeMode::Production
    };

    println!("Starting Folio web server...");
    println!("URL: http://{host}:{port}");
    if demo {
        println!("Mode: Demo (serving fixture data)");
    } else {
        println!("Mode: Production");
    }
    println!("{:-<50}", "");

    let config = WebServerConfig {
        bind_address: format!("{host}:{port}"),
    };

    folio_web::run_server(config, mode)
        .await
        .map_err(|e| anyhow!("web server failed: {e}"))
}

/// Run one search against arXiv (or the demo fixtures) and print it
///
/// # Errors
/// Returns an error for an unknown sort order or a failed search.
pub async fn run_search(
    query: String,
    start: u64,
    max_results: u64,
    sort: String,
    categories: Option<String>,
    demo: bool,
) -> anyhow::Result<()> {
    let sort = sort.parse::<SortOrder>().map_err(|e| anyhow!(e))?;
    let request = SearchRequest {
        query,
        start,
        max_results: max_results.clamp(1, MAX_PAGE_SIZE),
        sort,
        categories: categories.as_deref().map(parse_categories).unwrap_or_default(),
    };
    debug!("search request: {request:?}");

    let service = if demo {
        PaperSearchService::new_demo()
    } else {
        PaperSearchService::new(SearchConfig::from_env())
    };
    let page = service.search(&request).await.context("search failed")?;

    println!(
        "{} results for \"{}\"",
        page.metadata.total_results, request.query
    );
    println!("{:-<60}", "");

    if page.entries.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    for entry in &page.entries {
        let authors = entry
            .authors
            .iter()
            .map(|author| author.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        println!("{}", entry.title);
        if let Some(id) = entry.arxiv_id() {
            println!("  arXiv: {id}");
        }
        println!("  Published: {}", entry.published);
        if !authors.is_empty() {
            println!("  Authors: {authors}");
        }
        println!("  {}", entry.id);
        println!();
    }

    let shown_to = (request.start + page.entries.len() as u64).min(page.metadata.total_results);
    println!(
        "Showing {} - {} of {} results",
        request.start + 1,
        shown_to,
        page.metadata.total_results
    );

    Ok(())
}
