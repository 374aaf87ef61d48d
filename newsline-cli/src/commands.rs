//! CLI command implementations

use anyhow::Context;
use clap::Subcommand;
use newsline_core::config::NewslineConfig;
use newsline_core::mode::RuntimeMode;
use newsline_search::ArticleSearchService;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the article search API server
    Server {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,
        /// Serve demo fixtures instead of the live index
        #[arg(long)]
        demo: bool,
    },
    /// Run a one-off article search and print the results
    Search {
        /// Free-text query
        query: String,
        /// Hashtag filter, repeatable
        #[arg(long = "hashtag")]
        hashtags: Vec<String>,
        /// Company filter
        #[arg(long, default_value = "")]
        company: String,
        /// Zero-based page number
        #[arg(long, default_value = "0")]
        page: u32,
        /// Page size
        #[arg(short, long, default_value = "10")]
        size: u32,
        /// Search demo fixtures instead of the live index
        #[arg(long)]
        demo: bool,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Server { host, port, demo } => start_server(host, port, demo).await,
        Commands::Search {
            query,
            hashtags,
            company,
            page,
            size,
            demo,
        } => search_articles(query, hashtags, company, page, size, demo).await,
    }
}

/// Picks the runtime mode: `--demo` wins, otherwise the configured mode.
fn select_mode(demo: bool, configured: RuntimeMode) -> RuntimeMode {
    if demo {
        RuntimeMode::Development
    } else {
        configured
    }
}

/// Start the article search API server
async fn start_server(host: String, port: u16, demo: bool) -> anyhow::Result<()> {
    let mut config = NewslineConfig::from_env();
    config.server.host = host;
    config.server.port = port;
    let mode = select_mode(demo, config.mode);

    println!("Starting Newsline API server...");
    println!(
        "URL: http://{}:{}",
        config.server.host, config.server.port
    );
    println!("Mode: {mode}");
    println!("{:-<50}", "");
    println!("Articles: /api/articles");
    println!("Companies: /api/companies");
    println!("Health: /api/health");
    println!();
    println!("Press Ctrl+C to stop the server");

    newsline_web::run_server(config, mode)
        .await
        .context("api server exited with an error")
}

/// Run one search against the configured backend and print the result page
async fn search_articles(
    query: String,
    hashtags: Vec<String>,
    company: String,
    page: u32,
    size: u32,
    demo: bool,
) -> anyhow::Result<()> {
    let config = NewslineConfig::from_env();
    let mode = select_mode(demo, config.mode);
    let service = ArticleSearchService::from_runtime_mode(mode, &config.search);

    let content = service
        .article_infos(&hashtags, &company, &query, page, size)
        .await
        .context("article search failed")?;

    println!(
        "{} matching articles (page {}, size {})",
        content.total, content.page, content.size
    );
    println!("{:-<60}", "");

    if content.articles.is_empty() {
        println!("No articles on this page.");
        return Ok(());
    }

    for article in &content.articles {
        println!("{}  [{}]", article.title, article.company);
        println!("  {}", article.url);
        if !article.hashtags.is_empty() {
            println!("  #{}", article.hashtags.join(" #"));
        }
    }

    Ok(())
}
