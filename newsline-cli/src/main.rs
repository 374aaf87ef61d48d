//! Newsline CLI - Command-line interface
//!
//! Starts the article search API server or runs one-off searches.

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "newsline")]
#[command(about = "A tech-article search service")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    commands::handle_command(cli.command).await
}
