//! Folio CLI - Command-line interface
//!
//! Provides command-line access to Folio paper search.

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "An arXiv research paper search service")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    commands::handle_command(cli.command).await?;

    Ok(())
}
