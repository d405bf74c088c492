use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod assign;
mod cli;
mod config;
mod error;
mod notify;
mod output;
mod roster;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if std::env::args_os().len() <= 1 {
        println!("Try split-reviews -h");
        return Ok(());
    }

    let cli = Cli::parse();

    // Initialize tracing - only show debug logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("split_reviews=debug")
    } else {
        EnvFilter::new("split_reviews=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli::run::execute(cli).await
}
