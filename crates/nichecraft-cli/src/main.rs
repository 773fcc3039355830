//! Nichecraft CLI - Digital product studio
//!
//! Usage:
//!   nichecraft research "productivity planner"   Find market opportunities
//!   nichecraft generate --type ebook Mindfulness  Generate a product
//!   nichecraft types                              List product types
//!   nichecraft serve --port 3000                  Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
        } => commands::cmd_serve(config, &host, port, static_dir.as_deref()).await,
        Commands::Research { category, json } => {
            commands::cmd_research(&config, &category, json).await
        }
        Commands::Generate {
            product_type,
            topic,
            json,
        } => commands::cmd_generate(&config, &product_type, &topic, json).await,
        Commands::Types { json } => commands::cmd_types(json),
    }
}
