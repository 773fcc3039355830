//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nichecraft - Find profitable niches and generate digital products
#[derive(Parser)]
#[command(name = "nichecraft")]
#[command(about = "Digital product research and generation studio", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Studio config file (defaults to the data dir override, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Find market opportunities for a product category
    Research {
        /// Category or niche, e.g. "productivity planner"
        category: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a digital product for a topic
    Generate {
        /// Product type: ebook, journal, planner, coloring, workbook, template
        #[arg(short = 't', long = "type", default_value = "ebook")]
        product_type: String,

        /// Topic or niche of the product
        topic: String,

        /// Print each event as a JSON line
        #[arg(long)]
        json: bool,
    },

    /// List the product types that can be generated
    Types {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
