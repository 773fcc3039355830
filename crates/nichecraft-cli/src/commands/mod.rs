//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `catalog` - Product type listing
//! - `generate` - Product generation with live progress
//! - `research` - Market research for a category
//! - `serve` - Web server command

pub mod catalog;
pub mod generate;
pub mod research;
pub mod serve;

// Re-export command functions for main.rs
pub use catalog::*;
pub use generate::*;
pub use research::*;
pub use serve::*;

use std::path::Path;

use anyhow::{Context, Result};
use nichecraft_core::StudioConfig;

/// Load studio config from an explicit path, or the default resolution chain
pub fn load_config(path: Option<&Path>) -> Result<StudioConfig> {
    match path {
        Some(path) => StudioConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => StudioConfig::load().context("Failed to load studio config"),
    }
}

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
