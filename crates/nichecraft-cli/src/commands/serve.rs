//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use nichecraft_core::StudioConfig;

pub async fn cmd_serve(
    config: StudioConfig,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting Nichecraft web server...");
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    println!(
        "   Step delay: {} ms, research delay: {} ms",
        config.generation.step_delay.as_millis(),
        config.research.delay.as_millis()
    );

    let server_config = nichecraft_server::ServerConfig::new(config).with_origins_from_env();
    if !server_config.allowed_origins.is_empty() {
        println!(
            "   🌐 Allowed origins: {} ({})",
            server_config.allowed_origins.join(", "),
            nichecraft_server::ALLOWED_ORIGINS_ENV
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let static_dir_str = static_dir
        .map(|p| p.to_str().context("static_dir path must be valid UTF-8"))
        .transpose()?;
    nichecraft_server::serve_with_config(host, port, static_dir_str, server_config).await?;

    Ok(())
}
