//! Studio configuration
//!
//! Controls the simulated timings of the research and generation services and
//! the placeholder download link handed out with generated products.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/nichecraft/config/studio.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Environment variables are applied on top of whichever file was used:
//! - `NICHECRAFT_STEP_DELAY_MS`: pause after each generation progress step
//! - `NICHECRAFT_RESEARCH_DELAY_MS`: simulated research processing time

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/studio.toml");

pub const STEP_DELAY_ENV: &str = "NICHECRAFT_STEP_DELAY_MS";
pub const RESEARCH_DELAY_ENV: &str = "NICHECRAFT_RESEARCH_DELAY_MS";

/// Generation pipeline settings
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Pause after each progress step
    pub step_delay: Duration,
    /// Static placeholder link attached to every generated product
    pub download_url: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(1500),
            download_url: "/api/download/sample-product.pdf".to_string(),
        }
    }
}

/// Market research settings
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchConfig {
    /// Simulated processing time before results are returned
    pub delay: Duration,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudioConfig {
    pub generation: GenerationConfig,
    pub research: ResearchConfig,
}

impl StudioConfig {
    /// Load from the default override location (or embedded defaults) and apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = load_config(None)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from an explicit path and apply env overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = load_config(Some(path))?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse config from TOML content, filling gaps with defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }

    /// Configuration with no artificial delays (tests, scripted CLI use)
    pub fn instant() -> Self {
        Self {
            generation: GenerationConfig {
                step_delay: Duration::ZERO,
                ..Default::default()
            },
            research: ResearchConfig {
                delay: Duration::ZERO,
            },
        }
    }

    /// Apply overrides from a key lookup (normally the process environment)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ms) = parse_millis(STEP_DELAY_ENV, lookup(STEP_DELAY_ENV)) {
            self.generation.step_delay = ms;
        }
        if let Some(ms) = parse_millis(RESEARCH_DELAY_ENV, lookup(RESEARCH_DELAY_ENV)) {
            self.research.delay = ms;
        }
    }
}

fn parse_millis(key: &str, value: Option<String>) -> Option<Duration> {
    let value = value?;
    match value.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => {
            warn!(key, value = %value, "Ignoring non-numeric delay override");
            None
        }
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("nichecraft").join("config").join("studio.toml"))
}

/// Load configuration (override first, then default)
fn load_config(override_path: Option<&Path>) -> Result<StudioConfig> {
    let path = match override_path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path(),
    };

    let content = match path {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "Loading studio config");
            fs::read_to_string(&path)?
        }
        _ => DEFAULT_CONFIG.to_string(),
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    generation: Option<RawGeneration>,
    research: Option<RawResearch>,
}

#[derive(Debug, Deserialize)]
struct RawGeneration {
    step_delay_ms: Option<u64>,
    download_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawResearch {
    delay_ms: Option<u64>,
}

fn parse_config(content: &str) -> Result<StudioConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::InvalidData(format!("Invalid config TOML: {}", e)))?;

    let mut config = StudioConfig::default();

    if let Some(generation) = raw.generation {
        if let Some(ms) = generation.step_delay_ms {
            config.generation.step_delay = Duration::from_millis(ms);
        }
        if let Some(url) = generation.download_url {
            config.generation.download_url = url;
        }
    }

    if let Some(research) = raw.research {
        if let Some(ms) = research.delay_ms {
            config.research.delay = Duration::from_millis(ms);
        }
    }

    Ok(config)
}
