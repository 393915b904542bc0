//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::listing::DEFAULT_PAGE_SIZE;
use crate::core::route::View;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListingConfig {
    pub page_size: Option<usize>,
    pub featured_count: Option<usize>,
    pub start_view: Option<View>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FEATURED_COUNT: usize = 4;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub page_size: usize,
    pub featured_count: usize,
    pub start_view: View,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<FolioConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Folio Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://localhost:5000/api"   # Or set FOLIO_API_URL env var
# timeout_secs = 10

# [listing]
# page_size = 8
# featured_count = 4
# start_view = "featured"                  # "featured" or "all"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// CLI overrides (None = flag not given).
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub base_url: Option<&'a str>,
    pub view: Option<View>,
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FolioConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, std::env::var("FOLIO_API_URL").ok())
}

fn resolve_with_env(
    config: &FolioConfig,
    cli: &CliOverrides<'_>,
    env_base_url: Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .map(|s| s.to_string())
        .or(env_base_url)
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let start_view = cli
        .view
        .or(config.listing.start_view)
        .unwrap_or_default();

    ResolvedConfig {
        base_url,
        timeout: Duration::from_secs(config.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        page_size: config
            .listing
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .max(1),
        featured_count: config
            .listing
            .featured_count
            .unwrap_or(DEFAULT_FEATURED_COUNT)
            .max(1),
        start_view,
    }
}
