//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.scrollfeed/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::Backend;
use crate::core::state::{DEFAULT_PRELOAD_BATCH_SIZE, DEFAULT_PRELOAD_THRESHOLD, QueueSettings};
use crate::feed::clients::DEFAULT_ROTATING_URLS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub feed: BackendConfig,
    #[serde(default)]
    pub rotating: RotatingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QueueConfig {
    pub preload_threshold: Option<usize>,
    pub preload_batch_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub backend: Option<Backend>,
    pub base_url: Option<String>,
    pub auth_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RotatingConfig {
    pub urls: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_BASE_URL: &str = "SCROLLFEED_BASE_URL";
pub const ENV_AUTH_TOKEN: &str = "SCROLLFEED_AUTH_TOKEN";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub backend: Backend,
    pub base_url: String,
    pub auth_token: Option<String>,
    pub timeout: Duration,
    pub rotating_urls: Vec<String>,
    pub queue: QueueSettings,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub backend: Option<Backend>,
    pub base_url: Option<String>,
    pub preload_threshold: Option<usize>,
    pub preload_batch_size: Option<usize>,
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

/// Returns the path to `~/.scrollfeed/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".scrollfeed").join("config.toml"))
}

/// Load config from `~/.scrollfeed/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FeedConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FeedConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FeedConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FeedConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<FeedConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# scrollfeed configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [queue]
# preload_threshold = 2       # fetch more when fewer unseen items remain
# preload_batch_size = 5      # items requested per fetch (advisory)

# [feed]
# backend = "http"            # "http" or "rotating"
# base_url = "http://localhost:3000/api"   # Or set SCROLLFEED_BASE_URL
# auth_token = "..."          # Or set SCROLLFEED_AUTH_TOKEN
# timeout_secs = 10

# [rotating]
# urls = ["https://example.com/a", "https://example.com/b"]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FeedConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &FeedConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let backend = cli.backend.or(config.feed.backend).unwrap_or_default();

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env(ENV_BASE_URL))
        .or_else(|| config.feed.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Token: env → config
    let auth_token = env(ENV_AUTH_TOKEN)
        .or_else(|| config.feed.auth_token.clone())
        .filter(|t| !t.is_empty());

    let timeout = Duration::from_secs(config.feed.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

    let rotating_urls = config.rotating.urls.clone().unwrap_or_else(|| {
        DEFAULT_ROTATING_URLS.iter().map(|u| u.to_string()).collect()
    });

    let preload_threshold = cli
        .preload_threshold
        .or(config.queue.preload_threshold)
        .unwrap_or(DEFAULT_PRELOAD_THRESHOLD);

    let mut preload_batch_size = cli
        .preload_batch_size
        .or(config.queue.preload_batch_size)
        .unwrap_or(DEFAULT_PRELOAD_BATCH_SIZE);
    if preload_batch_size == 0 {
        warn!("preload_batch_size of 0 is meaningless, using 1");
        preload_batch_size = 1;
    }

    ResolvedConfig {
        backend,
        base_url,
        auth_token,
        timeout,
        rotating_urls,
        queue: QueueSettings {
            preload_threshold,
            preload_batch_size,
        },
    }
}
