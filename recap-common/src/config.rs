//! Configuration loading and resolution
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is never fatal: the compiled defaults are used. Config
//! loads before tracing is initialized, so [`load_or_default`] does not log;
//! callers report the outcome once their subscriber is installed.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5740;
pub const DEFAULT_SOUNDSTAT_BASE_URL: &str = "https://soundstat.info/api/v1";
pub const DEFAULT_MAX_TRACKS: usize = 10;
pub const DEFAULT_BATCH_SIZE: usize = 5;
pub const DEFAULT_BATCH_DELAY_MS: u64 = 1000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding the SoundStat API key
pub const SOUNDSTAT_API_KEY_ENV: &str = "SOUNDSTAT_API_KEY";

/// Logging section of the TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// On-disk TOML configuration
///
/// Every field is optional so a partial file (or none at all) is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub soundstat_api_key: Option<String>,
    pub soundstat_base_url: Option<String>,
    /// Upper bound on track ids analyzed per request
    pub max_tracks: Option<usize>,
    /// Track ids fetched concurrently per batch
    pub batch_size: Option<usize>,
    /// Pause between batches, in milliseconds
    pub batch_delay_ms: Option<u64>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Per-user config file location: `~/.config/recap/<module>.toml`
pub fn default_config_path(module_name: &str) -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join("recap").join(format!("{}.toml", module_name)))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read TOML failed ({}): {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))
}

/// Load the config file if present, otherwise fall back to defaults
///
/// A malformed file is still an error.
pub fn load_or_default(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        return Ok(TomlConfig::default());
    }
    load_toml_config(path)
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

/// Resolve the SoundStat API key
///
/// **Priority:** CLI → ENV (`SOUNDSTAT_API_KEY`) → TOML
pub fn resolve_soundstat_api_key(
    cli_arg: Option<&str>,
    toml_config: &TomlConfig,
) -> Result<String> {
    let env_key = std::env::var(SOUNDSTAT_API_KEY_ENV).ok();
    let candidates = [
        ("command line", cli_arg.map(str::to_string)),
        ("environment", env_key),
        ("TOML", toml_config.soundstat_api_key.clone()),
    ];

    let valid: Vec<(&str, String)> = candidates
        .into_iter()
        .filter_map(|(source, key)| key.filter(|k| is_valid_key(k)).map(|k| (source, k)))
        .collect();

    // Warn if multiple sources (potential misconfiguration)
    if valid.len() > 1 {
        let sources: Vec<&str> = valid.iter().map(|(source, _)| *source).collect();
        warn!(
            "SoundStat API key found in multiple sources: {}. Using {} (highest priority).",
            sources.join(", "),
            sources[0]
        );
    }

    match valid.into_iter().next() {
        Some((source, key)) => {
            info!("SoundStat API key loaded from {}", source);
            Ok(key)
        }
        None => Err(Error::Config(format!(
            "SoundStat API key not configured. Please configure using one of:\n\
             1. Command line: --soundstat-api-key your-key-here\n\
             2. Environment: {}=your-key-here\n\
             3. TOML config: ~/.config/recap/recap-mood.toml (soundstat_api_key = \"your-key\")",
            SOUNDSTAT_API_KEY_ENV
        ))),
    }
}

/// Values supplied on the command line (or their env equivalents via clap)
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub soundstat_base_url: Option<String>,
    pub max_tracks: Option<usize>,
    pub batch_size: Option<usize>,
    pub batch_delay_ms: Option<u64>,
    pub log_level: Option<String>,
}

/// Fully resolved service settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSettings {
    pub bind_address: String,
    pub port: u16,
    pub soundstat_base_url: String,
    pub max_tracks: usize,
    pub batch_size: usize,
    pub batch_delay_ms: u64,
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            soundstat_base_url: DEFAULT_SOUNDSTAT_BASE_URL.to_string(),
            max_tracks: DEFAULT_MAX_TRACKS,
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay_ms: DEFAULT_BATCH_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServiceSettings {
    /// Merge overrides over the TOML file over compiled defaults
    pub fn resolve(overrides: &SettingsOverrides, toml_config: &TomlConfig) -> Result<Self> {
        let defaults = Self::default();

        let settings = Self {
            bind_address: overrides
                .bind_address
                .clone()
                .or_else(|| toml_config.bind_address.clone())
                .unwrap_or(defaults.bind_address),
            port: overrides.port.or(toml_config.port).unwrap_or(defaults.port),
            soundstat_base_url: overrides
                .soundstat_base_url
                .clone()
                .or_else(|| toml_config.soundstat_base_url.clone())
                .unwrap_or(defaults.soundstat_base_url),
            max_tracks: overrides
                .max_tracks
                .or(toml_config.max_tracks)
                .unwrap_or(defaults.max_tracks),
            batch_size: overrides
                .batch_size
                .or(toml_config.batch_size)
                .unwrap_or(defaults.batch_size),
            batch_delay_ms: overrides
                .batch_delay_ms
                .or(toml_config.batch_delay_ms)
                .unwrap_or(defaults.batch_delay_ms),
            log_level: overrides
                .log_level
                .clone()
                .unwrap_or_else(|| toml_config.logging.level.clone()),
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.max_tracks == 0 {
            return Err(Error::Config("max_tracks must be at least 1".to_string()));
        }
        if self.batch_size == 0 {
            return Err(Error::Config("batch_size must be at least 1".to_string()));
        }
        if self.soundstat_base_url.trim().is_empty() {
            return Err(Error::Config("soundstat_base_url must not be empty".to_string()));
        }
        Ok(())
    }

    /// `host:port` string for the listener
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
