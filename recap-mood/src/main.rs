//! recap-mood - Music recap mood analysis service
//!
//! Accepts track ids (or raw feature records), averages their audio features
//! and returns a mood analysis for the presentation layer.

use anyhow::{Context, Result};
use clap::Parser;
use recap_common::config::{self, ServiceSettings, SettingsOverrides};
use recap_mood::source::{BatchSettings, FeatureSource, SoundStatClient};
use recap_mood::{build_router, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const MODULE_NAME: &str = "recap-mood";

#[derive(Parser, Debug)]
#[command(name = "recap-mood", version, about = "Music recap mood analysis service")]
struct Args {
    /// TOML config file (default: ~/.config/recap/recap-mood.toml)
    #[arg(long, env = "RECAP_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, env = "RECAP_BIND_ADDRESS")]
    bind_address: Option<String>,

    #[arg(long, env = "RECAP_PORT")]
    port: Option<u16>,

    /// SoundStat API key (also read from SOUNDSTAT_API_KEY)
    #[arg(long)]
    soundstat_api_key: Option<String>,

    #[arg(long, env = "RECAP_SOUNDSTAT_BASE_URL")]
    soundstat_base_url: Option<String>,

    /// Maximum track ids analyzed per request
    #[arg(long)]
    max_tracks: Option<usize>,

    /// Track ids fetched concurrently per batch
    #[arg(long)]
    batch_size: Option<usize>,

    /// Pause between batches in milliseconds
    #[arg(long)]
    batch_delay_ms: Option<u64>,

    /// Default log level when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            bind_address: self.bind_address.clone(),
            port: self.port,
            soundstat_base_url: self.soundstat_base_url.clone(),
            max_tracks: self.max_tracks,
            batch_size: self.batch_size,
            batch_delay_ms: self.batch_delay_ms,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read before tracing exists so the file can set the log level;
    // its outcome is logged below, after the subscriber is installed
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => config::default_config_path(MODULE_NAME)?,
    };
    let config_present = config_path.exists();
    let toml_config = config::load_or_default(&config_path)?;
    let settings = ServiceSettings::resolve(&args.overrides(), &toml_config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .init();

    // Build identification first, before anything else can delay startup
    info!(
        "Starting recap-mood v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    if config_present {
        info!("Loaded configuration from {}", config_path.display());
    } else {
        warn!("Config file not found at {}, using compiled defaults", config_path.display());
    }

    let source: Option<Arc<dyn FeatureSource>> =
        match config::resolve_soundstat_api_key(args.soundstat_api_key.as_deref(), &toml_config) {
            Ok(key) => {
                let client = SoundStatClient::new(key, settings.soundstat_base_url.clone())
                    .context("Failed to build SoundStat client")?;
                info!("SoundStat source: {}", settings.soundstat_base_url);
                Some(Arc::new(client) as Arc<dyn FeatureSource>)
            }
            Err(e) => {
                warn!("{}", e);
                warn!("/api/audio-features will be unavailable; /api/mood-analysis still works");
                None
            }
        };

    let batch = BatchSettings {
        batch_size: settings.batch_size,
        batch_delay: Duration::from_millis(settings.batch_delay_ms),
    };
    info!(
        "Analysis limits: max_tracks={}, batch_size={}, batch_delay={}ms",
        settings.max_tracks, settings.batch_size, settings.batch_delay_ms
    );

    let state = AppState::new(source, batch, settings.max_tracks);
    let app = build_router(state);

    let address = settings.listen_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("recap-mood listening on http://{}", address);
    info!("Health check: http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
