//! Track feature sources
//!
//! A [`FeatureSource`] resolves one track id to its [`AudioFeatures`].
//! [`collect_features`] fetches a list of ids in small concurrent batches and
//! drops tracks whose fetch fails, so callers must not assume one feature
//! vector per requested id. Retries are the source's business, not ours.

pub mod soundstat;

pub use soundstat::SoundStatClient;

use crate::features::AudioFeatures;
use async_trait::async_trait;
use futures::future::join_all;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Feature source errors
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Track not known to the source
    #[error("Track not found: {0}")]
    NotFound(String),

    /// Source returned an error response
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Failed to parse response JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Track known but no analysis available yet
    #[error("No analysis available for track {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait FeatureSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    async fn fetch_features(&self, track_id: &str) -> Result<AudioFeatures, SourceError>;
}

/// Batching parameters for [`collect_features`]
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSettings {
    /// Ids fetched concurrently per batch (values below 1 are treated as 1)
    pub batch_size: usize,
    /// Pause between consecutive batches
    pub batch_delay: Duration,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            batch_size: recap_common::config::DEFAULT_BATCH_SIZE,
            batch_delay: Duration::from_millis(recap_common::config::DEFAULT_BATCH_DELAY_MS),
        }
    }
}

/// Fetch features for `track_ids`, keeping successes in input order
pub async fn collect_features(
    source: &dyn FeatureSource,
    track_ids: &[String],
    settings: &BatchSettings,
) -> Vec<AudioFeatures> {
    let batch_size = settings.batch_size.max(1);
    let batch_count = track_ids.len().div_ceil(batch_size);
    let mut collected = Vec::with_capacity(track_ids.len());

    info!(
        "Processing {} tracks for audio analysis via {}",
        track_ids.len(),
        source.name()
    );

    for (index, batch) in track_ids.chunks(batch_size).enumerate() {
        debug!("Processing batch {}/{}", index + 1, batch_count);

        let results = join_all(batch.iter().map(|id| source.fetch_features(id))).await;

        for (id, result) in batch.iter().zip(results) {
            match result {
                Ok(features) => {
                    debug!("Fetched features for track {}", id);
                    collected.push(features);
                }
                Err(e) => warn!("Failed to fetch features for track {}: {}", id, e),
            }
        }

        if index + 1 < batch_count && !settings.batch_delay.is_zero() {
            tokio::time::sleep(settings.batch_delay).await;
        }
    }

    info!(
        "Fetched {} out of {} audio features",
        collected.len(),
        track_ids.len()
    );
    collected
}
