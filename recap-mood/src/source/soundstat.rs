//! SoundStat API client
//!
//! Fetches per-track audio analysis from `GET /track/{id}`. A track whose
//! analysis is not ready is reported as [`SourceError::Unavailable`]; this
//! client does not poll or retry.

use super::{FeatureSource, SourceError};
use crate::features::{AudioFeatures, DEFAULT_TIME_SIGNATURE};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("recap-mood/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Track analysis response (only the fields we use)
#[derive(Debug, Clone, Deserialize)]
pub struct SoundStatTrack {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub features: Option<SoundStatFeatures>,
}

/// Nested `features` object of a track analysis
#[derive(Debug, Clone, Deserialize)]
pub struct SoundStatFeatures {
    pub tempo: f64,
    pub key: i32,
    pub mode: i32,
    pub energy: f64,
    pub danceability: f64,
    pub valence: f64,
    pub instrumentalness: f64,
    pub acousticness: f64,
    pub loudness: f64,
}

impl From<SoundStatFeatures> for AudioFeatures {
    fn from(f: SoundStatFeatures) -> Self {
        Self {
            danceability: f.danceability,
            energy: f.energy,
            valence: f.valence,
            tempo: f.tempo,
            acousticness: f.acousticness,
            instrumentalness: f.instrumentalness,
            loudness: f.loudness,
            key: f.key,
            mode: f.mode,
            // Not reported by SoundStat
            time_signature: DEFAULT_TIME_SIGNATURE,
        }
    }
}

pub struct SoundStatClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SoundStatClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn track_url(&self, track_id: &str) -> String {
        format!("{}/track/{}", self.base_url, track_id)
    }

    /// Fetch the raw analysis for one track
    pub async fn get_track_analysis(&self, track_id: &str) -> Result<SoundStatTrack, SourceError> {
        let response = self
            .http
            .get(self.track_url(track_id))
            .header("X-API-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(track_id.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Api(status.as_u16(), body));
        }

        response
            .json::<SoundStatTrack>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }
}

/// Convert a track analysis into features, if the analysis is complete
pub fn track_to_features(track: SoundStatTrack) -> Result<AudioFeatures, SourceError> {
    track
        .features
        .map(AudioFeatures::from)
        .ok_or(SourceError::Unavailable(track.id))
}

#[async_trait]
impl FeatureSource for SoundStatClient {
    fn name(&self) -> &str {
        "soundstat"
    }

    async fn fetch_features(&self, track_id: &str) -> Result<AudioFeatures, SourceError> {
        let track = self.get_track_analysis(track_id).await?;
        debug!(
            "SoundStat analysis for {} ({})",
            track_id,
            track.name.as_deref().unwrap_or("unknown title")
        );
        track_to_features(track)
    }
}
