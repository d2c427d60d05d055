//! Mood analysis endpoints
//!
//! - `POST /api/audio-features`: fetch features for track ids, then analyze
//! - `POST /api/mood-analysis`: analyze caller-supplied feature records
//!
//! Both answer with the same envelope. Finding no usable features is a normal
//! outcome (`success: false` with a message), not an HTTP error.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::aggregator::average_features;
use crate::classifier::{analyze_mood, MoodAnalysis};
use crate::error::{ApiError, ApiResult, MoodError};
use crate::features::{AudioFeatures, AveragedFeatures};
use crate::genre::{estimate_genre, GenreEstimate};
use crate::source::collect_features;
use crate::AppState;

pub const INVALID_TRACK_IDS_MESSAGE: &str = "Invalid track IDs provided";

pub const NO_FEATURES_MESSAGE: &str = "No audio features found for your tracks. \
    This might be because the tracks are not available in the SoundStat database.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFeaturesRequest {
    /// Kept loose so a missing, null or non-array value gets the envelope
    #[serde(default)]
    pub track_ids: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct MoodAnalysisRequest {
    #[serde(default)]
    pub features: Vec<Value>,
}

/// Response envelope shared by both endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_features: Option<AveragedFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_analysis: Option<MoodAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<GenreEstimate>,
    /// Number of feature vectors that went into the average
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            audio_features: None,
            mood_analysis: None,
            genre: None,
            track_count: None,
            error: Some(message.into()),
        }
    }
}

/// Average, classify and wrap; empty input becomes a `success: false` envelope
pub fn analyze_batch(features: &[AudioFeatures], empty_message: &str) -> AnalysisResponse {
    match average_features(features) {
        Ok(averaged) => {
            let analysis = analyze_mood(&averaged);
            info!(
                "Mood analysis from {} tracks: {} ({:?})",
                features.len(),
                analysis.mood.primary,
                analysis.mood.intensity
            );
            AnalysisResponse {
                success: true,
                genre: Some(estimate_genre(&averaged)),
                audio_features: Some(averaged),
                mood_analysis: Some(analysis),
                track_count: Some(features.len()),
                error: None,
            }
        }
        Err(MoodError::EmptyInput) => AnalysisResponse::failure(empty_message),
        Err(e) => AnalysisResponse::failure(e.to_string()),
    }
}

/// Accept only a non-empty array of string ids
fn parse_track_ids(value: Option<Value>) -> ApiResult<Vec<String>> {
    let invalid = || ApiError::BadRequest(INVALID_TRACK_IDS_MESSAGE.to_string());

    let items = match value {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(invalid()),
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(id) => Ok(id),
            _ => Err(invalid()),
        })
        .collect()
}

/// POST /api/audio-features
pub async fn analyze_tracks(
    State(state): State<AppState>,
    payload: Result<Json<AudioFeaturesRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisResponse>> {
    let Json(request) = payload?;
    let mut track_ids = parse_track_ids(request.track_ids)?;

    let source = state.source.as_ref().ok_or_else(|| {
        warn!("Audio features requested but no feature source is configured");
        ApiError::Config("SoundStat API key not configured".to_string())
    })?;

    if track_ids.len() > state.max_tracks {
        info!(
            "Limiting analysis to the first {} of {} tracks",
            state.max_tracks,
            track_ids.len()
        );
        track_ids.truncate(state.max_tracks);
    }

    let features = collect_features(source.as_ref(), &track_ids, &state.batch).await;
    Ok(Json(analyze_batch(&features, NO_FEATURES_MESSAGE)))
}

/// POST /api/mood-analysis
pub async fn analyze_features(
    payload: Result<Json<MoodAnalysisRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisResponse>> {
    let Json(request) = payload?;
    let features = request
        .features
        .iter()
        .map(AudioFeatures::from_json)
        .collect::<Result<Vec<_>, MoodError>>()?;

    Ok(Json(analyze_batch(
        &features,
        "No audio features provided for analysis.",
    )))
}

/// Build analysis routes
pub fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/api/audio-features", post(analyze_tracks))
        .route("/api/mood-analysis", post(analyze_features))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch_is_failure_envelope() {
        let response = analyze_batch(&[], NO_FEATURES_MESSAGE);
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some(NO_FEATURES_MESSAGE));
        assert!(response.mood_analysis.is_none());
    }

    #[test]
    fn test_parse_track_ids_accepts_string_array() {
        let ids = parse_track_ids(Some(serde_json::json!(["a", "b"]))).unwrap();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_track_ids_rejects_non_arrays() {
        for value in [
            None,
            Some(Value::Null),
            Some(serde_json::json!("abc")),
            Some(serde_json::json!([])),
            Some(serde_json::json!(["a", 7])),
        ] {
            let err = parse_track_ids(value).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(_)));
            assert_eq!(err.to_string(), INVALID_TRACK_IDS_MESSAGE);
        }
    }

    #[test]
    fn test_failure_envelope_omits_empty_fields() {
        let json = serde_json::to_value(AnalysisResponse::failure("nope")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "error": "nope" }));
    }
}
