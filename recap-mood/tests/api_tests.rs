//! Integration tests for recap-mood API endpoints
//!
//! Tests cover:
//! - Health endpoint
//! - POST /api/audio-features validation, missing source, partial failures
//! - POST /api/mood-analysis success, empty and malformed input
//! - Response envelope shape (camelCase fields)

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use recap_mood::source::{BatchSettings, FeatureSource, SourceError};
use recap_mood::{build_router, AppState, AudioFeatures};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: in-memory feature source that records requested ids
struct FixtureSource {
    tracks: HashMap<String, AudioFeatures>,
    requested: Mutex<Vec<String>>,
}

#[async_trait]
impl FeatureSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn fetch_features(&self, track_id: &str) -> Result<AudioFeatures, SourceError> {
        self.requested.lock().unwrap().push(track_id.to_string());
        self.tracks
            .get(track_id)
            .copied()
            .ok_or_else(|| SourceError::NotFound(track_id.to_string()))
    }
}

fn euphoric_track() -> AudioFeatures {
    AudioFeatures {
        danceability: 0.85,
        energy: 0.9,
        valence: 0.9,
        tempo: 150.0,
        acousticness: 0.1,
        instrumentalness: 0.0,
        loudness: -20.0,
        key: 7,
        mode: 1,
        time_signature: 4,
    }
}

fn fixture_source(ids: &[&str]) -> Arc<FixtureSource> {
    Arc::new(FixtureSource {
        tracks: ids
            .iter()
            .map(|id| (id.to_string(), euphoric_track()))
            .collect(),
        requested: Mutex::new(Vec::new()),
    })
}

/// Test helper: Create app with the given source and no batch delay
fn setup_app(source: Option<Arc<dyn FeatureSource>>, max_tracks: usize) -> axum::Router {
    let batch = BatchSettings {
        batch_size: 5,
        batch_delay: Duration::ZERO,
    };
    build_router(AppState::new(source, batch, max_tracks))
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health Endpoint
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app(None, 10);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "recap-mood");
    assert!(body["version"].is_string());
}

// =============================================================================
// POST /api/audio-features
// =============================================================================

#[tokio::test]
async fn test_audio_features_rejects_empty_ids() {
    let app = setup_app(Some(fixture_source(&["a"])), 10);

    let response = app
        .oneshot(json_request("/api/audio-features", json!({ "trackIds": [] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid track IDs provided");
}

#[tokio::test]
async fn test_audio_features_rejects_non_array_ids() {
    for payload in [json!({ "trackIds": "abc" }), json!({ "trackIds": null }), json!({})] {
        let app = setup_app(Some(fixture_source(&["abc"])), 10);

        let response = app
            .oneshot(json_request("/api/audio-features", payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = extract_json(response.into_body()).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Invalid track IDs provided");
        assert_eq!(body["code"], "BAD_REQUEST");
    }
}

#[tokio::test]
async fn test_audio_features_truncated_json_gets_envelope() {
    let app = setup_app(Some(fixture_source(&["a"])), 10);

    let request = Request::builder()
        .method("POST")
        .uri("/api/audio-features")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"trackIds": ["a""#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_audio_features_without_source_is_config_error() {
    let app = setup_app(None, 10);

    let response = app
        .oneshot(json_request("/api/audio-features", json!({ "trackIds": ["a"] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "SoundStat API key not configured");
    assert_eq!(body["code"], "CONFIG_ERROR");
}

#[tokio::test]
async fn test_audio_features_success_with_partial_failures() {
    let source = fixture_source(&["a", "c"]);
    let app = setup_app(Some(source.clone()), 10);

    let response = app
        .oneshot(json_request(
            "/api/audio-features",
            json!({ "trackIds": ["a", "b", "c"] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["trackCount"], 2);
    assert_eq!(body["genre"], "Electronic/Dance");
    assert_eq!(body["audioFeatures"]["tempo"], 150.0);
    assert_eq!(body["audioFeatures"]["time_signature"], 4);

    let mood = &body["moodAnalysis"]["mood"];
    assert_eq!(mood["primary"], "Euphoric");
    assert_eq!(mood["secondary"], "Ecstatic");
    assert_eq!(mood["intensity"], "High");
    assert_eq!(mood["colorScheme"]["primary"], "#FFD700");
    assert!(mood["musicalContext"].is_string());
    assert_eq!(mood["recommendedActivities"].as_array().unwrap().len(), 4);

    assert!(body["moodAnalysis"]["emotionalSpectrum"]["positivity"].is_number());
    assert!(body["moodAnalysis"]["musicalProfile"]["dynamism"].is_number());
    assert!(body["moodAnalysis"]["insights"].is_array());

    assert_eq!(source.requested.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_audio_features_none_found() {
    let app = setup_app(Some(fixture_source(&[])), 10);

    let response = app
        .oneshot(json_request(
            "/api/audio-features",
            json!({ "trackIds": ["x", "y"] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("No audio features found"));
    assert!(body.get("moodAnalysis").is_none());
}

#[tokio::test]
async fn test_audio_features_truncates_to_max_tracks() {
    let source = fixture_source(&["1", "2", "3", "4"]);
    let app = setup_app(Some(source.clone()), 2);

    let response = app
        .oneshot(json_request(
            "/api/audio-features",
            json!({ "trackIds": ["1", "2", "3", "4"] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["trackCount"], 2);
    assert_eq!(*source.requested.lock().unwrap(), vec!["1", "2"]);
}

// =============================================================================
// POST /api/mood-analysis
// =============================================================================

#[tokio::test]
async fn test_mood_analysis_from_raw_features() {
    let app = setup_app(None, 10);

    let features = json!({
        "features": [
            { "danceability": 0.5, "energy": 0.5, "valence": 0.5, "tempo": 110.0,
              "acousticness": 0.3, "instrumentalness": 0.3, "loudness": -8.0,
              "key": 2, "mode": 1 },
            { "danceability": 0.5, "energy": 0.5, "valence": 0.5, "tempo": 110.0,
              "acousticness": 0.3, "instrumentalness": 0.3, "loudness": -8.0,
              "key": 3, "mode": 0, "time_signature": 4 }
        ]
    });

    let response = app
        .oneshot(json_request("/api/mood-analysis", features))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["audioFeatures"]["key"], 3);
    assert_eq!(body["moodAnalysis"]["mood"]["primary"], "Balanced");
    assert!(body["moodAnalysis"]["mood"].get("secondary").is_none());
    assert_eq!(body["genre"], "Alternative");
}

#[tokio::test]
async fn test_mood_analysis_empty_features() {
    let app = setup_app(None, 10);

    let response = app
        .oneshot(json_request("/api/mood-analysis", json!({ "features": [] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_mood_analysis_malformed_record() {
    let app = setup_app(None, 10);

    let response = app
        .oneshot(json_request(
            "/api/mood-analysis",
            json!({ "features": [ { "energy": 0.5 } ] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["error"].as_str().unwrap().contains("danceability"));
}

#[tokio::test]
async fn test_mood_analysis_non_array_features_gets_envelope() {
    let app = setup_app(None, 10);

    let response = app
        .oneshot(json_request("/api/mood-analysis", json!({ "features": "loud" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "BAD_REQUEST");
}
