//! recap-mood library - mood analysis for music recaps
//!
//! Averages per-track audio features, classifies the averaged vector into a
//! mood with descriptive metadata, and serves the result over HTTP.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod aggregator;
pub mod api;
pub mod classifier;
pub mod error;
pub mod features;
pub mod genre;
pub mod insights;
pub mod mood;
pub mod source;

pub use aggregator::average_features;
pub use classifier::{analyze_mood, primary_mood, MoodAnalysis};
pub use error::{ApiError, ApiResult, MoodError};
pub use features::{AudioFeatures, AveragedFeatures};
pub use genre::{estimate_genre, GenreEstimate};
pub use mood::MoodLabel;

use source::{BatchSettings, FeatureSource};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Feature source; `None` when no API key is configured
    pub source: Option<Arc<dyn FeatureSource>>,
    pub batch: BatchSettings,
    /// Upper bound on track ids analyzed per request
    pub max_tracks: usize,
}

impl AppState {
    pub fn new(
        source: Option<Arc<dyn FeatureSource>>,
        batch: BatchSettings,
        max_tracks: usize,
    ) -> Self {
        Self {
            source,
            batch,
            max_tracks,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::analysis_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
