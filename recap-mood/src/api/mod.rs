//! HTTP API handlers for recap-mood

pub mod analysis;
pub mod health;

pub use analysis::{analysis_routes, analyze_features, analyze_tracks};
pub use health::health_routes;
