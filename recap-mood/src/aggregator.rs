//! Feature aggregation
//!
//! Reduces the feature vectors of a track batch to one averaged vector.
//! Sums run in input order so floating-point results are reproducible.

use crate::error::MoodError;
use crate::features::{AudioFeatures, AveragedFeatures};

/// Average a non-empty batch of feature vectors
///
/// Continuous fields are plain arithmetic means. `key`, `mode` and
/// `time_signature` are means rounded half-up to the nearest integer.
///
/// # Errors
/// [`MoodError::EmptyInput`] when `features` is empty; callers branch on this
/// instead of receiving a zeroed vector.
pub fn average_features(features: &[AudioFeatures]) -> Result<AveragedFeatures, MoodError> {
    if features.is_empty() {
        return Err(MoodError::EmptyInput);
    }

    let mut sums = Sums::default();
    for f in features {
        sums.danceability += f.danceability;
        sums.energy += f.energy;
        sums.valence += f.valence;
        sums.tempo += f.tempo;
        sums.acousticness += f.acousticness;
        sums.instrumentalness += f.instrumentalness;
        sums.loudness += f.loudness;
        sums.key += f64::from(f.key);
        sums.mode += f64::from(f.mode);
        sums.time_signature += f64::from(f.time_signature);
    }

    let count = features.len() as f64;
    let averaged = AveragedFeatures {
        danceability: sums.danceability / count,
        energy: sums.energy / count,
        valence: sums.valence / count,
        tempo: sums.tempo / count,
        acousticness: sums.acousticness / count,
        instrumentalness: sums.instrumentalness / count,
        loudness: sums.loudness / count,
        key: round_half_up(sums.key / count),
        mode: round_half_up(sums.mode / count),
        time_signature: round_half_up(sums.time_signature / count),
    };

    tracing::debug!(
        "Averaged {} feature vectors: valence={:.3}, energy={:.3}, danceability={:.3}, tempo={:.1}",
        features.len(),
        averaged.valence,
        averaged.energy,
        averaged.danceability,
        averaged.tempo
    );

    Ok(averaged)
}

#[derive(Default)]
struct Sums {
    danceability: f64,
    energy: f64,
    valence: f64,
    tempo: f64,
    acousticness: f64,
    instrumentalness: f64,
    loudness: f64,
    key: f64,
    mode: f64,
    time_signature: f64,
}

/// Ties go toward positive infinity (2.5 → 3, -2.5 → -2)
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
