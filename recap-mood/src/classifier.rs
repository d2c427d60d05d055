//! Mood classification
//!
//! Maps one averaged feature vector to a [`MoodAnalysis`]:
//! 1. Derived composites (emotional spectrum, musical profile)
//! 2. Intensity tier
//! 3. Primary/secondary mood from an ordered decision list (first match wins)
//! 4. Metadata lookup and insight generation
//!
//! Inputs are not validated or clamped. Composites may exceed 100 for very
//! loud or very fast material, and NaN inputs propagate.

use crate::features::{AudioFeatures, AveragedFeatures};
use crate::insights::generate_insights;
use crate::mood::{ColorScheme, MoodLabel};
use serde::Serialize;
use tracing::debug;

/// Affective composites, percentage scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmotionalSpectrum {
    pub positivity: f64,
    pub energy: f64,
    pub danceability: f64,
    pub introspection: f64,
}

/// Sonic composites; `tempo` is raw BPM, the rest are percentage-like
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MusicalProfile {
    pub tempo: f64,
    pub complexity: f64,
    pub organicness: f64,
    pub dynamism: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    /// Tier for an overall intensity score (strict thresholds 0.7 and 0.4)
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            Intensity::High
        } else if score > 0.4 {
            Intensity::Medium
        } else {
            Intensity::Low
        }
    }
}

/// Classified mood with its table metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedMood {
    pub primary: MoodLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<MoodLabel>,
    pub intensity: Intensity,
    pub description: &'static str,
    pub characteristics: &'static [&'static str],
    pub musical_context: &'static str,
    pub recommended_activities: &'static [&'static str],
    pub color_scheme: ColorScheme,
}

/// Complete analysis handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysis {
    pub mood: DetailedMood,
    pub emotional_spectrum: EmotionalSpectrum,
    pub musical_profile: MusicalProfile,
    pub insights: Vec<String>,
}

/// |loudness| / 60, the loudness term shared by several composites
fn loudness_term(loudness: f64) -> f64 {
    loudness.abs() / 60.0
}

pub fn emotional_spectrum(f: &AudioFeatures) -> EmotionalSpectrum {
    EmotionalSpectrum {
        positivity: f.valence * 100.0,
        energy: f.energy * 100.0,
        danceability: f.danceability * 100.0,
        introspection: (1.0 - f.valence + f.instrumentalness + f.acousticness) / 3.0 * 100.0,
    }
}

pub fn musical_profile(f: &AudioFeatures) -> MusicalProfile {
    MusicalProfile {
        tempo: f.tempo,
        complexity: ((1.0 - f.danceability) + f.instrumentalness + loudness_term(f.loudness))
            / 3.0
            * 100.0,
        organicness: f.acousticness * 100.0,
        dynamism: (f.energy + f.tempo / 200.0 + loudness_term(f.loudness)) / 3.0 * 100.0,
    }
}

/// (energy + danceability + tempo/200 + |loudness|/60) / 4
pub fn overall_intensity(f: &AudioFeatures) -> f64 {
    (f.energy + f.danceability + f.tempo / 200.0 + loudness_term(f.loudness)) / 4.0
}

/// Ordered decision list; the first matching rule decides.
///
/// Rule order matters for vectors near several boundaries, so it must not be
/// turned into a scoring scheme.
pub fn classify(f: &AudioFeatures) -> (MoodLabel, Option<MoodLabel>) {
    let AudioFeatures {
        valence,
        energy,
        danceability,
        acousticness,
        instrumentalness,
        tempo,
        loudness,
        ..
    } = *f;

    if valence > 0.8 && energy > 0.8 && danceability > 0.7 {
        let secondary = (tempo > 130.0).then_some(MoodLabel::Ecstatic);
        (MoodLabel::Euphoric, secondary)
    } else if valence > 0.7 && energy > 0.8 && tempo > 140.0 {
        (MoodLabel::Ecstatic, None)
    } else if valence > 0.6 && acousticness > 0.5 && energy < 0.6 {
        (MoodLabel::Blissful, None)
    } else if danceability > 0.75 && energy > 0.6 && valence > 0.5 {
        (MoodLabel::Party, None)
    } else if energy > 0.8 && tempo > 120.0 {
        (MoodLabel::Energetic, None)
    } else if valence > 0.6 && energy > 0.5 {
        (MoodLabel::Happy, None)
    } else if valence < 0.3 && energy < 0.4 && acousticness > 0.4 {
        let secondary = (instrumentalness > 0.5).then_some(MoodLabel::Contemplative);
        (MoodLabel::Melancholic, secondary)
    } else if valence < 0.4 && energy < 0.6 {
        if acousticness > 0.6 {
            (MoodLabel::Contemplative, None)
        } else {
            (MoodLabel::Moody, None)
        }
    } else if energy < 0.3 && tempo < 100.0 {
        if acousticness > 0.7 {
            (MoodLabel::Dreamy, None)
        } else {
            (MoodLabel::Chill, None)
        }
    } else if instrumentalness > 0.7 && acousticness > 0.5 {
        (MoodLabel::Contemplative, None)
    } else if valence < 0.5 && valence > 0.3 && acousticness > 0.5 {
        (MoodLabel::Nostalgic, None)
    } else if energy > 0.7 && loudness.abs() > 10.0 {
        (MoodLabel::Intense, None)
    } else {
        (MoodLabel::Balanced, None)
    }
}

/// Full mood analysis for an averaged feature vector
pub fn analyze_mood(features: &AveragedFeatures) -> MoodAnalysis {
    let emotional_spectrum = emotional_spectrum(features);
    let musical_profile = musical_profile(features);
    let intensity = Intensity::from_score(overall_intensity(features));
    let (primary, secondary) = classify(features);
    let definition = primary.definition();

    debug!(
        "Classified mood: primary={}, secondary={:?}, intensity={:?}",
        primary, secondary, intensity
    );

    MoodAnalysis {
        mood: DetailedMood {
            primary,
            secondary,
            intensity,
            description: definition.description,
            characteristics: definition.characteristics,
            musical_context: definition.musical_context,
            recommended_activities: definition.recommended_activities,
            color_scheme: definition.color_scheme,
        },
        insights: generate_insights(&emotional_spectrum, &musical_profile),
        emotional_spectrum,
        musical_profile,
    }
}

/// Primary mood label only
pub fn primary_mood(features: &AveragedFeatures) -> MoodLabel {
    classify(features).0
}
