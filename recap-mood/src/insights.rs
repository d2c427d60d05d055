//! Human-readable insights derived from the composite metrics

use crate::classifier::{EmotionalSpectrum, MusicalProfile};

pub const INSIGHT_HIGH_POSITIVITY: &str = "Your music radiates exceptional positivity and joy";
pub const INSIGHT_LOW_POSITIVITY: &str =
    "You're drawn to deeper, more complex emotional expressions";
pub const INSIGHT_ACOUSTIC: &str = "You have a strong preference for organic, acoustic sounds";
pub const INSIGHT_ELECTRONIC: &str = "Electronic and produced sounds dominate your taste";
pub const INSIGHT_COMPLEX: &str =
    "You appreciate sophisticated and intricate musical arrangements";
pub const INSIGHT_FAST_TEMPO: &str = "High-tempo tracks fuel your musical experience";
pub const INSIGHT_SLOW_TEMPO: &str = "Slower, more contemplative tempos define your style";
pub const INSIGHT_DANCEABLE: &str =
    "Music that moves your body is essential to your listening experience";

/// Evaluate the insight checks in their fixed order
///
/// Emits at most one message per check, so 0–5 messages in check order.
pub fn generate_insights(spectrum: &EmotionalSpectrum, profile: &MusicalProfile) -> Vec<String> {
    let mut insights = Vec::new();

    if spectrum.positivity > 70.0 {
        insights.push(INSIGHT_HIGH_POSITIVITY);
    } else if spectrum.positivity < 30.0 {
        insights.push(INSIGHT_LOW_POSITIVITY);
    }

    if profile.organicness > 70.0 {
        insights.push(INSIGHT_ACOUSTIC);
    } else if profile.organicness < 30.0 {
        insights.push(INSIGHT_ELECTRONIC);
    }

    if profile.complexity > 70.0 {
        insights.push(INSIGHT_COMPLEX);
    }

    if profile.tempo > 140.0 {
        insights.push(INSIGHT_FAST_TEMPO);
    } else if profile.tempo < 80.0 {
        insights.push(INSIGHT_SLOW_TEMPO);
    }

    if spectrum.danceability > 80.0 {
        insights.push(INSIGHT_DANCEABLE);
    }

    insights.into_iter().map(String::from).collect()
}
