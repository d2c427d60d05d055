//! Mood labels and their static metadata
//!
//! The label set is closed; every label maps to exactly one
//! [`MoodDefinition`] through an exhaustive match.

use serde::Serialize;
use std::fmt;

/// Mood classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoodLabel {
    Euphoric,
    Ecstatic,
    Blissful,
    Energetic,
    Happy,
    Party,
    Balanced,
    Chill,
    Contemplative,
    Melancholic,
    Moody,
    Dreamy,
    Nostalgic,
    Intense,
}

impl MoodLabel {
    /// Every label, in table order
    pub const ALL: [MoodLabel; 14] = [
        MoodLabel::Euphoric,
        MoodLabel::Ecstatic,
        MoodLabel::Blissful,
        MoodLabel::Energetic,
        MoodLabel::Happy,
        MoodLabel::Party,
        MoodLabel::Balanced,
        MoodLabel::Chill,
        MoodLabel::Contemplative,
        MoodLabel::Melancholic,
        MoodLabel::Moody,
        MoodLabel::Dreamy,
        MoodLabel::Nostalgic,
        MoodLabel::Intense,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MoodLabel::Euphoric => "Euphoric",
            MoodLabel::Ecstatic => "Ecstatic",
            MoodLabel::Blissful => "Blissful",
            MoodLabel::Energetic => "Energetic",
            MoodLabel::Happy => "Happy",
            MoodLabel::Party => "Party",
            MoodLabel::Balanced => "Balanced",
            MoodLabel::Chill => "Chill",
            MoodLabel::Contemplative => "Contemplative",
            MoodLabel::Melancholic => "Melancholic",
            MoodLabel::Moody => "Moody",
            MoodLabel::Dreamy => "Dreamy",
            MoodLabel::Nostalgic => "Nostalgic",
            MoodLabel::Intense => "Intense",
        }
    }

    /// Static metadata for this label
    pub fn definition(self) -> &'static MoodDefinition {
        match self {
            MoodLabel::Euphoric => &EUPHORIC,
            MoodLabel::Ecstatic => &ECSTATIC,
            MoodLabel::Blissful => &BLISSFUL,
            MoodLabel::Energetic => &ENERGETIC,
            MoodLabel::Happy => &HAPPY,
            MoodLabel::Party => &PARTY,
            MoodLabel::Balanced => &BALANCED,
            MoodLabel::Chill => &CHILL,
            MoodLabel::Contemplative => &CONTEMPLATIVE,
            MoodLabel::Melancholic => &MELANCHOLIC,
            MoodLabel::Moody => &MOODY,
            MoodLabel::Dreamy => &DREAMY,
            MoodLabel::Nostalgic => &NOSTALGIC,
            MoodLabel::Intense => &INTENSE,
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation colors for a mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    /// Gradient utility classes consumed by the presentation layer
    pub gradient: &'static str,
}

/// Descriptive metadata attached to a mood label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodDefinition {
    pub description: &'static str,
    pub characteristics: &'static [&'static str],
    pub musical_context: &'static str,
    pub recommended_activities: &'static [&'static str],
    pub color_scheme: ColorScheme,
}

static EUPHORIC: MoodDefinition = MoodDefinition {
    description: "Pure bliss and overwhelming joy in your musical choices",
    characteristics: &["High energy", "Extremely positive", "Uplifting", "Celebratory"],
    musical_context: "Music that makes you feel like you're on top of the world",
    recommended_activities: &["Dancing", "Celebrating", "Working out", "Party hosting"],
    color_scheme: ColorScheme {
        primary: "#FFD700",
        secondary: "#FF6B6B",
        gradient: "from-yellow-400 via-orange-400 to-pink-500",
    },
};

static ECSTATIC: MoodDefinition = MoodDefinition {
    description: "High-energy euphoria with an irresistible urge to move",
    characteristics: &["Maximum energy", "Dance-inducing", "Rhythmic", "Explosive"],
    musical_context: "Tracks that demand movement and celebration",
    recommended_activities: &[
        "Club dancing",
        "Festival vibes",
        "High-intensity workouts",
        "Party games",
    ],
    color_scheme: ColorScheme {
        primary: "#FF1493",
        secondary: "#00FFFF",
        gradient: "from-pink-500 via-purple-500 to-cyan-400",
    },
};

static BLISSFUL: MoodDefinition = MoodDefinition {
    description: "Serene happiness and contentment flow through your music",
    characteristics: &["Peaceful joy", "Harmonious", "Uplifting", "Gentle"],
    musical_context: "Music that brings inner peace and gentle happiness",
    recommended_activities: &["Meditation", "Yoga", "Sunset watching", "Reading"],
    color_scheme: ColorScheme {
        primary: "#87CEEB",
        secondary: "#FFE4B5",
        gradient: "from-blue-300 via-teal-200 to-yellow-200",
    },
};

static ENERGETIC: MoodDefinition = MoodDefinition {
    description: "High-octane music that fuels your drive and motivation",
    characteristics: &["High tempo", "Driving beats", "Motivational", "Powerful"],
    musical_context: "Music that pushes you forward and keeps you going",
    recommended_activities: &["Working out", "Running", "Productivity sessions", "Cleaning"],
    color_scheme: ColorScheme {
        primary: "#FF4500",
        secondary: "#FFD700",
        gradient: "from-red-500 via-orange-500 to-yellow-400",
    },
};

static HAPPY: MoodDefinition = MoodDefinition {
    description: "Cheerful and optimistic vibes dominate your playlist",
    characteristics: &["Upbeat", "Positive", "Feel-good", "Sunny"],
    musical_context: "Music that brightens your day and lifts your spirits",
    recommended_activities: &["Socializing", "Cooking", "Road trips", "Creative projects"],
    color_scheme: ColorScheme {
        primary: "#32CD32",
        secondary: "#FFD700",
        gradient: "from-green-400 via-yellow-400 to-orange-300",
    },
};

static PARTY: MoodDefinition = MoodDefinition {
    description: "Your music screams celebration and social energy",
    characteristics: &["Dance-friendly", "Social", "Rhythmic", "Fun"],
    musical_context: "Perfect soundtrack for gatherings and good times",
    recommended_activities: &["Hosting parties", "Social dancing", "Karaoke", "Game nights"],
    color_scheme: ColorScheme {
        primary: "#FF69B4",
        secondary: "#00CED1",
        gradient: "from-pink-400 via-purple-400 to-blue-400",
    },
};

static BALANCED: MoodDefinition = MoodDefinition {
    description: "A harmonious blend of emotions and energies",
    characteristics: &["Versatile", "Moderate energy", "Adaptable", "Well-rounded"],
    musical_context: "Music that works for many moods and situations",
    recommended_activities: &[
        "Background music",
        "Work",
        "Casual listening",
        "Mixed activities",
    ],
    color_scheme: ColorScheme {
        primary: "#9370DB",
        secondary: "#20B2AA",
        gradient: "from-purple-400 via-blue-400 to-teal-400",
    },
};

static CHILL: MoodDefinition = MoodDefinition {
    description: "Relaxed and laid-back musical preferences",
    characteristics: &["Low energy", "Relaxing", "Mellow", "Easygoing"],
    musical_context: "Perfect for unwinding and taking life slowly",
    recommended_activities: &["Lounging", "Coffee time", "Reading", "Casual conversations"],
    color_scheme: ColorScheme {
        primary: "#4682B4",
        secondary: "#B0E0E6",
        gradient: "from-blue-400 via-blue-300 to-blue-200",
    },
};

static CONTEMPLATIVE: MoodDefinition = MoodDefinition {
    description: "Thoughtful and introspective musical journey",
    characteristics: &["Reflective", "Deep", "Atmospheric", "Meaningful"],
    musical_context: "Music that encourages deep thinking and self-reflection",
    recommended_activities: &["Journaling", "Long walks", "Art creation", "Philosophy"],
    color_scheme: ColorScheme {
        primary: "#708090",
        secondary: "#DDA0DD",
        gradient: "from-gray-500 via-purple-300 to-indigo-300",
    },
};

static MELANCHOLIC: MoodDefinition = MoodDefinition {
    description: "Beautiful sadness and bittersweet emotions",
    characteristics: &["Emotionally rich", "Nostalgic", "Deep", "Poignant"],
    musical_context: "Music that embraces the beauty in sadness",
    recommended_activities: &[
        "Reflection",
        "Art appreciation",
        "Rainy day activities",
        "Memory processing",
    ],
    color_scheme: ColorScheme {
        primary: "#4169E1",
        secondary: "#9932CC",
        gradient: "from-blue-600 via-indigo-500 to-purple-500",
    },
};

static MOODY: MoodDefinition = MoodDefinition {
    description: "Complex emotional landscapes with shifting energies",
    characteristics: &["Variable energy", "Emotionally complex", "Dynamic", "Unpredictable"],
    musical_context: "Music that captures the full spectrum of human emotion",
    recommended_activities: &[
        "Creative expression",
        "Mood journaling",
        "Artistic pursuits",
        "Emotional processing",
    ],
    color_scheme: ColorScheme {
        primary: "#8A2BE2",
        secondary: "#DC143C",
        gradient: "from-purple-600 via-indigo-600 to-red-500",
    },
};

static DREAMY: MoodDefinition = MoodDefinition {
    description: "Ethereal and otherworldly musical atmosphere",
    characteristics: &["Atmospheric", "Floating", "Surreal", "Ambient"],
    musical_context: "Music that transports you to another realm",
    recommended_activities: &[
        "Stargazing",
        "Meditation",
        "Creative visualization",
        "Relaxation",
    ],
    color_scheme: ColorScheme {
        primary: "#E6E6FA",
        secondary: "#FFB6C1",
        gradient: "from-lavender via-pink-200 to-blue-200",
    },
};

static NOSTALGIC: MoodDefinition = MoodDefinition {
    description: "Wistful longing for times past",
    characteristics: &["Sentimental", "Warm", "Familiar", "Timeless"],
    musical_context: "Music that evokes memories and past experiences",
    recommended_activities: &[
        "Photo browsing",
        "Memory sharing",
        "Vintage activities",
        "Storytelling",
    ],
    color_scheme: ColorScheme {
        primary: "#CD853F",
        secondary: "#F0E68C",
        gradient: "from-amber-600 via-yellow-400 to-orange-300",
    },
};

static INTENSE: MoodDefinition = MoodDefinition {
    description: "Powerful and overwhelming musical experiences",
    characteristics: &["High intensity", "Dramatic", "Emotionally charged", "Immersive"],
    musical_context: "Music that demands your full attention and emotional investment",
    recommended_activities: &[
        "Focused listening",
        "Intense workouts",
        "Emotional release",
        "Deep conversations",
    ],
    color_scheme: ColorScheme {
        primary: "#B22222",
        secondary: "#FF4500",
        gradient: "from-red-700 via-red-500 to-orange-500",
    },
};
