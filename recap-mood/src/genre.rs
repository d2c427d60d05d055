//! Coarse genre estimate from averaged features
//!
//! Ordered rules, first match wins. This is a rough hint for display, not a
//! tag source.

use crate::features::AveragedFeatures;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenreEstimate {
    #[serde(rename = "Electronic/Dance")]
    ElectronicDance,
    #[serde(rename = "Acoustic/Folk")]
    AcousticFolk,
    Instrumental,
    #[serde(rename = "Rock/Metal")]
    RockMetal,
    Pop,
    #[serde(rename = "Ambient/Chill")]
    AmbientChill,
    Alternative,
}

impl GenreEstimate {
    pub fn as_str(self) -> &'static str {
        match self {
            GenreEstimate::ElectronicDance => "Electronic/Dance",
            GenreEstimate::AcousticFolk => "Acoustic/Folk",
            GenreEstimate::Instrumental => "Instrumental",
            GenreEstimate::RockMetal => "Rock/Metal",
            GenreEstimate::Pop => "Pop",
            GenreEstimate::AmbientChill => "Ambient/Chill",
            GenreEstimate::Alternative => "Alternative",
        }
    }
}

impl fmt::Display for GenreEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn estimate_genre(f: &AveragedFeatures) -> GenreEstimate {
    if f.danceability > 0.8 && f.tempo > 120.0 {
        GenreEstimate::ElectronicDance
    } else if f.acousticness > 0.7 {
        GenreEstimate::AcousticFolk
    } else if f.instrumentalness > 0.7 {
        GenreEstimate::Instrumental
    } else if f.energy > 0.8 && f.tempo > 140.0 {
        GenreEstimate::RockMetal
    } else if f.tempo > 120.0 && f.danceability > 0.6 {
        GenreEstimate::Pop
    } else if f.tempo < 80.0 && f.energy < 0.4 {
        GenreEstimate::AmbientChill
    } else {
        GenreEstimate::Alternative
    }
}
