//! Per-track audio feature vectors
//!
//! Values arrive already fetched from the feature source. The five perceptual
//! descriptors are nominally in [0, 1] but are not clamped; tempo and loudness
//! are passed through as reported.

use crate::error::MoodError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Used when the feature source does not report a time signature
pub const DEFAULT_TIME_SIGNATURE: i32 = 4;

/// Audio features for a single track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub danceability: f64,
    pub energy: f64,
    /// Musical positiveness, 0 (sad) to 1 (happy)
    pub valence: f64,
    /// Beats per minute
    pub tempo: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    /// Decibels, usually negative
    pub loudness: f64,
    /// Pitch class 0–11
    pub key: i32,
    /// 1 = major, 0 = minor
    pub mode: i32,
    #[serde(default = "default_time_signature")]
    pub time_signature: i32,
}

/// Mean of a batch of [`AudioFeatures`]
///
/// Same shape as a single track; `key`, `mode` and `time_signature` hold
/// rounded means.
pub type AveragedFeatures = AudioFeatures;

fn default_time_signature() -> i32 {
    DEFAULT_TIME_SIGNATURE
}

impl AudioFeatures {
    /// Build a record from an untyped JSON object, naming the offending field
    /// when one is missing or not numeric.
    ///
    /// `time_signature` may be absent and defaults to 4. Non-finite values are
    /// not rejected here.
    pub fn from_json(value: &Value) -> Result<Self, MoodError> {
        let object = value.as_object().ok_or_else(|| MoodError::MalformedFeature {
            field: "<record>".to_string(),
            reason: "expected a JSON object".to_string(),
        })?;

        let number = |field: &str| -> Result<f64, MoodError> {
            match object.get(field) {
                None | Some(Value::Null) => Err(MoodError::MalformedFeature {
                    field: field.to_string(),
                    reason: "missing".to_string(),
                }),
                Some(v) => v.as_f64().ok_or_else(|| MoodError::MalformedFeature {
                    field: field.to_string(),
                    reason: format!("expected a number, got {}", v),
                }),
            }
        };

        let integer = |field: &str| -> Result<i32, MoodError> {
            let raw = number(field)?;
            if raw.fract() != 0.0 || raw < i32::MIN as f64 || raw > i32::MAX as f64 {
                return Err(MoodError::MalformedFeature {
                    field: field.to_string(),
                    reason: format!("expected an integer, got {}", raw),
                });
            }
            Ok(raw as i32)
        };

        let time_signature = match object.get("time_signature") {
            None | Some(Value::Null) => DEFAULT_TIME_SIGNATURE,
            Some(_) => integer("time_signature")?,
        };

        Ok(Self {
            danceability: number("danceability")?,
            energy: number("energy")?,
            valence: number("valence")?,
            tempo: number("tempo")?,
            acousticness: number("acousticness")?,
            instrumentalness: number("instrumentalness")?,
            loudness: number("loudness")?,
            key: integer("key")?,
            mode: integer("mode")?,
            time_signature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_record() -> Value {
        json!({
            "danceability": 0.7,
            "energy": 0.6,
            "valence": 0.5,
            "tempo": 120.0,
            "acousticness": 0.2,
            "instrumentalness": 0.0,
            "loudness": -6.5,
            "key": 5,
            "mode": 1,
            "time_signature": 3
        })
    }

    #[test]
    fn test_from_json_complete_record() {
        let features = AudioFeatures::from_json(&complete_record()).unwrap();
        assert_eq!(features.tempo, 120.0);
        assert_eq!(features.loudness, -6.5);
        assert_eq!(features.key, 5);
        assert_eq!(features.time_signature, 3);
    }

    #[test]
    fn test_from_json_defaults_time_signature() {
        let mut record = complete_record();
        record.as_object_mut().unwrap().remove("time_signature");

        let features = AudioFeatures::from_json(&record).unwrap();
        assert_eq!(features.time_signature, DEFAULT_TIME_SIGNATURE);
    }

    #[test]
    fn test_from_json_missing_field_is_named() {
        let mut record = complete_record();
        record.as_object_mut().unwrap().remove("valence");

        match AudioFeatures::from_json(&record) {
            Err(MoodError::MalformedFeature { field, .. }) => assert_eq!(field, "valence"),
            other => panic!("expected MalformedFeature, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_non_numeric_field() {
        let mut record = complete_record();
        record["energy"] = json!("loud");

        match AudioFeatures::from_json(&record) {
            Err(MoodError::MalformedFeature { field, reason }) => {
                assert_eq!(field, "energy");
                assert!(reason.contains("expected a number"));
            }
            other => panic!("expected MalformedFeature, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_fractional_key_rejected() {
        let mut record = complete_record();
        record["key"] = json!(2.5);

        assert!(matches!(
            AudioFeatures::from_json(&record),
            Err(MoodError::MalformedFeature { .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(AudioFeatures::from_json(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_serde_defaults_time_signature() {
        let features: AudioFeatures = serde_json::from_value(json!({
            "danceability": 0.1, "energy": 0.2, "valence": 0.3, "tempo": 90.0,
            "acousticness": 0.4, "instrumentalness": 0.5, "loudness": -12.0,
            "key": 0, "mode": 0
        }))
        .unwrap();
        assert_eq!(features.time_signature, 4);
    }
}
