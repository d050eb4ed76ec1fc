//! User preference payload exchanged with the profile store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Language;
use crate::response::ExplanationLevel;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to decode preferences: {0}")]
    DecodeFailed(#[from] serde_json::Error),
}

/// What the settings panel persists per user. Missing fields take the
/// defaults; an out-of-range level is kept as stored and clamped on
/// use, so a stale profile never fails to load.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_level")]
    pub explanation_level: i64,
}

fn default_level() -> i64 {
    1
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: Language::default(),
            explanation_level: default_level(),
        }
    }
}

impl Preferences {
    /// Decode a stored profile payload.
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// The effective level, clamped into range.
    pub fn level(&self) -> ExplanationLevel {
        ExplanationLevel::clamp(self.explanation_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_payload() {
        let prefs = Preferences::from_json(r#"{"language":"ja_JP","explanation_level":2}"#).unwrap();
        assert_eq!(prefs.language, Language::JaJp);
        assert_eq!(prefs.level(), ExplanationLevel::Expert);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let prefs = Preferences::from_json("{}").unwrap();
        assert_eq!(prefs.language, Language::EnUs);
        assert_eq!(prefs.level(), ExplanationLevel::Practical);
    }

    #[test]
    fn out_of_range_level_loads_and_clamps() {
        let prefs = Preferences::from_json(r#"{"explanation_level":42}"#).unwrap();
        assert_eq!(prefs.explanation_level, 42);
        assert_eq!(prefs.level(), ExplanationLevel::Expert);
    }

    #[test]
    fn unknown_language_tag_is_a_decode_error() {
        // The profile store only writes known tags; a corrupt payload
        // surfaces as an error here, not a silent fallback.
        assert!(Preferences::from_json(r#"{"language":"zz_ZZ"}"#).is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let prefs = Preferences {
            language: Language::ArSa,
            explanation_level: 0,
        };
        let back = Preferences::from_json(&prefs.to_json().unwrap()).unwrap();
        assert_eq!(back, prefs);
    }
}
