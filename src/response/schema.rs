use serde::{Deserialize, Serialize};

use crate::i18n::store::LevelSlot;

/// How deep an answer should go. Stored as 0/1/2 in user profiles.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplanationLevel {
    Beginner,
    Practical,
    Expert,
}

impl Default for ExplanationLevel {
    fn default() -> Self {
        ExplanationLevel::Practical
    }
}

impl ExplanationLevel {
    /// Clamp an arbitrary stored value into the valid range.
    /// Out-of-range input degrades, it is never rejected.
    pub fn clamp(raw: i64) -> Self {
        match raw {
            i64::MIN..=0 => ExplanationLevel::Beginner,
            1 => ExplanationLevel::Practical,
            _ => ExplanationLevel::Expert,
        }
    }

    /// Select this level's phrase from a template slot.
    pub fn pick(self, slot: LevelSlot) -> &'static str {
        slot[self as usize]
    }
}

/// One titled block of the response document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Ordered, immutable-after-construction response document. Always
/// holds at least one section; the section shape (one vs five) is the
/// outcome signal, there is no separate status code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StructuredResponse {
    pub sections: Vec<Section>,
}

impl StructuredResponse {
    /// Single-section document for the refusal and clarification paths.
    pub fn single(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sections: vec![Section::new(title, content)],
        }
    }
}
