//! Rule-based structured response engine for a multilingual
//! tutor/assistant. No model calls: a prompt is screened for safety,
//! screened for vagueness, and otherwise answered from hand-authored
//! locale templates tuned by explanation level.

pub mod clarify;
pub mod engine;
pub mod i18n;
pub mod response;
pub mod safety;
pub mod settings;

pub use engine::{process, process_tag};
pub use i18n::Language;
pub use response::{flatten, ExplanationLevel, Section, StructuredResponse};
pub use settings::Preferences;
