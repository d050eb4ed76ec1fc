//! Sequences the three screens: safety → clarification → full answer.

use tracing::debug;

use crate::clarify::needs_clarification;
use crate::i18n::{pack, Language};
use crate::response::{generate, ExplanationLevel, StructuredResponse};
use crate::safety::is_safe;

/// Section label for the refusal branch. Iconographic, the same in
/// every language; only the body text is localized.
pub const SAFETY_TITLE: &str = "⚠️ Safety Notice";

/// Section label for the clarification branch.
pub const CLARIFICATION_TITLE: &str = "❓ Need More Information";

/// Turn a raw prompt into a response document. Pure and synchronous;
/// always returns exactly one of three shapes. Safety dominates
/// clarification: a prompt that trips both screens is refused.
pub fn process(prompt: &str, language: Language, raw_level: i64) -> StructuredResponse {
    if !is_safe(prompt) {
        debug!(%raw_level, lang = language.tag(), "prompt refused by safety screen");
        return StructuredResponse::single(SAFETY_TITLE, pack(language).safety_refusal);
    }

    if needs_clarification(prompt) {
        debug!(lang = language.tag(), "prompt too vague, asking back");
        return StructuredResponse::single(CLARIFICATION_TITLE, pack(language).clarification_request);
    }

    let level = ExplanationLevel::clamp(raw_level);
    generate(prompt, language, level)
}

/// Variant for callers holding a raw locale string from settings.
/// Unknown tags degrade to English rather than erroring.
pub fn process_tag(prompt: &str, tag: &str, raw_level: i64) -> StructuredResponse {
    let language = Language::from_tag(tag).unwrap_or_default();
    process(prompt, language, raw_level)
}
