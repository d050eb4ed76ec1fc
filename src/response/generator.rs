//! Assembles the five-section answer from a locale pack.

use crate::i18n::{pack, Language, LocalePack};

use super::schema::{ExplanationLevel, Section, StructuredResponse};

/// Build the full structured answer. The level must already be
/// clamped by the caller; the prompt is echoed verbatim into the Core
/// Issue body with no escaping (the renderer owns safe display).
/// Cannot fail for any input.
pub fn generate(prompt: &str, language: Language, level: ExplanationLevel) -> StructuredResponse {
    let p = pack(language);

    StructuredResponse {
        sections: vec![
            Section::new(p.titles.core_issue, core_issue(prompt, p, level)),
            Section::new(p.titles.breakdown, breakdown(p, level)),
            Section::new(p.titles.solution, solution(p, level)),
            Section::new(p.titles.examples, examples(p, level)),
            Section::new(p.titles.summary, summary(p, level)),
        ],
    }
}

fn core_issue(prompt: &str, p: &LocalePack, level: ExplanationLevel) -> String {
    let t = &p.core_issue;
    format!(
        "{}**{}**{}{}{}",
        t.intro,
        prompt,
        t.bridge,
        level.pick(t.register),
        t.outro
    )
}

fn breakdown(p: &LocalePack, level: ExplanationLevel) -> String {
    let t = &p.breakdown;
    format!("{}{}{}", t.opening, level.pick(t.foundation), t.closing)
}

fn solution(p: &LocalePack, level: ExplanationLevel) -> String {
    let t = &p.solution;
    format!("{}{}{}", t.opening, level.pick(t.approach), t.closing)
}

fn examples(p: &LocalePack, level: ExplanationLevel) -> String {
    let t = &p.examples;
    let mut content = format!("{}{}", level.pick(t.heading), t.body);
    // Experts get a third, boundary-condition example.
    if level == ExplanationLevel::Expert {
        content.push_str(t.expert_extra);
    }
    content
}

fn summary(p: &LocalePack, level: ExplanationLevel) -> String {
    let t = &p.summary;
    format!(
        "{}{}{}{}{}",
        t.opening,
        level.pick(t.first_step),
        t.bridge,
        level.pick(t.second_step),
        t.closing
    )
}
