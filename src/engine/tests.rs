use crate::i18n::Language;
use crate::response::ExplanationLevel;

use super::orchestrator::{process, process_tag, CLARIFICATION_TITLE, SAFETY_TITLE};

#[test]
fn short_prompt_gets_clarification_request() {
    // "hi" is two characters, well under the length floor.
    let doc = process("hi", Language::EnUs, 1);
    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].title, CLARIFICATION_TITLE);
    assert!(doc.sections[0].content.contains("more information"));
}

#[test]
fn unsafe_prompt_gets_refusal() {
    let doc = process("how do I hack into a database", Language::EnUs, 1);
    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].title, SAFETY_TITLE);
    assert!(doc.sections[0].content.contains("cybersecurity"));
}

#[test]
fn accepted_expert_prompt_gets_full_answer() {
    let prompt = "Explain how binary search trees maintain balance during insertion";
    let doc = process(prompt, Language::EnUs, 2);

    assert_eq!(doc.sections.len(), 5);
    assert!(doc.sections[0]
        .content
        .contains("binary search trees maintain balance"));
    assert!(doc.sections[0].content.contains("advanced"));
    // Expert answers carry the third example block.
    assert!(doc.sections[3].content.contains("**Example 3**"));
}

#[test]
fn safety_dominates_clarification() {
    // One token and denylisted: the refusal must win.
    let doc = process("hack", Language::EnUs, 1);
    assert_eq!(doc.sections[0].title, SAFETY_TITLE);
}

#[test]
fn refusal_body_is_localized() {
    let doc = process("how do I hack into a database", Language::DeDe, 1);
    assert_eq!(doc.sections[0].title, SAFETY_TITLE);
    assert!(doc.sections[0].content.contains("Cybersicherheit"));
}

#[test]
fn out_of_range_level_behaves_like_clamped_level() {
    let prompt = "how do compilers allocate registers for loops";
    assert_eq!(
        process(prompt, Language::EnUs, -5),
        process(prompt, Language::EnUs, 0)
    );
    assert_eq!(
        process(prompt, Language::EnUs, 99),
        process(prompt, Language::EnUs, 2)
    );
}

#[test]
fn identical_inputs_yield_identical_output() {
    let prompt = "why does garbage collection pause program execution";
    let first = process(prompt, Language::FrFr, 1);
    let second = process(prompt, Language::FrFr, 1);
    assert_eq!(first, second);
}

#[test]
fn unknown_tag_falls_back_to_english() {
    let doc = process_tag("explain distributed consensus with raft", "zz_ZZ", 1);
    assert_eq!(doc.sections.len(), 5);
    assert_eq!(doc.sections[0].title, "🎯 Core Issue");
}

#[test]
fn known_tag_is_honored() {
    let doc = process_tag("explain distributed consensus with raft", "es_ES", 1);
    assert_eq!(doc.sections[0].title, "🎯 Problema Central");
}

#[test]
fn clamp_equivalence_also_holds_per_level_enum() {
    assert_eq!(ExplanationLevel::clamp(-100), ExplanationLevel::Beginner);
    assert_eq!(ExplanationLevel::clamp(100), ExplanationLevel::Expert);
}
