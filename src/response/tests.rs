use crate::i18n::Language;

use super::flattener::flatten;
use super::generator::generate;
use super::schema::ExplanationLevel;

const PROMPT: &str = "how do hash maps resolve collisions internally";

#[test]
fn answer_has_five_sections_in_fixed_order() {
    let doc = generate(PROMPT, Language::EnUs, ExplanationLevel::Practical);
    let titles: Vec<_> = doc.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "🎯 Core Issue",
            "🔍 Breaking It Down",
            "💡 Step-by-Step Solution",
            "📚 Examples",
            "✨ Summary & Next Steps",
        ]
    );
}

#[test]
fn section_order_is_locale_invariant() {
    let en = generate(PROMPT, Language::EnUs, ExplanationLevel::Beginner);
    for lang in Language::ALL {
        let doc = generate(PROMPT, lang, ExplanationLevel::Beginner);
        assert_eq!(doc.sections.len(), en.sections.len(), "{:?}", lang);
    }
}

#[test]
fn core_issue_echoes_prompt_verbatim() {
    let doc = generate(PROMPT, Language::DeDe, ExplanationLevel::Beginner);
    assert!(doc.sections[0].content.contains(&format!("**{}**", PROMPT)));
}

#[test]
fn register_phrase_tracks_level() {
    let beginner = generate(PROMPT, Language::EnUs, ExplanationLevel::Beginner);
    let expert = generate(PROMPT, Language::EnUs, ExplanationLevel::Expert);
    assert!(beginner.sections[0].content.contains("fundamental"));
    assert!(expert.sections[0].content.contains("advanced"));
}

#[test]
fn expert_examples_are_a_strict_superset_in_every_locale() {
    for lang in Language::ALL {
        let extra = crate::i18n::pack(lang).examples.expert_extra;
        let practical = generate(PROMPT, lang, ExplanationLevel::Practical);
        let expert = generate(PROMPT, lang, ExplanationLevel::Expert);
        assert!(
            expert.sections[3].content.contains(extra),
            "{:?}: expert example block missing",
            lang
        );
        assert!(
            !practical.sections[3].content.contains(extra),
            "{:?}: bonus block leaked below expert",
            lang
        );
    }
}

#[test]
fn expert_gets_third_example_block() {
    let doc = generate(PROMPT, Language::EnUs, ExplanationLevel::Expert);
    assert!(doc.sections[3].content.contains("**Example 3**"));

    let doc = generate(PROMPT, Language::EnUs, ExplanationLevel::Practical);
    assert!(!doc.sections[3].content.contains("**Example 3**"));
}

#[test]
fn clamp_maps_out_of_range_levels() {
    assert_eq!(ExplanationLevel::clamp(-5), ExplanationLevel::Beginner);
    assert_eq!(ExplanationLevel::clamp(0), ExplanationLevel::Beginner);
    assert_eq!(ExplanationLevel::clamp(1), ExplanationLevel::Practical);
    assert_eq!(ExplanationLevel::clamp(2), ExplanationLevel::Expert);
    assert_eq!(ExplanationLevel::clamp(99), ExplanationLevel::Expert);
}

#[test]
fn flatten_joins_sections_with_separator_lines() {
    let doc = generate(PROMPT, Language::EnUs, ExplanationLevel::Practical);
    let blob = flatten(&doc);
    assert!(blob.starts_with("## 🎯 Core Issue\n\n"));
    assert_eq!(blob.matches("\n\n---\n\n").count(), 4);
    assert!(blob.contains("## ✨ Summary & Next Steps"));
}

#[test]
fn document_serializes_to_json() {
    let doc = generate(PROMPT, Language::EnUs, ExplanationLevel::Practical);
    let json = serde_json::to_string(&doc).unwrap();
    assert!(json.contains("\"sections\""));
    let back: crate::response::StructuredResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}
