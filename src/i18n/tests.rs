use super::language::Language;
use super::store::{pack, resolve};

#[test]
fn every_language_round_trips_through_its_tag() {
    for lang in Language::ALL {
        assert_eq!(Language::from_tag(lang.tag()), Some(lang));
    }
}

#[test]
fn serde_uses_underscore_tags() {
    let json = serde_json::to_string(&Language::DeDe).unwrap();
    assert_eq!(json, "\"de_DE\"");

    let parsed: Language = serde_json::from_str("\"ja_JP\"").unwrap();
    assert_eq!(parsed, Language::JaJp);
}

#[test]
fn unknown_tag_resolves_to_english() {
    let fallback = resolve("zz_ZZ");
    assert_eq!(fallback.titles.core_issue, pack(Language::EnUs).titles.core_issue);
    assert!(fallback.safety_refusal.contains("cybersecurity"));
}

#[test]
fn known_tag_resolves_to_its_own_pack() {
    let de = resolve("de_DE");
    assert_eq!(de.titles.examples, "📚 Beispiele");
}

#[test]
fn every_pack_is_fully_authored() {
    for lang in Language::ALL {
        let p = pack(lang);
        assert!(!p.safety_refusal.is_empty(), "{:?} refusal", lang);
        assert!(!p.clarification_request.is_empty(), "{:?} clarification", lang);
        assert!(!p.examples.expert_extra.is_empty(), "{:?} expert example", lang);
        for phrase in p.core_issue.register {
            assert!(!phrase.is_empty(), "{:?} register phrase", lang);
        }
    }
}

#[test]
fn labels_cover_all_languages() {
    for lang in Language::ALL {
        assert!(!lang.label().is_empty());
        assert!(!lang.native_label().is_empty());
    }
    assert_eq!(Language::TrTr.native_label(), "Türkçe");
}
