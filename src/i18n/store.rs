use tracing::debug;

use super::catalog;
use super::language::Language;

/// One phrase per explanation level: beginner, practical, expert.
pub type LevelSlot = [&'static str; 3];

#[derive(Debug, Clone, Copy)]
pub struct SectionTitles {
    pub core_issue: &'static str,
    pub breakdown: &'static str,
    pub solution: &'static str,
    pub examples: &'static str,
    pub summary: &'static str,
}

/// Core Issue body: `intro` + bolded prompt + `bridge` + register phrase + `outro`.
#[derive(Debug, Clone, Copy)]
pub struct CoreIssueTemplate {
    pub intro: &'static str,
    pub bridge: &'static str,
    pub register: LevelSlot,
    pub outro: &'static str,
}

/// Breakdown body with a single level-dependent foundation phrase.
#[derive(Debug, Clone, Copy)]
pub struct BreakdownTemplate {
    pub opening: &'static str,
    pub foundation: LevelSlot,
    pub closing: &'static str,
}

/// Solution body with a single level-dependent approach phrase.
#[derive(Debug, Clone, Copy)]
pub struct SolutionTemplate {
    pub opening: &'static str,
    pub approach: LevelSlot,
    pub closing: &'static str,
}

/// Examples body: level-dependent heading, fixed two-example body,
/// and a third block appended at expert level only.
#[derive(Debug, Clone, Copy)]
pub struct ExamplesTemplate {
    pub heading: LevelSlot,
    pub body: &'static str,
    pub expert_extra: &'static str,
}

/// Summary body with two level-dependent next-step phrases.
#[derive(Debug, Clone, Copy)]
pub struct SummaryTemplate {
    pub opening: &'static str,
    pub first_step: LevelSlot,
    pub bridge: &'static str,
    pub second_step: LevelSlot,
    pub closing: &'static str,
}

/// Complete hand-authored text set for one language.
#[derive(Debug, Clone, Copy)]
pub struct LocalePack {
    pub titles: SectionTitles,
    pub safety_refusal: &'static str,
    pub clarification_request: &'static str,
    pub core_issue: CoreIssueTemplate,
    pub breakdown: BreakdownTemplate,
    pub solution: SolutionTemplate,
    pub examples: ExamplesTemplate,
    pub summary: SummaryTemplate,
}

/// Total lookup over the closed language set. Never fails; every
/// language ships a fully authored pack.
pub fn pack(language: Language) -> &'static LocalePack {
    match language {
        Language::EnUs => &catalog::EN_US,
        Language::DeDe => &catalog::DE_DE,
        Language::EsEs => &catalog::ES_ES,
        Language::FrFr => &catalog::FR_FR,
        Language::PtPt => &catalog::PT_PT,
        Language::ItIt => &catalog::IT_IT,
        Language::RuRu => &catalog::RU_RU,
        Language::JaJp => &catalog::JA_JP,
        Language::ZhCn => &catalog::ZH_CN,
        Language::KoKr => &catalog::KO_KR,
        Language::TrTr => &catalog::TR_TR,
        Language::ArSa => &catalog::AR_SA,
        Language::HiIn => &catalog::HI_IN,
    }
}

/// Resolve an arbitrary tag, substituting English for anything unknown.
/// The fallback is explicit so callers holding raw settings strings
/// cannot hit a missing-locale path.
pub fn resolve(tag: &str) -> &'static LocalePack {
    match Language::from_tag(tag) {
        Some(language) => pack(language),
        None => {
            debug!(tag, "unknown language tag, falling back to en_US");
            pack(Language::default())
        }
    }
}
